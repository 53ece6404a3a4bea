//! The `pipe!` macro for left-to-right value threading.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`: the value flows
/// through the transformations in the order they are written. Unlike
/// [`compose!`](crate::compose!), which builds a new function, `pipe!`
/// applies the transformations immediately.
///
/// This is the variadic generalization of [`pipe`](crate::compose::pipe).
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each function only needs to implement [`FnOnce`], since every step is
/// invoked exactly once.
///
/// # Examples
///
/// ```
/// use funcore::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // double(5) = 10, add_one(10) = 11
/// let result = pipe!(5, double, add_one);
/// assert_eq!(result, 11);
/// ```
///
/// Types can change along the pipeline:
///
/// ```
/// use funcore::pipe;
///
/// let result = pipe!(12345, |x: i32| x.to_string(), |s: String| s.len());
/// assert_eq!(result, 5);
/// ```
///
/// Equivalence with composition:
///
/// ```
/// use funcore::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(10, f, g), compose!(g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    // A bare value passes through unchanged
    ($value:expr) => {
        $value
    };

    // pipe!(x, f) = f(x)
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Apply the head function, then thread the rest
    ($value:expr, $function:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($rest),+)
    };
}
