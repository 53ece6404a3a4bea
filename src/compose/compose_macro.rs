//! The `compose!` macro for variadic function composition.

/// Composes any number of functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`: the rightmost
/// function is applied first, following the mathematical convention. The
/// composed closure defers execution until it is invoked.
///
/// This is the variadic generalization of
/// [`compose`](crate::compose::compose).
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Examples
///
/// ```
/// use funcore::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // compose!(f, g)(x) = f(g(x)) = double(add_one(1)) = 4
/// let composed = compose!(double, add_one);
/// assert_eq!(composed(1), 4);
/// ```
///
/// Three functions, with closures capturing the environment:
///
/// ```
/// use funcore::compose;
///
/// let multiplier = 3;
/// let multiply = move |x: i32| x * multiplier;
///
/// let composed = compose!(|x: i32| x - 1, multiply, |x: i32| x + 1);
/// assert_eq!(composed(4), 14); // ((4 + 1) * 3) - 1
/// ```
#[macro_export]
macro_rules! compose {
    // A single function composes to itself
    ($function:expr) => {
        $function
    };

    // compose!(f, g)(x) = f(g(x))
    ($outer:expr, $inner:expr $(,)?) => {{
        let outer = $outer;
        let inner = $inner;
        move |input| outer(inner(input))
    }};

    // Fold the tail first, then wrap: compose!(f, rest...) = f . compose!(rest...)
    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let composed_rest = $crate::compose!($($rest),+);
        move |input| outer(composed_rest(input))
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_compose_single() {
        let double = |x: i32| x * 2;
        let composed = compose!(double);
        assert_eq!(composed(5), 10);
    }

    #[test]
    fn test_compose_two() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let composed = compose!(double, add_one);
        assert_eq!(composed(1), 4);
    }

    #[test]
    fn test_compose_three() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        // add_one(double(square(3))) = add_one(18) = 19
        let composed = compose!(add_one, double, square);
        assert_eq!(composed(3), 19);
    }
}
