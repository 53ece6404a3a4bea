//! Helper functions (combinators) for function composition.
//!
//! This module provides the fundamental combinators of the crate:
//!
//! - [`compose`]: Right-to-left composition of two functions
//! - [`pipe`]: Immediate left-to-right application of a value to a function
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: A function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)

/// Composes two functions right-to-left.
///
/// Returns a new function equivalent to applying `inner` first and then
/// `outer`: `compose(f, g)(x) = f(g(x))`. Neither function executes until
/// the composed function is invoked.
///
/// For composing more than two functions, see the
/// [`compose!`](crate::compose!) macro.
///
/// # Examples
///
/// ```
/// use funcore::compose::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose(double, add_one);
/// assert_eq!(composed(1), 4); // double(add_one(1)) = double(2) = 4
/// ```
///
/// Types flow through the composition:
///
/// ```
/// use funcore::compose::compose;
///
/// let length_of_string = compose(|s: String| s.len(), |x: i32| x.to_string());
/// assert_eq!(length_of_string(12345), 5);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Applies a value to a function immediately.
///
/// `pipe(x, f)` is simply `f(x)`, written left-to-right so a value can be
/// threaded through transformations in reading order. Unlike [`compose`],
/// nothing is deferred. For longer pipelines, see the
/// [`pipe!`](crate::pipe!) macro.
///
/// # Examples
///
/// ```
/// use funcore::compose::pipe;
///
/// let doubled = pipe(5, |x| x * 2);
/// let result = pipe(doubled, |x| x + 1);
/// assert_eq!(result, 11);
/// ```
#[inline]
pub fn pipe<A, B, F>(value: A, function: F) -> B
where
    F: FnOnce(A) -> B,
{
    function(value)
}

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `compose(identity, f)` and `compose(f, identity)` are both equivalent
/// to `f`. In combinatory logic, this is known as the I combinator.
///
/// # Examples
///
/// ```
/// use funcore::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator in combinatory logic.
///
/// # Examples
///
/// ```
/// use funcore::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given `f(a, b)`, returns `g` such that `g(b, a) = f(a, b)`. Also known
/// as the C combinator.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use funcore::compose::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped = flip(divide);
/// assert_eq!(flipped(2.0, 10.0), 5.0); // divide(10.0, 2.0)
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
