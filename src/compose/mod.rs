//! Function composition utilities.
//!
//! This module provides functions and macros for composing functions in a
//! functional programming style.
//!
//! # Overview
//!
//! - [`compose`]: Compose two functions right-to-left (mathematical
//!   composition); the [`compose!`] macro generalizes this to any arity
//! - [`pipe`]: Apply a value to a function left-to-right; the [`pipe!`]
//!   macro threads a value through any number of functions
//! - [`identity`], [`constant`], [`flip`]: Fundamental combinators that
//!   serve as building blocks for composition
//!
//! # Examples
//!
//! ## Function composition (right-to-left)
//!
//! ```
//! use funcore::compose::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose(f, g)(x) = f(g(x))
//! let composed = compose(double, add_one);
//! assert_eq!(composed(1), 4); // double(add_one(1)) = double(2) = 4
//! ```
//!
//! ## Piping (left-to-right)
//!
//! ```
//! use funcore::compose::pipe;
//!
//! let result = pipe(pipe(5, |x| x * 2), |x| x + 1);
//! assert_eq!(result, 11);
//! ```
//!
//! # Mathematical Background
//!
//! Given `f: B -> C` and `g: A -> B`, the composition `(f . g): A -> C` is
//! defined as `(f . g)(x) = f(g(x))` - the right-hand function is applied
//! first. Piping is the reverse notation, `x |> f |> g = g(f(x))`, which
//! often matches the mental model of data flowing through transformations.
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//! - **Double Flip Identity**: `flip(flip(f)) == f`

mod compose_macro;
mod pipe_macro;
mod utils;

// Re-export helper functions
pub use utils::{compose, constant, flip, identity, pipe};
