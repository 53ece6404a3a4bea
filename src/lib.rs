//! # funcore
//!
//! Small functional programming utilities for Rust: a deferred side-effect
//! wrapper, null-safe combinators over `Option`, and function composition.
//!
//! ## Overview
//!
//! The library is deliberately small. It provides three independent pieces:
//!
//! - **Deferred Effects**: the [`effect::IO`] type wraps a computation and
//!   defers its execution (and its side effects) until one of the run
//!   methods is called. Failures are a typed [`effect::EffectError`].
//! - **Option Combinators**: free functions ([`option::zip2`],
//!   [`option::sequence`], [`option::fold`], ...) defining total behavior
//!   over present and absent values.
//! - **Composition**: [`compose::compose`] and [`compose::pipe`] functions
//!   plus the variadic [`compose!`] and [`pipe!`] macros.
//!
//! ## Feature Flags
//!
//! - `effect`: The `IO` deferred-effect type
//! - `option`: Combinators over `Option`
//! - `compose`: Function composition utilities
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funcore::effect::IO;
//!
//! let io = IO::pure(10)
//!     .map(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//!
//! // Nothing has executed yet; run_sync triggers the computation.
//! assert_eq!(io.run_sync().unwrap(), 21);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use funcore::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "option")]
    pub use crate::option::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "option")]
pub mod option;

#[cfg(feature = "compose")]
pub mod compose;
