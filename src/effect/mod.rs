//! Deferred side effect handling.
//!
//! This module provides the [`IO`] monad together with its error type
//! [`EffectError`] and the [`Outcome`] of a captured execution.
//!
//! # IO Monad
//!
//! The [`IO`] type represents a computation that may perform side effects
//! and may fail. Side effects are deferred until one of the run methods
//! (`run_sync`, `run_or_default`, `attempt`) is called, maintaining
//! referential transparency in pure code.
//!
//! ```rust
//! use funcore::effect::IO;
//!
//! // Create and chain IO actions
//! let io = IO::pure(10)
//!     .map(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//!
//! // Side effects don't occur until a run method is called
//! assert_eq!(io.run_sync().unwrap(), 21);
//! ```
//!
//! # Error Handling
//!
//! Failures during execution are represented uniformly by [`EffectError`]:
//! a message plus an optional wrapped underlying failure. The three run
//! methods differ only in how they surface that error:
//!
//! - [`IO::run_sync`] propagates it as `Err` for the caller to handle.
//! - [`IO::run_or_default`] suppresses it entirely and returns `None`.
//! - [`IO::attempt`] captures it into an inspectable [`Outcome`].
//!
//! ```rust
//! use funcore::effect::{IO, Outcome};
//!
//! let failing: IO<i32> = IO::fail("boom");
//!
//! assert!(failing.run_sync().is_err());
//! assert_eq!(failing.run_or_default(), None);
//! assert!(matches!(failing.attempt(), Outcome::Failure(_)));
//! ```

// =============================================================================
// Error Type
// =============================================================================

mod error;

pub use error::EffectError;

// =============================================================================
// Execution Outcome
// =============================================================================

mod outcome;

pub use outcome::Outcome;

// =============================================================================
// IO Monad
// =============================================================================

mod io;

pub use io::IO;
