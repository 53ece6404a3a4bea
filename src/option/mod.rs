//! Null-safe combinators over optional values.
//!
//! This module provides free functions for working with [`Option`] in a
//! functional style, defining total behavior across both the present and
//! absent states:
//!
//! - [`zip2`] / [`zip3`]: Combine options only when every operand is present
//! - [`sequence`]: Turn a collection of options into an optional collection
//! - [`fold`]: Functional "if-else" that collapses an option into a value
//!
//! All functions are pure and stateless; no wrapper type is ever
//! constructed, and the combining closures are never partially invoked.
//!
//! # Examples
//!
//! ```rust
//! use funcore::option::{fold, sequence, zip2};
//!
//! assert_eq!(zip2(Some(2), Some(3), |a, b| a + b), Some(5));
//! assert_eq!(zip2(None::<i32>, Some(3), |a, b| a + b), None);
//!
//! assert_eq!(sequence(vec![Some(1), Some(2)]), Some(vec![1, 2]));
//! assert_eq!(sequence(vec![Some(1), None]), None);
//!
//! let label = fold(Some(42), || "empty".to_string(), |v| format!("value:{v}"));
//! assert_eq!(label, "value:42");
//! ```

mod combinators;

pub use combinators::{fold, sequence, zip2, zip3};
