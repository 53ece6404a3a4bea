//! The error type raised by failing IO computations.

use std::error::Error;
use std::sync::Arc;

/// An error raised while executing an [`IO`](crate::effect::IO) computation.
///
/// All failures share this single representation: a human-readable message
/// and, optionally, the underlying native failure that caused it. There is
/// no further taxonomy; run methods treat every raised error uniformly.
///
/// The wrapped cause is reference-counted so the error is [`Clone`]. This
/// matters because an `IO` can be executed any number of times, and an
/// always-failing effect must be able to produce its error on each run.
///
/// # Examples
///
/// ```rust
/// use funcore::effect::EffectError;
///
/// let plain = EffectError::new("connection refused");
/// assert_eq!(plain.message(), "connection refused");
///
/// let parse_failure = "oops".parse::<i32>().unwrap_err();
/// let wrapped = EffectError::with_cause("invalid port", parse_failure);
/// assert!(std::error::Error::source(&wrapped).is_some());
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct EffectError {
    /// Human-readable description of the failure.
    message: String,
    /// The underlying failure, if this error wraps one.
    #[source]
    cause: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl EffectError {
    /// Creates an error from a message alone.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates an error wrapping an underlying native failure.
    ///
    /// The cause remains inspectable through [`std::error::Error::source`].
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for EffectError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for EffectError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
