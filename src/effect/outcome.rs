//! The captured result of executing an IO computation.

use crate::effect::EffectError;

/// The result of a captured [`IO`](crate::effect::IO) execution.
///
/// Produced by [`IO::attempt`](crate::effect::IO::attempt). Exactly one
/// variant is ever populated: either the computation completed normally and
/// `Success` holds its value, or it raised and `Failure` holds the error.
///
/// # Examples
///
/// ```rust
/// use funcore::effect::{IO, Outcome};
///
/// let outcome = IO::pure(42).attempt();
/// assert_eq!(outcome.value(), Some(&42));
///
/// let outcome = IO::<i32>::fail("boom").attempt();
/// assert_eq!(outcome.error().map(|e| e.message()), Some("boom"));
/// ```
#[derive(Debug, Clone)]
pub enum Outcome<A> {
    /// The computation completed and produced a value.
    Success(A),
    /// The computation raised an error.
    Failure(EffectError),
}

impl<A> Outcome<A> {
    /// Returns `true` if this outcome holds a value.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this outcome holds an error.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns a reference to the value, if the computation succeeded.
    pub const fn value(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the error, if the computation failed.
    pub const fn error(&self) -> Option<&EffectError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Collapses the outcome into a single value.
    ///
    /// Exactly one of the two functions is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::{IO, Outcome};
    ///
    /// let description = IO::pure(7)
    ///     .attempt()
    ///     .fold(|error| error.to_string(), |value| format!("got {value}"));
    /// assert_eq!(description, "got 7");
    /// ```
    pub fn fold<R>(
        self,
        on_failure: impl FnOnce(EffectError) -> R,
        on_success: impl FnOnce(A) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Converts into a standard [`Result`].
    pub fn into_result(self) -> Result<A, EffectError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<A> From<Result<A, EffectError>> for Outcome<A> {
    fn from(result: Result<A, EffectError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let outcome = Outcome::Success(42);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.value(), Some(&42));
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_failure_accessors() {
        let outcome: Outcome<i32> = Outcome::Failure(EffectError::new("boom"));
        assert!(outcome.is_failure());
        assert!(!outcome.is_success());
        assert!(outcome.value().is_none());
        assert_eq!(outcome.error().map(EffectError::message), Some("boom"));
    }

    #[test]
    fn test_fold_invokes_exactly_one_branch() {
        let success: Outcome<i32> = Outcome::Success(1);
        assert_eq!(success.fold(|_| "failure", |_| "success"), "success");

        let failure: Outcome<i32> = Outcome::Failure(EffectError::new("x"));
        assert_eq!(failure.fold(|_| "failure", |_| "success"), "failure");
    }

    #[test]
    fn test_result_round_trip() {
        let outcome: Outcome<i32> = Outcome::from(Ok(5));
        assert_eq!(outcome.into_result().unwrap(), 5);

        let outcome: Outcome<i32> = Outcome::from(Err(EffectError::new("nope")));
        assert_eq!(outcome.into_result().unwrap_err().message(), "nope");
    }
}
