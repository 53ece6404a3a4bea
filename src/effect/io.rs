//! IO Monad - Deferred side effect handling.
//!
//! The `IO` type represents a computation that may perform side effects and
//! may fail. Nothing is executed until one of the run methods is called,
//! maintaining referential transparency in pure code.
//!
//! # Design Philosophy
//!
//! IO "describes" side effects but doesn't "execute" them. Execution happens
//! only via the run methods, which should be called at the program's "edge"
//! (e.g., in the `main` function). Unlike a lazy cell, `IO` never memoizes:
//! every execution re-runs the stored computation and its side effects.
//!
//! # Examples
//!
//! ```rust
//! use funcore::effect::IO;
//!
//! // Create a pure IO action
//! let io = IO::pure(42);
//! assert_eq!(io.run_sync().unwrap(), 42);
//!
//! // Chain IO actions
//! let io = IO::pure(10)
//!     .map(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run_sync().unwrap(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use funcore::effect::IO;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let executed = Arc::new(AtomicBool::new(false));
//! let executed_clone = executed.clone();
//!
//! let io = IO::effect(move || {
//!     executed_clone.store(true, Ordering::SeqCst);
//!     42
//! });
//!
//! // Not executed yet
//! assert!(!executed.load(Ordering::SeqCst));
//!
//! // Execute the IO action
//! let result = io.run_sync().unwrap();
//! assert!(executed.load(Ordering::SeqCst));
//! assert_eq!(result, 42);
//! ```

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::effect::{EffectError, Outcome};

/// A monad representing deferred, repeatable side effects.
///
/// `IO<A>` wraps a computation that produces a value of type `A`, may
/// perform side effects, and may fail with an [`EffectError`]. The
/// computation is not executed until a run method is called, and it can be
/// executed any number of times: each invocation independently re-runs the
/// computation and whatever side effects it performs.
///
/// An `IO` is immutable once constructed. Every combinator returns a new
/// `IO` wrapping a newly composed computation; the original is untouched.
/// Cloning is cheap and shares the stored computation (never any result).
///
/// # Type Parameters
///
/// - `A`: The type of the value produced by the IO action.
///
/// # Monad Laws
///
/// `IO` satisfies the monad laws:
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    /// The wrapped computation that produces a value of type `A` or fails.
    run_io: Rc<dyn Fn() -> Result<A, EffectError>>,
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            run_io: Rc::clone(&self.run_io),
        }
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IO").finish_non_exhaustive()
    }
}

impl<A: 'static> IO<A> {
    /// Creates an IO action from a fallible computation.
    ///
    /// This is the primary constructor. The computation is not executed
    /// until a run method is called; construction itself never fails and
    /// performs no side effects.
    ///
    /// # Arguments
    ///
    /// * `action` - A closure producing `Ok(value)` or `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::{EffectError, IO};
    ///
    /// let io = IO::of(|| "7".parse::<i32>().map_err(|e| EffectError::with_cause("bad int", e)));
    /// assert_eq!(io.run_sync().unwrap(), 7);
    /// ```
    pub fn of<F>(action: F) -> Self
    where
        F: Fn() -> Result<A, EffectError> + 'static,
    {
        Self {
            run_io: Rc::new(action),
        }
    }

    /// Creates an IO action from an infallible side-effecting computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let io = IO::effect(|| {
    ///     println!("Side effect!");
    ///     42
    /// });
    /// // Nothing is printed yet
    /// let result = io.run_sync().unwrap();
    /// // Now "Side effect!" is printed
    /// assert_eq!(result, 42);
    /// ```
    pub fn effect<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::of(move || Ok(action()))
    }

    /// Wraps a pure value in an IO action.
    ///
    /// This creates an IO action that returns the given value without
    /// performing any side effects. Because an `IO` may run repeatedly,
    /// the value is cloned on each execution.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let io = IO::pure(42);
    /// assert_eq!(io.run_sync().unwrap(), 42);
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::of(move || Ok(value.clone()))
    }

    /// Creates an IO action that always fails with the given error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let io: IO<i32> = IO::fail("boom");
    /// assert_eq!(io.run_sync().unwrap_err().message(), "boom");
    /// ```
    pub fn fail(error: impl Into<EffectError>) -> Self {
        let error = error.into();
        Self::of(move || Err(error.clone()))
    }

    /// Executes the IO action synchronously and returns the result.
    ///
    /// Each call independently re-runs the stored computation; no result
    /// is cached and repeated side effects are not deduplicated.
    ///
    /// # Errors
    ///
    /// Propagates the exact error raised by the computation, unwrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let io = IO::pure(42);
    /// assert_eq!(io.run_sync().unwrap(), 42);
    /// // Running again re-executes the computation
    /// assert_eq!(io.run_sync().unwrap(), 42);
    /// ```
    pub fn run_sync(&self) -> Result<A, EffectError> {
        (self.run_io)()
    }

    /// Executes the IO action, suppressing any failure.
    ///
    /// On success returns `Some(value)`; on failure returns `None`. The
    /// error itself is discarded, surviving only as a warning on the `log`
    /// side channel. This method never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// assert_eq!(IO::pure(42).run_or_default(), Some(42));
    /// assert_eq!(IO::<i32>::fail("boom").run_or_default(), None);
    /// ```
    pub fn run_or_default(&self) -> Option<A> {
        match (self.run_io)() {
            Ok(value) => Some(value),
            Err(error) => {
                log::warn!("IO error: {error}");
                None
            }
        }
    }

    /// Executes the IO action and captures the result as an [`Outcome`].
    ///
    /// A normal completion becomes [`Outcome::Success`]; a raised error
    /// becomes [`Outcome::Failure`] with the cause inspectable. This method
    /// never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let outcome = IO::pure(42).attempt();
    /// assert_eq!(outcome.value(), Some(&42));
    ///
    /// let outcome = IO::<i32>::fail("boom").attempt();
    /// assert_eq!(outcome.error().map(|e| e.message()), Some("boom"));
    /// ```
    pub fn attempt(&self) -> Outcome<A> {
        Outcome::from((self.run_io)())
    }

    /// Transforms the result of an IO action using a function.
    ///
    /// This is the `fmap` operation from Functor. If the upstream
    /// computation fails, its error propagates and `function` is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let io = IO::pure(21).map(|x| x * 2);
    /// assert_eq!(io.run_sync().unwrap(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        IO::of(move || {
            let value = (self.run_io)()?;
            Ok(function(value))
        })
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    ///
    /// This is the `bind` operation from Monad. If the upstream computation
    /// fails, its error propagates and `function` is never invoked;
    /// otherwise the returned IO is executed and its result or failure
    /// propagates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let io = IO::pure(10).flat_map(|x| IO::pure(x * 2));
    /// assert_eq!(io.run_sync().unwrap(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::of(move || {
            let value = (self.run_io)()?;
            function(value).run_sync()
        })
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let io = IO::pure(10).and_then(|x| IO::pure(x + 5));
    /// assert_eq!(io.run_sync().unwrap(), 15);
    /// ```
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects; if it
    /// fails, `next` is not executed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let io = IO::pure(10).then(IO::pure(20));
    /// assert_eq!(io.run_sync().unwrap(), 20);
    /// ```
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        IO::of(move || {
            let _ = (self.run_io)()?;
            next.run_sync()
        })
    }

    /// Combines two IO actions using a function.
    ///
    /// Both actions run in order; the first failure short-circuits and
    /// `function` is never invoked on a failed operand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let io = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.run_sync().unwrap(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::of(move || {
            let first = (self.run_io)()?;
            let second = other.run_sync()?;
            Ok(function(first, second))
        })
    }

    /// Combines two IO actions into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let io = IO::pure(10).product(IO::pure("hello".to_string()));
    /// assert_eq!(io.run_sync().unwrap(), (10, "hello".to_string()));
    /// ```
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Runs a side effect on the success value, passing the value through.
    ///
    /// The observer is not invoked when the computation fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let io = IO::pure(42).tap(|value| println!("saw {value}"));
    /// assert_eq!(io.run_sync().unwrap(), 42);
    /// ```
    pub fn tap<F>(self, observer: F) -> Self
    where
        F: Fn(&A) + 'static,
    {
        Self::of(move || {
            let value = (self.run_io)()?;
            observer(&value);
            Ok(value)
        })
    }

    /// Recovers from a failure by producing a new IO from the error.
    ///
    /// The handler is only invoked when the computation fails; a success
    /// passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let io = IO::<i32>::fail("boom").catch(|_| IO::pure(0));
    /// assert_eq!(io.run_sync().unwrap(), 0);
    /// ```
    pub fn catch<F>(self, handler: F) -> Self
    where
        F: Fn(EffectError) -> Self + 'static,
    {
        Self::of(move || match (self.run_io)() {
            Ok(value) => Ok(value),
            Err(error) => handler(error).run_sync(),
        })
    }

    /// Falls back to another IO action on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    ///
    /// let io = IO::<i32>::fail("boom").or_else(IO::pure(99));
    /// assert_eq!(io.run_sync().unwrap(), 99);
    /// ```
    pub fn or_else(self, fallback: Self) -> Self {
        Self::of(move || match (self.run_io)() {
            Ok(value) => Ok(value),
            Err(_) => fallback.run_sync(),
        })
    }
}

// =============================================================================
// Convenience Constructors
// =============================================================================

impl IO<()> {
    /// Creates an IO action that prints a line to standard output.
    ///
    /// The output is not printed until the action runs.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use funcore::effect::IO;
    ///
    /// let io = IO::print_line("Hello, World!");
    /// io.run_sync().unwrap(); // Prints "Hello, World!"
    /// ```
    pub fn print_line<S: fmt::Display + 'static>(message: S) -> Self {
        Self::effect(move || {
            println!("{message}");
        })
    }

    /// Creates an IO action that waits for a specified duration.
    ///
    /// The delay does not occur until the action runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::effect::IO;
    /// use std::time::Duration;
    ///
    /// let io = IO::delay(Duration::from_millis(10));
    /// io.run_sync().unwrap(); // Waits for 10ms
    /// ```
    pub fn delay(duration: Duration) -> Self {
        Self::effect(move || {
            std::thread::sleep(duration);
        })
    }
}
