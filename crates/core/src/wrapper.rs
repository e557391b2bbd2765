//! # WrapperError - The Carrier Across the Unchecked Boundary
//!
//! Lowering a fallible callable into a plain one leaves its failure nowhere
//! to go: a plain `Fn(T) -> R` has no error channel. The lowering therefore
//! panics, and [`WrapperError`] is the panic payload: a carrier holding
//! exactly one [`Failure`] cause.
//!
//! Code on the plain side that wants the failure back reverses the
//! conversion step by step:
//!
//! ```text
//!   fallible side                      plain side
//!   Result<R, Failure> ── unchecked ─▶ R, or panic!(WrapperError)
//!                      ◀── capture ──  Result<R, WrapperError>
//! ```
//!
//! and then interrogates the carrier: [`WrapperError::checked`] asserts the
//! cause is a typed error (resuming the unwind otherwise), and
//! [`WrapperError::rethrow`] peels the cause out when it matches an expected
//! concrete type, handing the carrier back unchanged when it does not so
//! further candidates can be tried.

use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::failure::Failure;

/// Carrier error wrapping the failure of a lowered fallible callable.
///
/// Invariant: holds exactly one cause, wrapped exactly once. The carrier is
/// only ever built at the lowering boundary, never re-wrapped.
pub struct WrapperError {
    cause: Failure,
}

impl WrapperError {
    /// Wraps a cause.
    pub fn new(cause: impl Into<Failure>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// Borrows the wrapped cause.
    pub fn cause(&self) -> &Failure {
        &self.cause
    }

    /// Takes the wrapped cause back out.
    pub fn into_cause(self) -> Failure {
        self.cause
    }

    /// Unwraps and surfaces the cause if it is a typed error of concrete
    /// type `E`; otherwise hands the carrier back unchanged.
    ///
    /// The `Ok` side being the *carrier* makes checks against several
    /// candidate types chain naturally:
    ///
    /// ```rust
    /// use fallible_core::{Failure, WrapperError};
    /// use std::fmt;
    ///
    /// #[derive(Debug)]
    /// struct Timeout;
    /// impl fmt::Display for Timeout {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         write!(f, "timed out")
    ///     }
    /// }
    /// impl std::error::Error for Timeout {}
    ///
    /// let carrier = WrapperError::new(Failure::from(Timeout));
    /// let carrier = match carrier.rethrow::<std::io::Error>() {
    ///     Ok(carrier) => carrier, // not an io::Error, keep checking
    ///     Err(io) => return println!("io: {io}"),
    /// };
    /// assert!(carrier.rethrow::<Timeout>().is_err());
    /// ```
    pub fn rethrow<E>(self) -> Result<Self, E>
    where
        E: Error + Send + Sync + 'static,
    {
        match self.cause.downcast::<E>() {
            Ok(error) => Err(error),
            Err(cause) => Ok(Self { cause }),
        }
    }

    /// Resumes unwinding if the cause is a captured panic; otherwise returns
    /// the carrier unchanged.
    ///
    /// A carrier that survives this call is guaranteed to hold a typed,
    /// checked-style error value.
    pub fn checked(self) -> Self {
        match self.cause {
            Failure::Panic(payload) => panic::resume_unwind(payload),
            cause @ Failure::Error(_) => Self { cause },
        }
    }

    /// Panics with this carrier as the payload.
    ///
    /// This is the lowering every shape's `unchecked()` performs when the
    /// underlying callable fails.
    pub fn raise(self) -> ! {
        panic::panic_any(self)
    }

    /// Runs `f`, catching the carrier it raises, if any.
    ///
    /// An unwind whose payload is not a [`WrapperError`] is resumed
    /// untouched; foreign panics are none of this boundary's business.
    pub fn capture<R>(f: impl FnOnce() -> R) -> Result<R, Self> {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Ok(value),
            Err(payload) => match payload.downcast::<WrapperError>() {
                Ok(carrier) => Err(*carrier),
                Err(payload) => panic::resume_unwind(payload),
            },
        }
    }
}

impl fmt::Display for WrapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wrapped failure: {}", self.cause)
    }
}

impl fmt::Debug for WrapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapperError")
            .field("cause", &self.cause)
            .finish()
    }
}

impl Error for WrapperError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_error().map(|e| e as &(dyn Error + 'static))
    }
}
