//! # Failure - The "May Fail With Anything" Union
//!
//! A fallible callable is allowed to fail with *any* failure, not just a
//! declared subset. Rust splits "any failure" across two mechanisms:
//!
//! - a typed error value, surfaced through `Result` (the checked tier);
//! - a panic, surfaced through unwinding (the unchecked tier).
//!
//! [`Failure`] is the union of both, so a single `Result<_, Failure>`
//! return channel can carry whichever one the underlying behavior produced.
//!
//! ## Ergonomics
//!
//! Any concrete error converts into the typed tier via `From`, so `?` works
//! directly inside a fallible closure:
//!
//! ```rust
//! use fallible_core::Failure;
//!
//! let parse = |text: &str| -> Result<i32, Failure> { Ok(text.parse::<i32>()?) };
//! assert!(parse("7").is_ok());
//! assert!(parse("seven").is_err());
//! ```
//!
//! The panic tier is only ever entered explicitly, through
//! [`Failure::catch`] or [`Failure::from_panic`]. The library never catches
//! a panic behind the caller's back.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error as ThisError;

/// A type-erased, thread-mobile error value.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// The failure raised by a fallible callable: a typed error value or a
/// captured panic payload.
///
/// `Failure` deliberately does not implement [`Error`] itself; that keeps
/// the blanket `From<E: Error>` conversion coherent, the same trade the
/// ecosystem's type-erased error carriers make.
pub enum Failure {
    /// A typed error value. This is the checked-style tier: the failure was
    /// an ordinary value the callable returned.
    Error(BoxError),
    /// A captured panic payload. This is the unchecked-style tier: the
    /// failure unwound out of the callable and was caught at a boundary.
    Panic(Box<dyn Any + Send + 'static>),
}

impl Failure {
    /// An ad-hoc typed failure described only by a message.
    ///
    /// ```rust
    /// use fallible_core::Failure;
    ///
    /// let failure = Failure::msg("upstream refused the request");
    /// assert_eq!(failure.to_string(), "upstream refused the request");
    /// ```
    pub fn msg(message: impl fmt::Display) -> Self {
        Failure::Error(Box::new(MessageError(message.to_string())))
    }

    /// Admits an already-boxed error into the typed tier.
    pub fn from_boxed(error: BoxError) -> Self {
        Failure::Error(error)
    }

    /// Admits a captured panic payload into the panic tier.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        Failure::Panic(payload)
    }

    /// Runs `f`, mapping an unwind into the panic tier.
    ///
    /// This is the entry point for code that wants panicking behavior to
    /// flow through the same `Result` channel as typed errors.
    pub fn catch<R>(f: impl FnOnce() -> R) -> Result<R, Failure> {
        panic::catch_unwind(AssertUnwindSafe(f)).map_err(Failure::Panic)
    }

    /// Whether this failure is a captured panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, Failure::Panic(_))
    }

    /// Whether the typed cause is of concrete type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: Error + Send + Sync + 'static,
    {
        matches!(self, Failure::Error(error) if error.is::<E>())
    }

    /// Attempts to take the typed cause out as a concrete `E`.
    ///
    /// Returns the failure unchanged when the cause is a different type or
    /// a panic payload.
    pub fn downcast<E>(self) -> Result<E, Failure>
    where
        E: Error + Send + Sync + 'static,
    {
        match self {
            Failure::Error(error) => error.downcast::<E>().map(|e| *e).map_err(Failure::Error),
            panic @ Failure::Panic(_) => Err(panic),
        }
    }

    /// Borrows the typed cause as a concrete `E`, if it is one.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + Send + Sync + 'static,
    {
        match self {
            Failure::Error(error) => error.downcast_ref::<E>(),
            Failure::Panic(_) => None,
        }
    }

    /// Borrows the typed cause, if this failure has one.
    pub fn as_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Failure::Error(error) => Some(error.as_ref()),
            Failure::Panic(_) => None,
        }
    }
}

impl<E> From<E> for Failure
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Failure::Error(Box::new(error))
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Error(error) => fmt::Display::fmt(error, f),
            Failure::Panic(payload) => write!(f, "panic: {}", panic_text(payload.as_ref())),
        }
    }
}

// Panic payloads are not `Debug`, so the derive is unavailable.
impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Failure::Panic(payload) => f
                .debug_tuple("Panic")
                .field(&panic_text(payload.as_ref()))
                .finish(),
        }
    }
}

/// The error type behind [`Failure::msg`].
#[derive(Debug, ThisError)]
#[error("{0}")]
pub struct MessageError(String);

impl MessageError {
    /// The message this failure was built from.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Best-effort rendering of a panic payload. Covers the two payload types
/// the `panic!` macro produces.
fn panic_text(payload: &(dyn Any + Send)) -> &str {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text
    } else {
        "opaque payload"
    }
}
