//! # Fallible Runnables
//!
//! A runnable takes nothing, returns nothing, and may fail with anything.
//! The surface mirrors the supplier shape with the result fixed to unit.

use fallible_core::{Failure, WrapperError};

/// A zero-input, zero-output operation that may fail with anything.
pub struct FallibleRunnable<F> {
    f: F,
}

impl<F> FallibleRunnable<F>
where
    F: Fn() -> Result<(), Failure>,
{
    /// Wraps a fallible closure as a runnable shape.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Performs the operation.
    pub fn run(&self) -> Result<(), Failure> {
        (self.f)()
    }

    /// Lowers this runnable to a plain closure; failures raise the
    /// [`WrapperError`] carrier.
    pub fn unchecked(self) -> impl Fn() {
        let f = self.f;
        move || {
            if let Err(failure) = f() {
                WrapperError::new(failure).raise();
            }
        }
    }
}

/// Lifts a plain closure into the fallible shape by delegation.
pub fn wrap<F>(f: F) -> FallibleRunnable<impl Fn() -> Result<(), Failure>>
where
    F: Fn(),
{
    FallibleRunnable::new(move || {
        f();
        Ok(())
    })
}
