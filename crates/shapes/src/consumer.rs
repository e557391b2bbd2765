//! # Fallible Consumers
//!
//! A consumer accepts its argument for the sake of a side effect and may
//! fail with anything while performing it. Consumers borrow their argument
//! so a chain built with [`and_then`](FallibleConsumer::and_then) can hand
//! the same value to every stage.
//!
//! Chains run in order; a failing stage stops the chain and the remaining
//! stages never observe the value.

use std::marker::PhantomData;

use fallible_core::{Failure, WrapperError};

/// A consumer of `T` that may fail with anything.
pub struct FallibleConsumer<T, C> {
    c: C,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, C> FallibleConsumer<T, C>
where
    C: Fn(&T) -> Result<(), Failure>,
{
    /// Wraps a fallible closure as a consumer shape.
    pub fn new(c: C) -> Self {
        Self {
            c,
            _phantom: PhantomData,
        }
    }

    /// Performs this consumer's operation on the given argument.
    pub fn accept(&self, value: &T) -> Result<(), Failure> {
        (self.c)(value)
    }

    /// Runs this consumer, then a plain `after` consumer, on the same value.
    ///
    /// A failure here skips `after` entirely.
    pub fn and_then<D>(self, after: D) -> FallibleConsumer<T, impl Fn(&T) -> Result<(), Failure>>
    where
        D: Fn(&T),
    {
        let c = self.c;
        FallibleConsumer::new(move |value: &T| {
            c(value)?;
            after(value);
            Ok(())
        })
    }

    /// Lowers this consumer to a plain closure; failures raise the
    /// [`WrapperError`] carrier.
    pub fn unchecked(self) -> impl Fn(&T) {
        let c = self.c;
        move |value: &T| {
            if let Err(failure) = c(value) {
                WrapperError::new(failure).raise();
            }
        }
    }
}

/// Lifts a plain consumer into the fallible shape by delegation.
pub fn wrap<T, C>(c: C) -> FallibleConsumer<T, impl Fn(&T) -> Result<(), Failure>>
where
    C: Fn(&T),
{
    FallibleConsumer::new(move |value: &T| {
        c(value);
        Ok(())
    })
}

// ============================================================================
// Bi-arity variant
// ============================================================================

/// A consumer of `(T, U)` that may fail with anything.
pub struct FallibleBiConsumer<T, U, C> {
    c: C,
    _phantom: PhantomData<fn(&T, &U)>,
}

impl<T, U, C> FallibleBiConsumer<T, U, C>
where
    C: Fn(&T, &U) -> Result<(), Failure>,
{
    /// Wraps a fallible closure as a bi-consumer shape.
    pub fn new(c: C) -> Self {
        Self {
            c,
            _phantom: PhantomData,
        }
    }

    /// Performs this consumer's operation on the given arguments.
    pub fn accept(&self, first: &T, second: &U) -> Result<(), Failure> {
        (self.c)(first, second)
    }

    /// Runs this consumer, then a plain `after` consumer, on the same pair.
    pub fn and_then<D>(
        self,
        after: D,
    ) -> FallibleBiConsumer<T, U, impl Fn(&T, &U) -> Result<(), Failure>>
    where
        D: Fn(&T, &U),
    {
        let c = self.c;
        FallibleBiConsumer::new(move |first: &T, second: &U| {
            c(first, second)?;
            after(first, second);
            Ok(())
        })
    }

    /// Lowers this consumer to a plain closure; failures raise the
    /// [`WrapperError`] carrier.
    pub fn unchecked(self) -> impl Fn(&T, &U) {
        let c = self.c;
        move |first: &T, second: &U| {
            if let Err(failure) = c(first, second) {
                WrapperError::new(failure).raise();
            }
        }
    }
}

/// Lifts a plain bi-consumer into the fallible shape by delegation.
pub fn wrap_bi<T, U, C>(c: C) -> FallibleBiConsumer<T, U, impl Fn(&T, &U) -> Result<(), Failure>>
where
    C: Fn(&T, &U),
{
    FallibleBiConsumer::new(move |first: &T, second: &U| {
        c(first, second);
        Ok(())
    })
}

// ============================================================================
// Primitive specializations
// ============================================================================

/// Fallible consumer of `char`.
pub type FallibleCharConsumer<C> = FallibleConsumer<char, C>;
/// Fallible consumer of `i32`.
pub type FallibleI32Consumer<C> = FallibleConsumer<i32, C>;
/// Fallible consumer of `i64`.
pub type FallibleI64Consumer<C> = FallibleConsumer<i64, C>;
/// Fallible consumer of `f64`.
pub type FallibleF64Consumer<C> = FallibleConsumer<f64, C>;
