//! # Fallible Suppliers
//!
//! A supplier produces a value from nothing and may fail with anything
//! while doing so. There is nothing to compose on a zero-input shape; the
//! surface is the abstract operation plus the two boundary conversions.

use std::marker::PhantomData;

use fallible_core::{Failure, WrapperError};

/// A supplier of `R` that may fail with anything.
pub struct FallibleSupplier<R, S> {
    s: S,
    _phantom: PhantomData<fn() -> R>,
}

impl<R, S> FallibleSupplier<R, S>
where
    S: Fn() -> Result<R, Failure>,
{
    /// Wraps a fallible closure as a supplier shape.
    pub fn new(s: S) -> Self {
        Self {
            s,
            _phantom: PhantomData,
        }
    }

    /// Produces a value.
    pub fn get(&self) -> Result<R, Failure> {
        (self.s)()
    }

    /// Lowers this supplier to a plain closure; failures raise the
    /// [`WrapperError`] carrier.
    pub fn unchecked(self) -> impl Fn() -> R {
        let s = self.s;
        move || match s() {
            Ok(value) => value,
            Err(failure) => WrapperError::new(failure).raise(),
        }
    }
}

/// Lifts a plain supplier into the fallible shape by delegation.
pub fn wrap<R, S>(s: S) -> FallibleSupplier<R, impl Fn() -> Result<R, Failure>>
where
    S: Fn() -> R,
{
    FallibleSupplier::new(move || Ok(s()))
}

// ============================================================================
// Primitive specializations
// ============================================================================

/// Fallible supplier of `bool`.
pub type FallibleBoolSupplier<S> = FallibleSupplier<bool, S>;
/// Fallible supplier of `char`.
pub type FallibleCharSupplier<S> = FallibleSupplier<char, S>;
/// Fallible supplier of `i32`.
pub type FallibleI32Supplier<S> = FallibleSupplier<i32, S>;
/// Fallible supplier of `i64`.
pub type FallibleI64Supplier<S> = FallibleSupplier<i64, S>;
/// Fallible supplier of `f64`.
pub type FallibleF64Supplier<S> = FallibleSupplier<f64, S>;
