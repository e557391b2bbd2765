//! # Fallible Functions
//!
//! A fallible function is a morphism `T → R` whose evaluation may fail with
//! anything. The shape holds nothing but the behavior:
//!
//! ```text
//!        ┌──────────────────┐
//!   T ──▶│ FallibleFunction │──▶ Result<R, Failure>
//!        └──────────────────┘
//! ```
//!
//! Composition is heterogeneous on purpose: the joining stages of
//! [`and_then`](FallibleFunction::and_then) and
//! [`compose`](FallibleFunction::compose) are plain, non-failing closures,
//! so fallible and infallible stages mix freely in one pipeline. A failure
//! in any stage propagates verbatim and the remaining stages never run.
//!
//! ## Crossing the boundary
//!
//! [`wrap`] lifts a plain closure into the fallible shape by delegation;
//! [`unchecked`](FallibleFunction::unchecked) lowers a fallible shape into a
//! plain closure that raises a [`WrapperError`] carrier when the underlying
//! operation fails.
//!
//! ```rust
//! use fallible_shapes::function;
//!
//! let double = function::wrap(|n: i32| n * 2);
//! let plain = double.unchecked();
//! assert_eq!(plain(21), 42); // round trip changes nothing
//! ```

use std::marker::PhantomData;

use fallible_core::{Failure, WrapperError};

/// A function `T → R` that may fail with anything.
///
/// Built from a fallible closure with [`FallibleFunction::new`], or lifted
/// from a plain one with [`wrap`].
pub struct FallibleFunction<T, R, F> {
    f: F,
    _phantom: PhantomData<fn(T) -> R>,
}

impl<T, R, F> FallibleFunction<T, R, F>
where
    F: Fn(T) -> Result<R, Failure>,
{
    /// Wraps a fallible closure as a function shape.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }

    /// Applies this function to the given argument.
    pub fn apply(&self, value: T) -> Result<R, Failure> {
        (self.f)(value)
    }

    /// Pipes this function's result through a plain `after` stage.
    ///
    /// A failure here skips `after` entirely.
    pub fn and_then<V, G>(
        self,
        after: G,
    ) -> FallibleFunction<T, V, impl Fn(T) -> Result<V, Failure>>
    where
        G: Fn(R) -> V,
    {
        let f = self.f;
        FallibleFunction::new(move |value| f(value).map(|result| after(result)))
    }

    /// Feeds this function from a plain `before` stage.
    pub fn compose<V, G>(
        self,
        before: G,
    ) -> FallibleFunction<V, R, impl Fn(V) -> Result<R, Failure>>
    where
        G: Fn(V) -> T,
    {
        let f = self.f;
        FallibleFunction::new(move |value| f(before(value)))
    }

    /// Lowers this function to a plain closure.
    ///
    /// The returned closure behaves identically on success. On failure it
    /// does not return: it raises a [`WrapperError`] holding the original
    /// failure as its cause. Recover it on the other side with
    /// [`WrapperError::capture`].
    pub fn unchecked(self) -> impl Fn(T) -> R {
        let f = self.f;
        move |value| match f(value) {
            Ok(result) => result,
            Err(failure) => WrapperError::new(failure).raise(),
        }
    }

    /// Unwraps and returns the stored closure.
    pub fn into_inner(self) -> F {
        self.f
    }
}

/// Lifts a plain function into the fallible shape by delegation.
///
/// The lift itself never fails; the result fails exactly when delegation
/// does, which for a plain closure is never.
pub fn wrap<T, R, F>(f: F) -> FallibleFunction<T, R, impl Fn(T) -> Result<R, Failure>>
where
    F: Fn(T) -> R,
{
    FallibleFunction::new(move |value| Ok(f(value)))
}

/// The function that returns its input unchanged.
pub fn identity<T>() -> FallibleFunction<T, T, impl Fn(T) -> Result<T, Failure>> {
    FallibleFunction::new(|value| Ok(value))
}

// ============================================================================
// Bi-arity variant
// ============================================================================

/// A function `(T, U) → R` that may fail with anything.
pub struct FallibleBiFunction<T, U, R, F> {
    f: F,
    _phantom: PhantomData<fn(T, U) -> R>,
}

impl<T, U, R, F> FallibleBiFunction<T, U, R, F>
where
    F: Fn(T, U) -> Result<R, Failure>,
{
    /// Wraps a fallible closure as a bi-function shape.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }

    /// Applies this function to the given arguments.
    pub fn apply(&self, first: T, second: U) -> Result<R, Failure> {
        (self.f)(first, second)
    }

    /// Pipes this function's result through a plain `after` stage.
    pub fn and_then<V, G>(
        self,
        after: G,
    ) -> FallibleBiFunction<T, U, V, impl Fn(T, U) -> Result<V, Failure>>
    where
        G: Fn(R) -> V,
    {
        let f = self.f;
        FallibleBiFunction::new(move |first, second| f(first, second).map(|result| after(result)))
    }

    /// Lowers this function to a plain closure; failures raise the carrier.
    pub fn unchecked(self) -> impl Fn(T, U) -> R {
        let f = self.f;
        move |first, second| match f(first, second) {
            Ok(result) => result,
            Err(failure) => WrapperError::new(failure).raise(),
        }
    }
}

/// Lifts a plain two-argument function into the fallible shape.
pub fn wrap_bi<T, U, R, F>(
    f: F,
) -> FallibleBiFunction<T, U, R, impl Fn(T, U) -> Result<R, Failure>>
where
    F: Fn(T, U) -> R,
{
    FallibleBiFunction::new(move |first, second| Ok(f(first, second)))
}

// ============================================================================
// Primitive specializations
// ============================================================================

/// Fallible function over a `char` input.
pub type FallibleCharFunction<R, F> = FallibleFunction<char, R, F>;
/// Fallible function over an `i32` input.
pub type FallibleI32Function<R, F> = FallibleFunction<i32, R, F>;
/// Fallible function over an `i64` input.
pub type FallibleI64Function<R, F> = FallibleFunction<i64, R, F>;
/// Fallible function over an `f64` input.
pub type FallibleF64Function<R, F> = FallibleFunction<f64, R, F>;

/// Fallible function producing a `char`.
pub type FallibleToCharFunction<T, F> = FallibleFunction<T, char, F>;
/// Fallible function producing an `i32`.
pub type FallibleToI32Function<T, F> = FallibleFunction<T, i32, F>;
/// Fallible function producing an `i64`.
pub type FallibleToI64Function<T, F> = FallibleFunction<T, i64, F>;
/// Fallible function producing an `f64`.
pub type FallibleToF64Function<T, F> = FallibleFunction<T, f64, F>;
