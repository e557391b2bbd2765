//! # Fallible Predicates
//!
//! A predicate evaluates its argument to a boolean and may fail with
//! anything while doing so. Predicates borrow their argument, the same
//! convention std uses for `filter`, so the boolean combinators can feed
//! both operands without cloning.
//!
//! ## Short-circuiting
//!
//! [`and`](FalliblePredicate::and) evaluates its second operand only when
//! the first yields `true`; [`or`](FalliblePredicate::or) only when it
//! yields `false`. A failure in the first operand skips the second operand
//! entirely and propagates verbatim.

use std::marker::PhantomData;

use fallible_core::{Failure, WrapperError};

/// A predicate over `T` that may fail with anything.
pub struct FalliblePredicate<T, P> {
    p: P,
    _phantom: PhantomData<fn(&T) -> bool>,
}

impl<T, P> FalliblePredicate<T, P>
where
    P: Fn(&T) -> Result<bool, Failure>,
{
    /// Wraps a fallible closure as a predicate shape.
    pub fn new(p: P) -> Self {
        Self {
            p,
            _phantom: PhantomData,
        }
    }

    /// Evaluates this predicate on the given argument.
    pub fn test(&self, value: &T) -> Result<bool, Failure> {
        (self.p)(value)
    }

    /// Short-circuiting logical AND with a plain predicate.
    ///
    /// `other` runs only when this predicate yields `true`.
    pub fn and<Q>(self, other: Q) -> FalliblePredicate<T, impl Fn(&T) -> Result<bool, Failure>>
    where
        Q: Fn(&T) -> bool,
    {
        let p = self.p;
        FalliblePredicate::new(move |value: &T| Ok(p(value)? && other(value)))
    }

    /// Short-circuiting logical OR with a plain predicate.
    ///
    /// `other` runs only when this predicate yields `false`.
    pub fn or<Q>(self, other: Q) -> FalliblePredicate<T, impl Fn(&T) -> Result<bool, Failure>>
    where
        Q: Fn(&T) -> bool,
    {
        let p = self.p;
        FalliblePredicate::new(move |value: &T| Ok(p(value)? || other(value)))
    }

    /// Logical negation.
    pub fn negate(self) -> FalliblePredicate<T, impl Fn(&T) -> Result<bool, Failure>> {
        let p = self.p;
        FalliblePredicate::new(move |value: &T| Ok(!p(value)?))
    }

    /// Lowers this predicate to a plain closure; failures raise the
    /// [`WrapperError`] carrier.
    pub fn unchecked(self) -> impl Fn(&T) -> bool {
        let p = self.p;
        move |value: &T| match p(value) {
            Ok(verdict) => verdict,
            Err(failure) => WrapperError::new(failure).raise(),
        }
    }
}

/// Lifts a plain predicate into the fallible shape by delegation.
pub fn wrap<T, P>(p: P) -> FalliblePredicate<T, impl Fn(&T) -> Result<bool, Failure>>
where
    P: Fn(&T) -> bool,
{
    FalliblePredicate::new(move |value: &T| Ok(p(value)))
}

// ============================================================================
// Bi-arity variant
// ============================================================================

/// A predicate over `(T, U)` that may fail with anything.
pub struct FallibleBiPredicate<T, U, P> {
    p: P,
    _phantom: PhantomData<fn(&T, &U) -> bool>,
}

impl<T, U, P> FallibleBiPredicate<T, U, P>
where
    P: Fn(&T, &U) -> Result<bool, Failure>,
{
    /// Wraps a fallible closure as a bi-predicate shape.
    pub fn new(p: P) -> Self {
        Self {
            p,
            _phantom: PhantomData,
        }
    }

    /// Evaluates this predicate on the given arguments.
    pub fn test(&self, first: &T, second: &U) -> Result<bool, Failure> {
        (self.p)(first, second)
    }

    /// Short-circuiting logical AND with a plain bi-predicate.
    pub fn and<Q>(
        self,
        other: Q,
    ) -> FallibleBiPredicate<T, U, impl Fn(&T, &U) -> Result<bool, Failure>>
    where
        Q: Fn(&T, &U) -> bool,
    {
        let p = self.p;
        FallibleBiPredicate::new(move |first: &T, second: &U| {
            Ok(p(first, second)? && other(first, second))
        })
    }

    /// Short-circuiting logical OR with a plain bi-predicate.
    pub fn or<Q>(
        self,
        other: Q,
    ) -> FallibleBiPredicate<T, U, impl Fn(&T, &U) -> Result<bool, Failure>>
    where
        Q: Fn(&T, &U) -> bool,
    {
        let p = self.p;
        FallibleBiPredicate::new(move |first: &T, second: &U| {
            Ok(p(first, second)? || other(first, second))
        })
    }

    /// Logical negation.
    pub fn negate(self) -> FallibleBiPredicate<T, U, impl Fn(&T, &U) -> Result<bool, Failure>> {
        let p = self.p;
        FallibleBiPredicate::new(move |first: &T, second: &U| Ok(!p(first, second)?))
    }

    /// Lowers this predicate to a plain closure; failures raise the
    /// [`WrapperError`] carrier.
    pub fn unchecked(self) -> impl Fn(&T, &U) -> bool {
        let p = self.p;
        move |first: &T, second: &U| match p(first, second) {
            Ok(verdict) => verdict,
            Err(failure) => WrapperError::new(failure).raise(),
        }
    }
}

/// Lifts a plain bi-predicate into the fallible shape by delegation.
pub fn wrap_bi<T, U, P>(
    p: P,
) -> FallibleBiPredicate<T, U, impl Fn(&T, &U) -> Result<bool, Failure>>
where
    P: Fn(&T, &U) -> bool,
{
    FallibleBiPredicate::new(move |first: &T, second: &U| Ok(p(first, second)))
}

// ============================================================================
// Primitive specializations
// ============================================================================

/// Fallible predicate over `char`.
pub type FallibleCharPredicate<P> = FalliblePredicate<char, P>;
/// Fallible predicate over `i32`.
pub type FallibleI32Predicate<P> = FalliblePredicate<i32, P>;
/// Fallible predicate over `i64`.
pub type FallibleI64Predicate<P> = FalliblePredicate<i64, P>;
/// Fallible predicate over `f64`.
pub type FallibleF64Predicate<P> = FalliblePredicate<f64, P>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn positive(n: &i32) -> Result<bool, Failure> {
        if *n == 0 {
            Err(Failure::msg("zero is unclassified"))
        } else {
            Ok(*n > 0)
        }
    }

    #[test]
    fn test_test_delegates() {
        let p = FalliblePredicate::new(positive);
        assert!(p.test(&3).unwrap());
        assert!(!p.test(&-3).unwrap());
        assert!(p.test(&0).is_err());
    }

    #[test]
    fn test_and_short_circuits_on_false() {
        let probed = Cell::new(false);
        let p = FalliblePredicate::new(positive).and(|_: &i32| {
            probed.set(true);
            true
        });

        assert!(!p.test(&-1).unwrap());
        assert!(!probed.get());
    }

    #[test]
    fn test_and_evaluates_second_on_true() {
        let probed = Cell::new(false);
        let p = FalliblePredicate::new(positive).and(|n: &i32| {
            probed.set(true);
            n % 2 == 0
        });

        assert!(p.test(&4).unwrap());
        assert!(probed.get());
    }

    #[test]
    fn test_or_short_circuits_on_true() {
        let probed = Cell::new(false);
        let p = FalliblePredicate::new(positive).or(|_: &i32| {
            probed.set(true);
            false
        });

        assert!(p.test(&1).unwrap());
        assert!(!probed.get());
    }

    #[test]
    fn test_failure_skips_second_operand() {
        let probed = Cell::new(false);
        let p = FalliblePredicate::new(positive).and(|_: &i32| {
            probed.set(true);
            true
        });

        assert!(p.test(&0).is_err());
        assert!(!probed.get());
    }

    #[test]
    fn test_negate_inverts() {
        let p = FalliblePredicate::new(positive).negate();
        assert!(!p.test(&5).unwrap());
        assert!(p.test(&-5).unwrap());
        assert!(p.test(&0).is_err());
    }

    #[test]
    fn test_wrap_then_unchecked_is_identity() {
        let plain = wrap(|text: &String| text.is_empty()).unchecked();
        assert!(plain(&String::new()));
        assert!(!plain(&"full".to_string()));
    }

    #[test]
    fn test_unchecked_raises_carrier() {
        let plain = FalliblePredicate::new(positive).unchecked();
        let carrier = WrapperError::capture(|| plain(&0)).unwrap_err();
        assert!(!carrier.cause().is_panic());
    }

    #[test]
    fn test_bi_predicate_combines() {
        let probed = Cell::new(0);
        let longer = FallibleBiPredicate::new(|text: &String, limit: &usize| {
            if *limit == 0 {
                Err(Failure::msg("limit must be positive"))
            } else {
                Ok(text.len() > *limit)
            }
        })
        .and(|_: &String, _: &usize| {
            probed.set(probed.get() + 1);
            true
        });

        assert!(longer.test(&"abcdef".to_string(), &3).unwrap());
        assert_eq!(probed.get(), 1);
        assert!(!longer.test(&"ab".to_string(), &3).unwrap());
        assert_eq!(probed.get(), 1);
        assert!(longer.test(&"ab".to_string(), &0).is_err());
        assert_eq!(probed.get(), 1);
    }

    #[test]
    fn test_bi_negate_and_wrap() {
        let same = wrap_bi(|a: &char, b: &char| a == b);
        assert!(same.test(&'x', &'x').unwrap());

        let differ = wrap_bi(|a: &char, b: &char| a == b).negate();
        assert!(differ.test(&'x', &'y').unwrap());
    }
}
