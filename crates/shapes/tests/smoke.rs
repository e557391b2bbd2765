//! Smoke tests for the shape catalog.
//!
//! These exercise whole pipelines the way calling code does:
//! - lift, compose, and lower across the fallible boundary
//! - recover a failure on the plain side and peel it back out
//! - drive the char specializations together with OptionalChar

use std::cell::RefCell;

use fallible_shapes::function::{self, FallibleFunction};
use fallible_shapes::predicate::FalliblePredicate;
use fallible_shapes::supplier::FallibleSupplier;
use fallible_shapes::{consumer, Failure, OptionalChar, WrapperError};
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("forbidden value: {0}")]
struct Forbidden(i32);

// ============================================================================
// Round trip across the boundary
// ============================================================================

#[test]
fn smoke_wrap_unchecked_round_trip() {
    let plain = function::wrap(|n: i32| n + 1).unchecked();
    for n in [-3, 0, 41] {
        assert_eq!(plain(n), n + 1);
    }
}

#[test]
fn smoke_failure_survives_lowering_and_recovery() {
    let guarded = FallibleFunction::new(|n: i32| {
        if n == 5 {
            Err(Failure::from(Forbidden(n)))
        } else {
            Ok(n * 2)
        }
    });
    let plain = guarded.unchecked();

    assert_eq!(plain(4), 8);

    let carrier = WrapperError::capture(|| plain(5)).unwrap_err();

    // The cause is a typed error, so checked() hands the carrier back...
    let carrier = carrier.checked();

    // ...and rethrow() surfaces the original failure, unmodified.
    let original = carrier.rethrow::<Forbidden>().unwrap_err();
    assert_eq!(original, Forbidden(5));
}

// ============================================================================
// Mixed fallible / infallible pipeline
// ============================================================================

#[test]
fn smoke_heterogeneous_pipeline() {
    let classify = FallibleFunction::new(|n: i32| {
        if n < 0 {
            Err(Failure::msg("negative"))
        } else {
            Ok(n)
        }
    })
    .compose(|text: &str| text.len() as i32 - 4)
    .and_then(|n| if n > 0 { "long" } else { "short" });

    assert_eq!(classify.apply("brief").unwrap(), "long");
    assert_eq!(classify.apply("tiny").unwrap(), "short");
    assert!(classify.apply("abc").is_err());
}

#[test]
fn smoke_predicate_feeds_consumer() {
    let kept = RefCell::new(Vec::new());

    let small = FalliblePredicate::new(|n: &i32| {
        if *n > 99 {
            Err(Failure::msg("out of range"))
        } else {
            Ok(*n < 10)
        }
    });
    let keep = consumer::wrap(|n: &i32| kept.borrow_mut().push(*n));

    for n in [3, 42, 7] {
        if small.test(&n).unwrap() {
            keep.accept(&n).unwrap();
        }
    }
    assert_eq!(*kept.borrow(), vec![3, 7]);
}

// ============================================================================
// Char specializations and OptionalChar
// ============================================================================

#[test]
fn smoke_char_pipeline_with_optional() {
    let first_letter = FallibleSupplier::new(|| {
        "fallible"
            .chars()
            .next()
            .ok_or_else(|| Failure::msg("empty text"))
    });

    let held = OptionalChar::of(first_letter.get().unwrap());
    assert!(held.is_present());
    assert_eq!(held.get(), 'f');

    let upper = FallibleFunction::new(|c: char| {
        c.to_uppercase()
            .next()
            .ok_or_else(|| Failure::msg("no uppercase form"))
    });
    assert_eq!(upper.apply(held.unwrap_or('?')).unwrap(), 'F');

    assert_eq!(OptionalChar::empty().unwrap_or('?'), '?');
}

#[test]
fn smoke_optional_char_element_not_found() {
    let caught = std::panic::catch_unwind(|| OptionalChar::empty().get());
    assert!(caught.is_err());
}
