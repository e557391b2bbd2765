//! Smoke tests for the carrier boundary.
//!
//! These walk a failure through the full conversion cycle the way calling
//! code does: raise on the fallible side, capture on the plain side,
//! assert the tier, then peel the typed cause back out.

use std::panic::{self, AssertUnwindSafe};

use fallible_core::{Failure, MessageError, WrapperError};
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("ledger entry {0} is unbalanced")]
struct Unbalanced(u32);

#[derive(Debug, PartialEq, Error)]
#[error("ledger closed")]
struct LedgerClosed;

// ============================================================================
// Raise / capture round trip
// ============================================================================

#[test]
fn smoke_raise_then_capture_restores_cause() {
    let carrier = WrapperError::capture(|| -> u32 {
        WrapperError::new(Failure::from(Unbalanced(17))).raise()
    })
    .unwrap_err();

    assert_eq!(
        carrier.cause().downcast_ref::<Unbalanced>(),
        Some(&Unbalanced(17))
    );
}

#[test]
fn smoke_capture_is_transparent_on_success() {
    let total = WrapperError::capture(|| 19 + 23).unwrap();
    assert_eq!(total, 42);
}

// ============================================================================
// Tier assertion and selective unwrap
// ============================================================================

#[test]
fn smoke_checked_then_rethrow_chain() {
    let carrier = WrapperError::new(Failure::from(Unbalanced(3)));

    // Typed cause: checked() must hand the carrier straight back.
    let carrier = carrier.checked();

    // First candidate misses, second hits.
    let carrier = carrier.rethrow::<LedgerClosed>().unwrap();
    let original = carrier.rethrow::<Unbalanced>().unwrap_err();
    assert_eq!(original, Unbalanced(3));
}

#[test]
fn smoke_checked_refuses_panic_tier() {
    fn overflow() -> u32 {
        panic!("stack overflowed the ledger")
    }

    let carrier = WrapperError::new(Failure::catch(overflow).unwrap_err());
    let resumed = panic::catch_unwind(AssertUnwindSafe(|| carrier.checked()));
    assert!(resumed.is_err());
}

#[test]
fn smoke_message_failures_are_typed() {
    let carrier = WrapperError::new(Failure::msg("off by one"));
    let carrier = carrier.checked();
    let message = carrier.rethrow::<MessageError>().unwrap_err();
    assert_eq!(message.message(), "off by one");
}
