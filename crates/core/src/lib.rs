//! # Fallible Core - Failure Union and Carrier
//!
//! This crate provides the failure model shared by every fallible callable
//! shape:
//!
//! - **Failure**: the "may fail with anything" union of a typed error value
//!   and a captured panic payload
//! - **WrapperError**: the carrier that ferries a failure across the
//!   `unchecked` boundary, with selective unwrapping on the other side
//!
//! ## Design Philosophy
//!
//! Failures are first-class values. A fallible callable never interprets,
//! classifies, or suppresses what the underlying behavior raised. It hands
//! the failure to the caller verbatim, and only the lowering boundary
//! converts it, uniformly, into a carrier. All policy (retry, logging,
//! fallback) belongs to the caller.

pub mod failure;
pub mod wrapper;

// Re-export key types at crate root for convenience
pub use failure::{BoxError, Failure, MessageError};
pub use wrapper::WrapperError;
