//! # Fallible Shapes - Callables That May Fail With Anything
//!
//! This crate provides the fallible callable family:
//!
//! - **Functions**: `T → R` and `(T, U) → R`, with `and_then`/`compose`
//! - **Predicates**: boolean-valued, with short-circuiting `and`/`or` and
//!   `negate`
//! - **Consumers**: side-effecting, with ordered `and_then` chains
//! - **Suppliers** and **Runnables**: the zero-input shapes
//! - **OptionalChar**: a `char` that may be absent
//!
//! Each shape carries the same pair of boundary conversions:
//!
//! ```text
//!   plain closure  ──── wrap ────▶  fallible shape
//!                  ◀─ unchecked ──  (failure raises a WrapperError carrier)
//! ```
//!
//! `wrap` lifts a plain closure by delegation; `unchecked` lowers a
//! fallible shape back to a plain closure, converting any failure
//! (uniformly, and only at this boundary) into a [`WrapperError`] panic
//! that [`WrapperError::capture`] can recover on the other side.
//!
//! ## Composition First
//!
//! Pipelines are values: combinators return new shapes that can be handed
//! around, composed further, or lowered at the edge. Joining stages are
//! plain closures, so fallible and infallible code mixes freely:
//!
//! ```rust
//! use fallible_core::Failure;
//! use fallible_shapes::function::FallibleFunction;
//!
//! let parse = FallibleFunction::new(|text: &str| -> Result<i32, Failure> {
//!     Ok(text.trim().parse::<i32>()?)
//! })
//! .and_then(|n| n * 10);
//!
//! assert_eq!(parse.apply(" 4 ").unwrap(), 40);
//! assert!(parse.apply("four").is_err());
//! ```

pub mod consumer;
pub mod function;
pub mod optional_char;
pub mod predicate;
pub mod runnable;
pub mod supplier;

// Re-export key types at crate root for convenience
pub use consumer::{FallibleBiConsumer, FallibleConsumer};
pub use function::{FallibleBiFunction, FallibleFunction};
pub use optional_char::OptionalChar;
pub use predicate::{FallibleBiPredicate, FalliblePredicate};
pub use runnable::FallibleRunnable;
pub use supplier::FallibleSupplier;

// The failure model lives in fallible-core; surface it here so downstream
// code needs a single dependency.
pub use fallible_core::{BoxError, Failure, MessageError, WrapperError};
