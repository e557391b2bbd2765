//! Fallible Pipeline - A Walkthrough of the Shape Family
//!
//! Run with: cargo run --example fallible_pipeline
//!
//! This example demonstrates:
//! - Lifting plain closures into fallible shapes and lowering them back
//! - Heterogeneous composition (fallible and plain stages in one pipeline)
//! - Recovering a failure on the plain side of the unchecked boundary
//! - Short-circuiting predicate combinators
//! - OptionalChar for "char or absence"

use fallible_shapes::function::{self, FallibleFunction};
use fallible_shapes::predicate::FalliblePredicate;
use fallible_shapes::{Failure, OptionalChar, WrapperError};
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("record {0} is malformed")]
struct Malformed(String);

fn main() {
    println!("=== Fallible Shapes ===\n");

    // -------------------------------------------------------------------------
    // Lifting and lowering
    // -------------------------------------------------------------------------
    println!("1. Lifting and Lowering");
    println!("-----------------------");

    let double = function::wrap(|n: i32| n * 2);
    println!("wrap(|n| n * 2).apply(21) = {:?}", double.apply(21));

    let plain = double.unchecked();
    println!("...and lowered back:  plain(21) = {}", plain(21));
    println!();

    // -------------------------------------------------------------------------
    // A fallible parse pipeline
    // -------------------------------------------------------------------------
    println!("2. Heterogeneous Pipeline");
    println!("-------------------------");

    // Fallible stage: parse "key=value" records.
    let parse = FallibleFunction::new(|record: &str| -> Result<i32, Failure> {
        let (_, value) = record
            .split_once('=')
            .ok_or_else(|| Failure::from(Malformed(record.to_string())))?;
        Ok(value.trim().parse::<i32>()?)
    });

    // Plain stages join freely on either side.
    let normalized = parse.and_then(|n| n.clamp(0, 100)).compose(|line: &str| line.trim());

    for line in ["  width = 42  ", "height = 250", "garbled"] {
        println!("{line:>16?} -> {:?}", normalized.apply(line));
    }
    println!();

    // -------------------------------------------------------------------------
    // Recovering a failure on the plain side
    // -------------------------------------------------------------------------
    println!("3. Crossing the Unchecked Boundary");
    println!("----------------------------------");

    let strict = FallibleFunction::new(|record: &str| -> Result<i32, Failure> {
        Err(Failure::from(Malformed(record.to_string())))
    })
    .unchecked();

    let carrier = WrapperError::capture(|| strict("broken")).unwrap_err();
    println!("captured: {carrier}");

    // The cause is typed, so checked() hands the carrier straight back.
    let carrier = carrier.checked();

    // Peel the original failure back out.
    match carrier.rethrow::<Malformed>() {
        Err(original) => println!("recovered the original failure: {original}"),
        Ok(_) => println!("cause was something else"),
    }
    println!();

    // -------------------------------------------------------------------------
    // Short-circuiting predicates
    // -------------------------------------------------------------------------
    println!("4. Predicates");
    println!("-------------");

    let in_range = FalliblePredicate::new(|n: &i32| {
        if *n == i32::MIN {
            Err(Failure::msg("unclassifiable"))
        } else {
            Ok(n.abs() < 100)
        }
    });
    let even_and_small = in_range.and(|n: &i32| n % 2 == 0);

    for n in [8, 7, 800] {
        println!("even_and_small({n}) = {:?}", even_and_small.test(&n));
    }
    println!();

    // -------------------------------------------------------------------------
    // OptionalChar
    // -------------------------------------------------------------------------
    println!("5. OptionalChar");
    println!("---------------");

    let initial = OptionalChar::of('f');
    let missing = OptionalChar::empty();

    println!("present: {initial}, empty: {missing}");
    println!("initial.unwrap_or('?') = {}", initial.unwrap_or('?'));
    println!("missing.unwrap_or('?') = {}", missing.unwrap_or('?'));
    initial.if_present(|c| println!("if_present saw {c:?}"));
}
