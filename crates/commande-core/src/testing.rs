//! Outcome assertions for tests of command-based code
//!
//! Thin wrappers around `assert!` that print the outcome's errors on failure.

use crate::command::Command;
use crate::engine;
use crate::outcome::Outcome;
use crate::value::Args;

/// # Panics
///
/// Panics if the outcome is not successful.
#[track_caller]
pub fn assert_successful(outcome: &Outcome) {
    assert!(
        outcome.successful(),
        "Expected {:?} to be successful. Actual got these errors: {:?}",
        outcome,
        outcome.errors()
    );
}

/// # Panics
///
/// Panics if the outcome is successful.
#[track_caller]
pub fn refute_successful(outcome: &Outcome) {
    assert!(
        !outcome.successful(),
        "Expected {:?} to not be successful",
        outcome
    );
}

/// # Panics
///
/// Panics unless `error` is among the outcome's errors.
#[track_caller]
pub fn assert_with_error(error: &str, outcome: &Outcome) {
    assert!(
        outcome.errors().iter().any(|e| e == error),
        "Expected {:?} to contain error {:?}",
        outcome.errors(),
        error
    );
}

/// # Panics
///
/// Panics if `error` is among the outcome's errors.
#[track_caller]
pub fn refute_with_error(error: &str, outcome: &Outcome) {
    assert!(
        !outcome.errors().iter().any(|e| e == error),
        "Expected {:?} to not contain error {:?}",
        outcome.errors(),
        error
    );
}

/// # Panics
///
/// Panics unless the command's validation gate accepts `args`.
#[track_caller]
pub fn assert_valid<C: Command>(command: C, args: &Args) {
    let name = command.name();
    assert!(
        engine::check_valid(command, args),
        "Expected {} to be valid with {:?}",
        name,
        args
    );
}

/// # Panics
///
/// Panics if the command's validation gate accepts `args`.
#[track_caller]
pub fn refute_valid<C: Command>(command: C, args: &Args) {
    let name = command.name();
    assert!(
        !engine::check_valid(command, args),
        "Expected {} to not be valid with {:?}",
        name,
        args
    );
}
