//! Invocation engine
//!
//! Drives one command execution:
//!
//! ```text
//! Start -> Validating -> { Invalid, Valid -> Executing, AbortedByEnd }
//! Executing -> { Completed, AbortedByFail, AbortedByEnd }
//! { Invalid, Completed, AbortedByFail, AbortedByEnd } -> Finalizing -> Done
//! ```
//!
//! Finalizing runs exactly once on every path: the declared output slots are
//! projected (unset as null) and merged into the outcome payload.
//!
//! Abrupt exits are plain [`Halt`] values returned from `valid` / `body`, so
//! they never cross into a nested invocation: a nested command runs its own
//! engine to `Done` before control returns to the caller.

use std::time::Instant;

use commande_core_types::schema::OP_INVOKE;

use crate::command::{Command, Halt};
use crate::config::engine_config;
use crate::context::Context;
use crate::errors::{CommandeError, ExError};
use crate::outcome::Outcome;
use crate::value::Args;
use crate::{log_op_end, log_op_error, log_op_start};

/// Engine states, logged at debug level as the invocation advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    Validating,
    Invalid,
    Valid,
    Executing,
    Completed,
    AbortedByFail,
    AbortedByEnd,
    Finalizing,
    Done,
}

/// Run `command` with `args` and return its finalized outcome.
pub fn run<C: Command>(mut command: C, args: Args) -> Outcome {
    let name = command.name();
    let mut ctx = Context::new(name, C::OUTPUTS);
    let invocation_id = ctx.invocation_id().clone();
    let config = engine_config();

    let span = tracing::info_span!("invoke", command = name, invocation_id = %invocation_id);
    let _guard = span.enter();

    if config.log_invocations {
        log_op_start!(OP_INVOKE, command = name, invocation_id = %invocation_id);
    }
    let start = Instant::now();
    transition(name, State::Start);

    let terminal = execute(&mut command, &mut ctx, &args);
    transition(name, terminal);

    transition(name, State::Finalizing);
    let (outcome, failure) = ctx.finish();
    transition(name, State::Done);

    if config.log_invocations {
        let duration_ms = start.elapsed().as_millis() as u64;
        if outcome.successful() {
            log_op_end!(
                OP_INVOKE,
                duration_ms = duration_ms,
                command = name,
                state = ?terminal,
                success = true
            );
        } else {
            // Failed without an abort: only non-fatal errors were recorded
            let reason = failure.unwrap_or_else(|| CommandeError::ExplicitError {
                message: outcome.error().unwrap_or_default(),
            });
            let err = ExError::from(reason)
                .with_op(OP_INVOKE)
                .with_invocation_id(invocation_id.clone());
            log_op_error!(
                OP_INVOKE,
                err,
                duration_ms = duration_ms,
                command = name,
                state = ?terminal,
                error_count = outcome.errors().len()
            );
        }
    }

    outcome
}

/// Run only the validation gate of `command`.
///
/// Anything other than `Ok(true)` (including an abrupt exit) is invalid.
pub fn check_valid<C: Command>(mut command: C, args: &Args) -> bool {
    let mut ctx = Context::new(command.name(), C::OUTPUTS);
    matches!(command.valid(&mut ctx, args), Ok(true))
}

fn execute<C: Command>(command: &mut C, ctx: &mut Context, args: &Args) -> State {
    let name = ctx.command_name();

    transition(name, State::Validating);
    match command.valid(ctx, args) {
        Ok(true) => transition(name, State::Valid),
        Ok(false) | Err(Halt::Fail) => {
            ctx.mark_failed(CommandeError::ValidationFailed {
                command: name.to_string(),
            });
            return State::Invalid;
        }
        Err(Halt::End) => return State::AbortedByEnd,
    }

    transition(name, State::Executing);
    match command.body(ctx, args) {
        Ok(()) => State::Completed,
        Err(Halt::Fail) => {
            // Bodies may return Halt::Fail without going through ctx.fail()
            ctx.mark_failed(CommandeError::Aborted {
                command: name.to_string(),
            });
            State::AbortedByFail
        }
        Err(Halt::End) => State::AbortedByEnd,
    }
}

fn transition(command: &'static str, state: State) {
    tracing::debug!(
        op = OP_INVOKE,
        event = commande_core_types::schema::EVENT_TRANSITION,
        command,
        state = ?state,
    );
}
