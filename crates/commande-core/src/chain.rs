//! Sequential composition of commands
//!
//! A [`Chain`] is itself a command. It feeds its arguments to the first step,
//! each successful step's payload to the next one, and stops at the first
//! unsuccessful step. Logs and errors of every executed step are collected in
//! the chain's own outcome, and `chain_result` holds the last executed step's
//! outcome.
//!
//! ```
//! use commande_core::{payload, step, Args, Chain, Command, Context, Flow};
//!
//! #[derive(Default)]
//! struct Double;
//!
//! impl Command for Double {
//!     const OUTPUTS: &'static [&'static str] = &["n"];
//!
//!     fn body(&mut self, ctx: &mut Context, args: &Args) -> Flow {
//!         let n = args.get("n").and_then(|v| v.as_i64()).unwrap_or(0);
//!         ctx.set("n", n * 2);
//!         Ok(())
//!     }
//! }
//!
//! let outcome = Chain::default()
//!     .then::<Double>()
//!     .then_step(step::<Double>())
//!     .call(payload! { "n" => 3 });
//!
//! let last = outcome.output("chain_result").unwrap().as_outcome().unwrap();
//! assert_eq!(last.output("n").unwrap().as_i64(), Some(12));
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use commande_core_types::schema::OP_CHAIN_STEP;

use crate::command::{Command, Flow};
use crate::context::Context;
use crate::errors::CommandeError;
use crate::outcome::Outcome;
use crate::transfer::Source;
use crate::value::Args;

/// Name of the chain's only declared output.
pub const CHAIN_RESULT: &str = "chain_result";

/// Anything a chain can run: maps arguments to an outcome.
pub trait Step {
    fn execute(&self, args: Args) -> Outcome;

    fn label(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A command type used as a step; each execution invokes a fresh instance.
pub struct CommandStep<C>(PhantomData<fn() -> C>);

/// Step that invokes a fresh `C` per execution.
pub fn step<C: Command + Default>() -> CommandStep<C> {
    CommandStep(PhantomData)
}

impl<C: Command + Default> Step for CommandStep<C> {
    fn execute(&self, args: Args) -> Outcome {
        C::invoke(args)
    }

    fn label(&self) -> &str {
        std::any::type_name::<C>()
    }
}

impl<F> Step for F
where
    F: Fn(Args) -> Outcome,
{
    fn execute(&self, args: Args) -> Outcome {
        self(args)
    }
}

#[derive(Clone, Default)]
pub struct Chain {
    steps: Vec<Arc<dyn Step>>,
}

impl Chain {
    pub fn new(steps: Vec<Arc<dyn Step>>) -> Self {
        Self { steps }
    }

    /// Append a command type.
    pub fn then<C: Command + Default + 'static>(self) -> Self {
        self.then_step(step::<C>())
    }

    /// Append any step (closure, command step, nested chain).
    pub fn then_step(mut self, step: impl Step + 'static) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    /// A new chain running this chain's steps followed by `other`'s.
    pub fn chain(&self, other: &Chain) -> Chain {
        let mut steps = self.steps.clone();
        steps.extend(other.steps.iter().cloned());
        Chain::new(steps)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.steps.iter().map(|s| s.label()))
            .finish()
    }
}

impl Command for Chain {
    const OUTPUTS: &'static [&'static str] = &[CHAIN_RESULT];

    fn valid(&mut self, ctx: &mut Context, _args: &Args) -> Flow<bool> {
        if self.steps.is_empty() {
            ctx.fatal_with(CommandeError::EmptyChain)?;
        }
        Ok(true)
    }

    fn body(&mut self, ctx: &mut Context, args: &Args) -> Flow {
        let mut payload = args.clone();
        for (index, step) in self.steps.iter().enumerate() {
            let outcome = step.execute(payload);

            let source = Source::from(&outcome);
            ctx.transfer_logs(&source, None);
            ctx.transfer_errors(&source, None);
            let successful = ctx.transfer_success(&source);

            tracing::debug!(
                op = OP_CHAIN_STEP,
                command = ctx.command_name(),
                step = index,
                label = step.label(),
                success = successful,
            );

            let error = outcome.error();
            payload = outcome.payload();
            ctx.set(CHAIN_RESULT, outcome);

            if !successful {
                return ctx.halt_failed(CommandeError::NestedFailure { error });
            }
        }
        Ok(())
    }
}

impl Step for Chain {
    fn execute(&self, args: Args) -> Outcome {
        self.clone().call(args)
    }
}
