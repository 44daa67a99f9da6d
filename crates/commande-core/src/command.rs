//! The command trait and its control-flow result type
//!
//! A command type declares its outputs once, optionally validates its
//! arguments, and implements a body. Bodies stop early by returning a
//! [`Halt`] through `?`; the engine turns every termination path into a
//! finalized [`Outcome`].
//!
//! # Example
//!
//! ```
//! use commande_core::{payload, Args, Command, Context, Flow};
//!
//! #[derive(Default)]
//! struct Greet;
//!
//! impl Command for Greet {
//!     const OUTPUTS: &'static [&'static str] = &["greeting"];
//!
//!     fn body(&mut self, ctx: &mut Context, args: &Args) -> Flow {
//!         let Some(name) = args.get("name").and_then(|v| v.as_str()) else {
//!             return ctx.fatal("name is required");
//!         };
//!         ctx.set("greeting", format!("hello {name}"));
//!         Ok(())
//!     }
//! }
//!
//! let outcome = Greet::invoke(payload! { "name" => "ada" });
//! assert!(outcome.successful());
//! assert_eq!(outcome.output("greeting").unwrap().as_str(), Some("hello ada"));
//! ```

use crate::context::Context;
use crate::engine;
use crate::outcome::Outcome;
use crate::value::Args;

/// Structured early exit from `valid` or `body`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// Stop and mark the outcome unsuccessful.
    Fail,
    /// Stop and leave the status untouched.
    End,
}

/// Control-flow result of a command body: `Ok` on fall-through.
pub type Flow<T = ()> = std::result::Result<T, Halt>;

/// A unit of business logic invoked through the engine.
pub trait Command: Sized {
    /// Names projected into the outcome payload, fixed per command type.
    const OUTPUTS: &'static [&'static str] = &[];

    /// Validation gate run before the body. `Ok(false)` fails the invocation
    /// and skips the body.
    fn valid(&mut self, _ctx: &mut Context, _args: &Args) -> Flow<bool> {
        Ok(true)
    }

    fn body(&mut self, ctx: &mut Context, args: &Args) -> Flow;

    /// Invoke this instance. Consumes it: every invocation owns its instance.
    fn call(self, args: Args) -> Outcome {
        engine::run(self, args)
    }

    /// Invoke a fresh default instance.
    fn invoke(args: Args) -> Outcome
    where
        Self: Default,
    {
        Self::default().call(args)
    }

    /// Human-readable type name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
