//! Commande Core - uniform outcomes for units of business logic
//!
//! A command wraps a body of business logic so that invoking it always yields
//! an [`Outcome`]: a success flag, ordered errors, ordered logs and the
//! command's declared outputs, whatever way the body terminates.
//!
//! - [`Command`]: declare outputs, validate arguments, implement a body
//! - [`Context`]: the error / log / fail / end / transfer primitives
//! - [`engine`]: the invocation state machine
//! - [`Chain`]: run commands in sequence, piping outputs into inputs
//! - [`transfer`]: merge sub-outcomes and records into a running command

pub mod chain;
pub mod command;
pub mod config;
pub mod context;
pub mod engine;
pub mod errors;
pub mod logging_facility;
pub mod outcome;
pub mod testing;
pub mod transfer;
pub mod value;

pub use commande_core_types::schema;

// Re-export commonly used types
pub use chain::{step, Chain, CommandStep, Step, CHAIN_RESULT};
pub use command::{Command, Flow, Halt};
pub use context::Context;
pub use errors::{CommandeError, ExError, ExErrorKind, Result};
pub use outcome::{Field, Outcome};
pub use transfer::{Record, Report, Source};
pub use value::{Args, Payload, Value};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
