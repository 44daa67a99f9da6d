//! Structured logging facility for Commande
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! The engine logs every invocation through these macros inside an `invoke`
//! span, so nested invocations show up as nested spans.
//!
//! # Usage
//!
//! ```rust
//! use commande_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::from_env());
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
