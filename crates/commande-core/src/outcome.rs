//! The uniform result of every command invocation
//!
//! An [`Outcome`] carries the success flag, the ordered errors and logs, and
//! the payload of declared outputs. It is only mutable inside the crate: the
//! engine builds it during one invocation and hands it to the caller
//! finalized.

use serde::Serialize;

use crate::errors::{CommandeError, Result};
use crate::value::{Payload, Value};

/// Fixed members resolvable through [`Outcome::get`], in lookup order.
pub const FIXED_MEMBERS: [&str; 6] = ["successful", "failure", "errors", "error", "logs", "payload"];

/// Result of resolving a name against an outcome's read view.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<'a> {
    Successful(bool),
    Failure(bool),
    Errors(Vec<String>),
    Error(Option<String>),
    Logs(Vec<String>),
    Payload(Payload),
    /// A payload entry (declared output or transferred key).
    Output(&'a Value),
}

/// Errors are plain messages. Structured failures are rendered to a string
/// when recorded (see [`CommandeError`]'s `Display`), so callers compare and
/// log errors by message only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    payload: Payload,
    errors: Vec<String>,
    logs: Vec<String>,
    success: bool,
}

impl Outcome {
    pub fn new() -> Self {
        Self::with_payload(Payload::new())
    }

    pub(crate) fn with_payload(payload: Payload) -> Self {
        Self {
            payload,
            errors: Vec::new(),
            logs: Vec::new(),
            success: true,
        }
    }

    /// Successful when not failed and no error has been recorded.
    pub fn successful(&self) -> bool {
        self.success && self.errors.is_empty()
    }

    pub fn failure(&self) -> bool {
        !self.successful()
    }

    /// All recorded errors, in recording order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.clone()
    }

    /// The first recorded error, if any.
    pub fn error(&self) -> Option<String> {
        self.errors.first().cloned()
    }

    pub fn logs(&self) -> Vec<String> {
        self.logs.clone()
    }

    pub fn payload(&self) -> Payload {
        self.payload.clone()
    }

    /// Resolve `name` against the fixed members, then the payload.
    ///
    /// # Errors
    ///
    /// Returns `CommandeError::UnknownField` when `name` is neither a fixed
    /// member nor a payload key.
    pub fn get(&self, name: &str) -> Result<Field<'_>> {
        let field = match name {
            "successful" => Field::Successful(self.successful()),
            "failure" => Field::Failure(self.failure()),
            "errors" => Field::Errors(self.errors()),
            "error" => Field::Error(self.error()),
            "logs" => Field::Logs(self.logs()),
            "payload" => Field::Payload(self.payload()),
            _ => Field::Output(self.output(name)?),
        };
        Ok(field)
    }

    /// Payload-only lookup.
    ///
    /// # Errors
    ///
    /// Returns `CommandeError::UnknownField` when `name` is not in the payload.
    pub fn output(&self, name: &str) -> Result<&Value> {
        self.payload
            .get(name)
            .ok_or_else(|| CommandeError::UnknownField {
                field: name.to_string(),
            })
    }

    /// Whether `get(name)` would resolve.
    pub fn has(&self, name: &str) -> bool {
        FIXED_MEMBERS.contains(&name) || self.payload.contains_key(name)
    }

    // ---- mutation, crate-internal ----

    /// Force the status to failure. Idempotent.
    pub(crate) fn fail(&mut self) {
        self.success = false;
    }

    pub(crate) fn record_error(&mut self, message: impl Into<String>) -> bool {
        self.errors.push(message.into());
        false
    }

    pub(crate) fn record_log(&mut self, message: impl Into<String>) -> bool {
        self.logs.push(message.into());
        true
    }

    pub(crate) fn merge_payload(&mut self, payload: Payload) {
        self.payload.extend(payload);
    }

    /// Merge the projected outputs and hand the outcome back.
    pub(crate) fn finalize(mut self, outputs: Payload) -> Self {
        self.merge_payload(outputs);
        self
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::new()
    }
}
