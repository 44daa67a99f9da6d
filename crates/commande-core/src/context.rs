//! Per-invocation state handed to `valid` and `body`
//!
//! The [`Context`] owns the Outcome under construction and the command's
//! output slots. Every error, log and abrupt exit goes through it, so the
//! engine stays the only writer of the Outcome.

use commande_core_types::InvocationId;

use crate::command::{Flow, Halt};
use crate::errors::CommandeError;
use crate::outcome::Outcome;
use crate::transfer::Source;
use crate::value::{Payload, Value};

pub struct Context {
    command: &'static str,
    outputs: &'static [&'static str],
    invocation_id: InvocationId,
    outcome: Outcome,
    slots: Payload,
    failure: Option<CommandeError>,
}

impl Context {
    pub(crate) fn new(command: &'static str, outputs: &'static [&'static str]) -> Self {
        Self {
            command,
            outputs,
            invocation_id: InvocationId::new(),
            outcome: Outcome::new(),
            slots: Payload::new(),
            failure: None,
        }
    }

    pub fn invocation_id(&self) -> &InvocationId {
        &self.invocation_id
    }

    pub fn command_name(&self) -> &'static str {
        self.command
    }

    /// Whether `name` is one of the command's declared outputs.
    pub fn is_declared(&self, name: &str) -> bool {
        self.outputs.contains(&name)
    }

    // ---- slots ----

    /// Write a slot. Only declared names are projected into the outcome;
    /// any other name is private scratch state for this invocation.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.slots.insert(name.into(), value.into());
    }

    /// Read a slot written earlier in this invocation.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.slots.get(name)
    }

    /// Read-only view of the outcome as built so far.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    // ---- non-fatal reporting ----

    /// Record an error and keep going. Always returns false.
    pub fn error(&mut self, message: impl Into<String>) -> bool {
        self.outcome.record_error(message)
    }

    /// Record a log message. Always returns true.
    pub fn log(&mut self, message: impl Into<String>) -> bool {
        self.outcome.record_log(message)
    }

    // ---- abrupt exits ----

    /// Fail and stop the current body.
    pub fn fail(&mut self) -> Flow {
        let reason = CommandeError::Aborted {
            command: self.command.to_string(),
        };
        self.halt_failed(reason)
    }

    /// Record `message` as an error, then fail and stop.
    pub fn fatal(&mut self, message: impl Into<String>) -> Flow {
        let message = message.into();
        self.fatal_with(CommandeError::FatalError { message })
    }

    /// Stop the current body without failing.
    pub fn end(&mut self) -> Flow {
        Err(Halt::End)
    }

    pub(crate) fn fatal_with(&mut self, reason: CommandeError) -> Flow {
        self.outcome.record_error(reason.to_string());
        self.halt_failed(reason)
    }

    pub(crate) fn halt_failed(&mut self, reason: CommandeError) -> Flow {
        self.mark_failed(reason);
        Err(Halt::Fail)
    }

    /// The first recorded reason wins; later ones are consequences.
    pub(crate) fn mark_failed(&mut self, reason: CommandeError) {
        self.outcome.fail();
        if self.failure.is_none() {
            self.failure = Some(reason);
        }
    }

    // ---- transfer ----

    /// Merge a sub-outcome (or record) into this invocation.
    ///
    /// Copies logs, outputs and errors (prefixed with `header` when given) and
    /// returns whether the source was successful. Never stops the body.
    pub fn transfer<'s>(&mut self, source: impl Into<Source<'s>>, header: Option<&str>) -> bool {
        let source = source.into();
        self.transfer_logs(&source, header);
        self.transfer_outputs(&source);
        self.transfer_errors(&source, header);
        let successful = self.transfer_success(&source);
        tracing::debug!(
            command = self.command,
            invocation_id = %self.invocation_id,
            successful,
            "transfer"
        );
        successful
    }

    /// Like [`Context::transfer`], but fails and stops the body when the
    /// source was unsuccessful.
    pub fn transfer_or_fail<'s>(
        &mut self,
        source: impl Into<Source<'s>>,
        header: Option<&str>,
    ) -> Flow {
        let source = source.into();
        if self.transfer(source, header) {
            return Ok(());
        }
        let error = source.errors().into_iter().next();
        self.halt_failed(CommandeError::NestedFailure { error })
    }

    pub fn transfer_logs(&mut self, source: &Source<'_>, header: Option<&str>) {
        for entry in source.logs().unwrap_or_default() {
            self.outcome.record_log(with_header(header, entry));
        }
    }

    /// Merge the source payload into the outcome, and into any slot this
    /// command declares or has already written. Other keys only reach the
    /// outcome payload.
    pub fn transfer_outputs(&mut self, source: &Source<'_>) {
        let Some(payload) = source.payload() else {
            return;
        };
        for (name, value) in &payload {
            if self.is_declared(name) || self.slots.contains_key(name) {
                self.slots.insert(name.clone(), value.clone());
            }
        }
        self.outcome.merge_payload(payload);
    }

    pub fn transfer_errors(&mut self, source: &Source<'_>, header: Option<&str>) {
        for entry in source.errors() {
            self.outcome.record_error(with_header(header, entry));
        }
    }

    /// Whether the source succeeded. Outcome-like sources report their own
    /// status; records must be both valid and persisted.
    pub fn transfer_success(&self, source: &Source<'_>) -> bool {
        source.successful()
    }

    // ---- finalization ----

    /// Project the declared slots (unset as null) and finalize the outcome.
    pub(crate) fn finish(self) -> (Outcome, Option<CommandeError>) {
        let outputs: Payload = self
            .outputs
            .iter()
            .map(|name| {
                let value = self.slots.get(*name).cloned().unwrap_or(Value::NULL);
                ((*name).to_string(), value)
            })
            .collect();
        (self.outcome.finalize(outputs), self.failure)
    }
}

fn with_header(header: Option<&str>, entry: String) -> String {
    match header {
        Some(header) => format!("{}: {}", header, entry),
        None => entry,
    }
}
