//! Collaborators that can be merged into a running command
//!
//! Two capability sets are accepted by [`Context::transfer`]:
//!
//! - [`Report`]: anything outcome-like (status, errors, logs, payload).
//!   [`Outcome`] implements it.
//! - [`Record`]: a validated, persisted entity (status is
//!   `valid() && persisted()`, errors only).
//!
//! [`Context::transfer`]: crate::context::Context::transfer

use crate::outcome::Outcome;
use crate::value::Payload;

/// Outcome-like collaborator.
pub trait Report {
    fn successful(&self) -> bool;
    fn errors(&self) -> Vec<String>;
    fn logs(&self) -> Vec<String>;
    fn payload(&self) -> Payload;
}

/// Record-like collaborator: something that validates and persists itself.
pub trait Record {
    fn valid(&self) -> bool;
    fn persisted(&self) -> bool;
    fn errors(&self) -> Vec<String>;

    /// Human-readable error messages, preferred over `errors` when present.
    fn full_messages(&self) -> Option<Vec<String>> {
        None
    }
}

impl Report for Outcome {
    fn successful(&self) -> bool {
        Outcome::successful(self)
    }

    fn errors(&self) -> Vec<String> {
        Outcome::errors(self)
    }

    fn logs(&self) -> Vec<String> {
        Outcome::logs(self)
    }

    fn payload(&self) -> Payload {
        Outcome::payload(self)
    }
}

/// A transfer source, resolved to the capability set it implements.
#[derive(Clone, Copy)]
pub enum Source<'a> {
    Report(&'a dyn Report),
    Record(&'a dyn Record),
}

impl<'a> Source<'a> {
    pub fn report(report: &'a dyn Report) -> Self {
        Source::Report(report)
    }

    pub fn record(record: &'a dyn Record) -> Self {
        Source::Record(record)
    }

    /// Logs, for sources that carry them.
    pub fn logs(&self) -> Option<Vec<String>> {
        match self {
            Source::Report(report) => Some(report.logs()),
            Source::Record(_) => None,
        }
    }

    /// Payload, for sources that carry one.
    pub fn payload(&self) -> Option<Payload> {
        match self {
            Source::Report(report) => Some(report.payload()),
            Source::Record(_) => None,
        }
    }

    pub fn errors(&self) -> Vec<String> {
        match self {
            Source::Report(report) => report.errors(),
            Source::Record(record) => record.full_messages().unwrap_or_else(|| record.errors()),
        }
    }

    pub fn successful(&self) -> bool {
        match self {
            Source::Report(report) => report.successful(),
            Source::Record(record) => record.valid() && record.persisted(),
        }
    }
}

impl<'a> From<&'a Outcome> for Source<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        Source::Report(outcome)
    }
}
