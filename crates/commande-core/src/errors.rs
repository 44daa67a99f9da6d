use commande_core_types::InvocationId;
use thiserror::Error;

/// Result type alias using CommandeError
pub type Result<T> = std::result::Result<T, CommandeError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every way an invocation can end unsuccessfully maps to one kind, and each
/// kind maps to a stable error code used in structured logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Outcome access
    UnknownField,

    // Invocation failures (in-band, carried by the Outcome)
    ValidationFailure,
    ExplicitError,
    FatalError,
    Aborted,
    NestedFailure,

    // Chain
    EmptyChain,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::UnknownField => "ERR_UNKNOWN_FIELD",
            ExErrorKind::ValidationFailure => "ERR_VALIDATION_FAILURE",
            ExErrorKind::ExplicitError => "ERR_EXPLICIT_ERROR",
            ExErrorKind::FatalError => "ERR_FATAL_ERROR",
            ExErrorKind::Aborted => "ERR_ABORTED",
            ExErrorKind::NestedFailure => "ERR_NESTED_FAILURE",
            ExErrorKind::EmptyChain => "ERR_EMPTY_CHAIN",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling, plus the invocation
/// context the error was raised in.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    command: Option<String>,
    field: Option<String>,
    invocation_id: Option<InvocationId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            command: None,
            field: None,
            invocation_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add command type context
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Add outcome field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add invocation ID context
    pub fn with_invocation_id(mut self, invocation_id: InvocationId) -> Self {
        self.invocation_id = Some(invocation_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn invocation_id(&self) -> Option<&InvocationId> {
        self.invocation_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(command) = &self.command {
            write!(f, " (command: {})", command)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for command invocations
///
/// Only `UnknownField` is ever returned as an `Err` to callers. The other
/// variants describe why an Outcome ended up unsuccessful; the engine logs
/// them and, for the fatal variants, records their rendering in the Outcome.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandeError {
    /// Requested an Outcome field that is neither a fixed member nor an output
    #[error("Unknown outcome field: {field}")]
    UnknownField { field: String },

    /// `valid` returned false, the body never ran
    #[error("Validation failed for {command}")]
    ValidationFailed { command: String },

    /// The body recorded errors but ran to completion
    #[error("{message}")]
    ExplicitError { message: String },

    /// The body recorded an error and stopped
    #[error("{message}")]
    FatalError { message: String },

    /// The body failed without recording a message
    #[error("Command {command} aborted")]
    Aborted { command: String },

    /// A transferred or chained sub-outcome was unsuccessful
    #[error(
        "Nested command failed: {}",
        .error.as_deref().unwrap_or("no error reported")
    )]
    NestedFailure { error: Option<String> },

    /// A chain was invoked without any step
    #[error("needs at least one command")]
    EmptyChain,
}

impl CommandeError {
    /// Map to the canonical error kind
    pub fn kind(&self) -> ExErrorKind {
        match self {
            CommandeError::UnknownField { .. } => ExErrorKind::UnknownField,
            CommandeError::ValidationFailed { .. } => ExErrorKind::ValidationFailure,
            CommandeError::ExplicitError { .. } => ExErrorKind::ExplicitError,
            CommandeError::FatalError { .. } => ExErrorKind::FatalError,
            CommandeError::Aborted { .. } => ExErrorKind::Aborted,
            CommandeError::NestedFailure { .. } => ExErrorKind::NestedFailure,
            CommandeError::EmptyChain => ExErrorKind::EmptyChain,
        }
    }
}

impl From<CommandeError> for ExError {
    fn from(err: CommandeError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            CommandeError::UnknownField { field } => ExError::new(kind)
                .with_op("outcome_get")
                .with_field(field)
                .with_message(message),

            CommandeError::ValidationFailed { command } | CommandeError::Aborted { command } => {
                ExError::new(kind).with_command(command).with_message(message)
            }

            CommandeError::ExplicitError { .. }
            | CommandeError::FatalError { .. }
            | CommandeError::NestedFailure { .. } => ExError::new(kind).with_message(message),

            CommandeError::EmptyChain => ExError::new(kind)
                .with_op("chain_valid")
                .with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_conversion() {
        let err = CommandeError::UnknownField {
            field: "nope".to_string(),
        };
        let ex: ExError = err.into();

        assert_eq!(ex.kind(), ExErrorKind::UnknownField);
        assert_eq!(ex.code(), "ERR_UNKNOWN_FIELD");
        assert_eq!(ex.field(), Some("nope"));
        assert_eq!(ex.op(), Some("outcome_get"));
    }

    #[test]
    fn test_fatal_error_renders_message_only() {
        let err = CommandeError::FatalError {
            message: "fatal".to_string(),
        };
        assert_eq!(err.to_string(), "fatal");
    }

    #[test]
    fn test_nested_failure_display() {
        let with = CommandeError::NestedFailure {
            error: Some("boom".to_string()),
        };
        let without = CommandeError::NestedFailure { error: None };

        assert_eq!(with.to_string(), "Nested command failed: boom");
        assert_eq!(
            without.to_string(),
            "Nested command failed: no error reported"
        );
    }

    #[test]
    fn test_empty_chain_message() {
        assert_eq!(
            CommandeError::EmptyChain.to_string(),
            "needs at least one command"
        );
    }

    #[test]
    fn test_ex_error_display_includes_context() {
        let ex = ExError::new(ExErrorKind::ValidationFailure)
            .with_op("invoke")
            .with_command("Purchase")
            .with_message("Validation failed for Purchase")
            .with_invocation_id(InvocationId::new());

        assert_eq!(ex.command(), Some("Purchase"));
        assert_eq!(ex.message(), "Validation failed for Purchase");
        assert!(ex.invocation_id().is_some());

        let rendered = ex.to_string();
        assert!(rendered.starts_with("[ERR_VALIDATION_FAILURE]"));
        assert!(rendered.contains("in operation 'invoke'"));
        assert!(rendered.contains("(command: Purchase)"));
    }
}
