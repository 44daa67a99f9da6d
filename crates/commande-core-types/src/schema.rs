//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent across the engine, the
//! logging macros and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_INVOCATION_ID: &str = "invocation_id";

// Invocation fields
pub const FIELD_COMMAND: &str = "command";
pub const FIELD_STATE: &str = "state";
pub const FIELD_SUCCESS: &str = "success";
pub const FIELD_ERROR_COUNT: &str = "error_count";
pub const FIELD_STEP: &str = "step";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_TRANSITION: &str = "transition";

// Canonical operation names
pub const OP_INVOKE: &str = "invoke";
pub const OP_CHAIN_STEP: &str = "chain_step";
