//! Process-wide engine configuration
//!
//! Set once at startup with [`set_engine_config`]; the engine reads it on
//! every invocation. Without an explicit call, the configuration comes from
//! the environment.

use std::sync::OnceLock;

/// Environment variable toggling per-invocation start/end logging.
pub const LOG_INVOCATIONS_ENV: &str = "COMMANDE_LOG_INVOCATIONS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Emit `start` / `end` / `end_error` events for every invocation.
    pub log_invocations: bool,
}

impl EngineConfig {
    /// Read `COMMANDE_LOG_INVOCATIONS` (`0`, `false`, `off` disable logging).
    pub fn from_env() -> Self {
        let log_invocations = std::env::var(LOG_INVOCATIONS_ENV)
            .map(|raw| parse_flag(&raw).unwrap_or(true))
            .unwrap_or(true);
        Self { log_invocations }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_invocations: true,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Install the process-wide configuration.
///
/// Returns false if a configuration was already installed (or already read).
pub fn set_engine_config(config: EngineConfig) -> bool {
    ENGINE_CONFIG.set(config).is_ok()
}

/// The active configuration.
pub fn engine_config() -> EngineConfig {
    *ENGINE_CONFIG.get_or_init(EngineConfig::from_env)
}
