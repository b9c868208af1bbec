//! Trigger configuration.

use crate::error::{TriggerError, TriggerResult};

/// Environment configuration for the trigger, read once at startup and
/// shared immutably for the process lifetime.
#[derive(Debug, Clone)]
pub struct TriggerConfig {
    /// Input-key convention of the watched bucket. Logged for diagnostics;
    /// not consulted on the derivation path.
    pub input_key: String,
    /// Elastic Transcoder pipeline that receives the jobs.
    pub pipeline_id: String,
}

impl TriggerConfig {
    /// Create config from environment variables.
    ///
    /// Both variables are required. A missing or empty value fails here,
    /// at startup, instead of surfacing later as a malformed job request.
    pub fn from_env() -> TriggerResult<Self> {
        Ok(Self {
            input_key: require_var("INPUT_KEY")?,
            pipeline_id: require_var("PIPELINE_ID")?,
        })
    }
}

fn require_var(name: &str) -> TriggerResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TriggerError::config_error(format!("{name} not set"))),
    }
}
