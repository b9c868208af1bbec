//! Trigger error types.

use thiserror::Error;

/// Result type for trigger operations.
pub type TriggerResult<T> = Result<T, TriggerError>;

/// Errors that abort an invocation. There is no local recovery: every
/// variant surfaces to the hosting platform, which owns redelivery.
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Malformed event record: {0}")]
    MalformedEvent(String),

    #[error("Key error: {0}")]
    Key(#[from] vtrans_models::KeyError),

    #[error("Transcoder error: {0}")]
    Transcoder(#[from] vtrans_transcoder::TranscoderError),
}

impl TriggerError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn malformed_event(msg: impl Into<String>) -> Self {
        Self::MalformedEvent(msg.into())
    }
}
