//! Transcoder error types.

use thiserror::Error;

/// Result type for transcoder operations.
pub type TranscoderResult<T> = Result<T, TranscoderError>;

/// Errors that can occur while talking to Elastic Transcoder.
#[derive(Debug, Error)]
pub enum TranscoderError {
    /// The CreateJob call was rejected or never completed. Covers bad
    /// pipeline ids, missing permissions, throttling and outages alike;
    /// the caller does not recover locally from any of them.
    #[error("Job submission failed: {0}")]
    SubmitFailed(String),
}

impl TranscoderError {
    pub fn submit_failed(msg: impl Into<String>) -> Self {
        Self::SubmitFailed(msg.into())
    }
}
