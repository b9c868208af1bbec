//! S3-to-Elastic-Transcoder trigger.
//!
//! Receives S3 object-created notification batches and submits one
//! three-rendition transcode job per record.

pub mod config;
pub mod error;
pub mod handler;

pub use config::TriggerConfig;
pub use error::{TriggerError, TriggerResult};
pub use handler::handle_event;
