//! Shared value objects for the vtrans transcode trigger.
//!
//! This crate provides:
//! - Object-key derivation (notification decoding, space/plus convention,
//!   output-key prefix)
//! - The transcode job request with its three fixed renditions

pub mod job;
pub mod key;

// Re-export common types
pub use job::{
    JobOutputSpec, TranscodeJobRequest, PRESET_GENERIC_1080P, PRESET_GENERIC_720P, PRESET_WEB_720P,
};
pub use key::{decode_object_key, output_key_prefix, source_key, KeyError, KeyResult};
