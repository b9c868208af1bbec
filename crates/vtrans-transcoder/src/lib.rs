//! Elastic Transcoder client.
//!
//! This crate provides:
//! - Job submission against a configured pipeline
//! - The `SubmitJob` seam used to test batch handling without AWS

pub mod client;
pub mod error;

pub use client::{SubmitJob, TranscoderClient};
pub use error::{TranscoderError, TranscoderResult};
