//! Transcode job request model.

use serde::{Deserialize, Serialize};

use crate::key::output_key_prefix;

/// Elastic Transcoder system preset: Generic 1080p.
pub const PRESET_GENERIC_1080P: &str = "1351620000001-000010";
/// Elastic Transcoder system preset: Generic 720p.
pub const PRESET_GENERIC_720P: &str = "1351620000001-000001";
/// Elastic Transcoder system preset: Web (720p).
pub const PRESET_WEB_720P: &str = "1351620000001-100070";

/// One output rendition of a transcode job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOutputSpec {
    /// Output object key, relative to the job's output-key prefix.
    pub key: String,
    /// Preset selecting the encoding parameters for this rendition.
    pub preset_id: String,
}

impl JobOutputSpec {
    pub fn new(key: impl Into<String>, preset_id: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            preset_id: preset_id.into(),
        }
    }
}

/// A one-shot transcode job request: one input, fixed output renditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeJobRequest {
    /// Pipeline that receives the job.
    pub pipeline_id: String,
    /// Source object key in the input bucket.
    pub input_key: String,
    /// Prefix under which all outputs of this job are grouped.
    pub output_key_prefix: String,
    /// Output renditions, in submission order.
    pub outputs: Vec<JobOutputSpec>,
}

impl TranscodeJobRequest {
    /// Build the standard three-rendition job for a source key.
    ///
    /// Every job gets exactly these outputs, regardless of the input:
    /// `{prefix}-1080p.mp4`, `{prefix}-720p.mp4` and `{prefix}-web-720p.mp4`,
    /// where `{prefix}` is the source key truncated at its first `.`.
    pub fn standard(pipeline_id: impl Into<String>, source_key: impl Into<String>) -> Self {
        let source_key = source_key.into();
        let prefix = output_key_prefix(&source_key);

        let outputs = vec![
            JobOutputSpec::new(format!("{prefix}-1080p.mp4"), PRESET_GENERIC_1080P),
            JobOutputSpec::new(format!("{prefix}-720p.mp4"), PRESET_GENERIC_720P),
            JobOutputSpec::new(format!("{prefix}-web-720p.mp4"), PRESET_WEB_720P),
        ];
        let output_key_prefix = format!("{prefix}/");

        Self {
            pipeline_id: pipeline_id.into(),
            input_key: source_key,
            output_key_prefix,
            outputs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_job_renditions() {
        let job = TranscodeJobRequest::standard("pipeline-123", "movies/My+Clip.mov");

        assert_eq!(job.pipeline_id, "pipeline-123");
        assert_eq!(job.input_key, "movies/My+Clip.mov");
        assert_eq!(job.output_key_prefix, "movies/My+Clip/");
        assert_eq!(
            job.outputs,
            vec![
                JobOutputSpec::new("movies/My+Clip-1080p.mp4", PRESET_GENERIC_1080P),
                JobOutputSpec::new("movies/My+Clip-720p.mp4", PRESET_GENERIC_720P),
                JobOutputSpec::new("movies/My+Clip-web-720p.mp4", PRESET_WEB_720P),
            ]
        );
    }

    #[test]
    fn test_standard_job_always_three_outputs() {
        let job = TranscodeJobRequest::standard("p", "x.webm");
        assert_eq!(job.outputs.len(), 3);
    }

    #[test]
    fn test_standard_job_extensionless_key() {
        let job = TranscodeJobRequest::standard("pipeline-123", "clip");

        assert_eq!(job.input_key, "clip");
        assert_eq!(job.output_key_prefix, "clip/");
        assert_eq!(job.outputs[0].key, "clip-1080p.mp4");
    }

    #[test]
    fn test_standard_job_multi_dot_key_uses_first_segment() {
        let job = TranscodeJobRequest::standard("pipeline-123", "a.b.mov");

        assert_eq!(job.output_key_prefix, "a/");
        assert_eq!(job.outputs[1].key, "a-720p.mp4");
    }
}
