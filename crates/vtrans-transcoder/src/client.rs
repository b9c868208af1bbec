//! Elastic Transcoder client implementation.

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_elastictranscoder::types::{CreateJobOutput, JobInput};
use aws_sdk_elastictranscoder::Client;
use tracing::{debug, info};

use vtrans_models::TranscodeJobRequest;

use crate::error::{TranscoderError, TranscoderResult};

/// Fallback region when none is configured in the environment.
const DEFAULT_REGION: &str = "us-east-1";

/// Seam for job submission, so batch handling can be tested without AWS.
#[allow(async_fn_in_trait)]
pub trait SubmitJob {
    /// Submit one job and return the service-assigned job id.
    async fn submit_job(&self, request: &TranscodeJobRequest) -> TranscoderResult<String>;
}

/// Elastic Transcoder client.
#[derive(Debug, Clone)]
pub struct TranscoderClient {
    client: Client,
}

impl TranscoderClient {
    /// Create a new client from the ambient AWS environment.
    ///
    /// Region resolution follows the default provider chain, falling back
    /// to `us-east-1`.
    pub async fn new() -> Self {
        let region_provider =
            RegionProviderChain::default_provider().or_else(Region::new(DEFAULT_REGION));

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;

        Self {
            client: Client::new(&sdk_config),
        }
    }
}

impl SubmitJob for TranscoderClient {
    async fn submit_job(&self, request: &TranscodeJobRequest) -> TranscoderResult<String> {
        debug!(
            pipeline_id = %request.pipeline_id,
            input_key = %request.input_key,
            output_key_prefix = %request.output_key_prefix,
            "Submitting transcode job"
        );

        let input = JobInput::builder().key(&request.input_key).build();

        let mut create_job = self
            .client
            .create_job()
            .pipeline_id(&request.pipeline_id)
            .input(input)
            .output_key_prefix(&request.output_key_prefix);

        for output in &request.outputs {
            create_job = create_job.outputs(
                CreateJobOutput::builder()
                    .key(&output.key)
                    .preset_id(&output.preset_id)
                    .build(),
            );
        }

        let response = create_job
            .send()
            .await
            .map_err(|e| TranscoderError::submit_failed(e.to_string()))?;

        let job_id = response.job.and_then(|job| job.id).unwrap_or_default();
        info!(job_id = %job_id, input_key = %request.input_key, "Created transcode job");

        Ok(job_id)
    }
}
