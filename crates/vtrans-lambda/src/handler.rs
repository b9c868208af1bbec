//! S3 event handler: one transcode job per object-created record.

use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use tracing::{debug, info};

use vtrans_models::{decode_object_key, output_key_prefix, source_key, TranscodeJobRequest};
use vtrans_transcoder::SubmitJob;

use crate::config::TriggerConfig;
use crate::error::{TriggerError, TriggerResult};

/// Process one notification batch, submitting one transcode job per record.
///
/// Records are handled strictly in arrival order, each submission awaited
/// before the next record is touched. The first failure aborts the rest of
/// the batch; jobs already submitted are not undone. An empty batch is a
/// legal no-op.
pub async fn handle_event<S: SubmitJob>(
    config: &TriggerConfig,
    transcoder: &S,
    event: S3Event,
) -> TriggerResult<()> {
    debug!(event = ?event, "Received S3 event payload");
    info!(
        records = event.records.len(),
        input_key = %config.input_key,
        pipeline_id = %config.pipeline_id,
        "Processing S3 event batch"
    );

    for record in &event.records {
        submit_for_record(config, transcoder, record).await?;
    }

    Ok(())
}

async fn submit_for_record<S: SubmitJob>(
    config: &TriggerConfig,
    transcoder: &S,
    record: &S3EventRecord,
) -> TriggerResult<()> {
    let raw_key = record
        .s3
        .object
        .key
        .as_deref()
        .ok_or_else(|| TriggerError::malformed_event("record has no object key"))?;

    let bucket = record.s3.bucket.name.as_deref().unwrap_or("<unknown>");
    let region = record.aws_region.as_deref().unwrap_or("<unknown>");
    debug!(bucket = %bucket, region = %region, key = %raw_key, "Processing record");

    // Prefer the decoded key the platform already supplies; otherwise
    // reverse the notification encoding ourselves.
    let decoded_key = match record.s3.object.url_decoded_key.as_deref() {
        Some(decoded) => decoded.to_string(),
        None => decode_object_key(raw_key)?,
    };
    debug!(decoded_key = %decoded_key, "Decoded object key");

    let source = source_key(&decoded_key);
    debug!(source_key = %source, "Derived source key");

    let prefix = output_key_prefix(&source);
    debug!(output_key = %prefix, "Derived output key prefix");

    let request = TranscodeJobRequest::standard(&config.pipeline_id, &source);
    let job_id = transcoder.submit_job(&request).await?;
    info!(job_id = %job_id, source_key = %source, "Submitted transcode job");

    Ok(())
}
