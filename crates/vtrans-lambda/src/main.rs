//! Lambda entry point: S3 upload notifications to Elastic Transcoder jobs.

use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vtrans_lambda::{handle_event, TriggerConfig};
use vtrans_transcoder::TranscoderClient;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // JSON logs by default (CloudWatch); ANSI output for local runs
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() != "pretty")
        .unwrap_or(true);

    let env_filter = EnvFilter::from_default_env().add_directive("vtrans=info".parse()?);

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(true).with_target(true))
            .with(env_filter)
            .init();
    }

    // Required configuration is validated here, before the first event
    let config = TriggerConfig::from_env()?;
    info!(
        input_key = %config.input_key,
        pipeline_id = %config.pipeline_id,
        "Starting vtrans-lambda"
    );

    // Built once at cold start and reused across invocations
    let transcoder = TranscoderClient::new().await;

    let config = &config;
    let transcoder = &transcoder;
    run(service_fn(move |event: LambdaEvent<S3Event>| async move {
        handle_event(config, transcoder, event.payload).await?;
        Ok::<(), Error>(())
    }))
    .await
}
