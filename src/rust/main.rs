use anyhow::Context;
use clap::Parser;
use log::{error, info};
use newsverify::{init_logger, server, Artifacts, InferenceService, ServerConfig};
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let config = ServerConfig::parse();

    info!("=== Starting Fake News Detection API ===");

    let start_time = Instant::now();
    let artifacts = Artifacts::load(&config.artifacts, &config.runtime_config())
        .inspect_err(|e| error!("Startup aborted: {}", e))
        .context("failed to load model artifacts")?;
    info!("=== Artifacts Loaded (took {:.2?}) ===", start_time.elapsed());

    let service = InferenceService::from_artifacts(artifacts);
    server::start(service, config).await?;

    Ok(())
}
