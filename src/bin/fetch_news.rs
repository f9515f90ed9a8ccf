//! Standalone pipeline invocation: fetch, rewrite and persist one snapshot,
//! then exit. Exits non-zero if the snapshot cannot be written, so external
//! schedulers can observe the failure.

use afrinews::config::Config;
use afrinews::pipeline::{FetchPipeline, PipelineRunner};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "afrinews=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load("config.toml")?;
    let pipeline = FetchPipeline::new(config.data_file);

    let output = pipeline.run().await?;
    info!("{}", output);

    Ok(())
}
