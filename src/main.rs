mod config;
mod fetcher;
mod pipeline;
mod registry;
mod rewrite;
mod routes;
mod store;

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::pipeline::{FetchPipeline, PipelineRunner};
use crate::routes::AppState;
use crate::store::ArticleStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "afrinews=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load("config.toml")?;
    info!(
        "Snapshot at {}, scheduled refresh every {}h",
        config.data_file.display(),
        config.refresh_interval_hours
    );

    // Ensure the data directory exists
    if let Some(dir) = config.data_file.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }

    let store = Arc::new(ArticleStore::new(
        config.data_file.clone(),
        Duration::from_secs(config.cache_ttl_secs),
    ));
    let runner: Arc<dyn PipelineRunner> = Arc::new(FetchPipeline::new(config.data_file.clone()));

    // Run the pipeline once if no snapshot exists yet; the server starts
    // either way.
    if !config.data_file.exists() {
        info!("No snapshot found, fetching initial articles");
        match runner.run().await {
            Ok(output) => info!("Initial fetch completed: {}", output),
            Err(e) => error!("Initial fetch failed: {}", e),
        }
    }

    // Start the scheduled refresh task
    let bg_runner = runner.clone();
    let bg_store = store.clone();
    let interval = Duration::from_secs(config.refresh_interval_hours * 3600);
    tokio::spawn(async move {
        pipeline::run_scheduled(bg_runner, bg_store, interval).await;
    });

    // Build router
    let state = Arc::new(AppState { store, runner });
    let app = routes::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Server starting on http://localhost:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
