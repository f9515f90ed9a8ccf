//! The fetch pipeline and its scheduling.
//!
//! The HTTP layer only sees the [`PipelineRunner`] capability, so how a
//! refresh actually executes (in-process here, potentially a subprocess or a
//! queued job elsewhere) stays swappable without touching the API contract.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

use crate::fetcher::Fetcher;
use crate::registry::{self, FeedSource};
use crate::store::{self, ArticleStore, Snapshot, StoreError, SNAPSHOT_CAP};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Persist(#[from] StoreError),
}

/// Runs one full fetch-rewrite-persist cycle and reports a human-readable
/// summary of what happened.
#[async_trait]
pub trait PipelineRunner: Send + Sync {
    async fn run(&self) -> Result<String, PipelineError>;
}

/// Production pipeline: fetch every registry feed sequentially, dedupe, cap,
/// write the snapshot wholesale.
pub struct FetchPipeline {
    feeds: Vec<FeedSource>,
    snapshot_path: PathBuf,
}

impl FetchPipeline {
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self::with_feeds(registry::all_feeds(), snapshot_path)
    }

    /// Pipeline over an explicit feed list, used by tests with mock servers.
    pub fn with_feeds(feeds: Vec<FeedSource>, snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            feeds,
            snapshot_path: snapshot_path.into(),
        }
    }
}

#[async_trait]
impl PipelineRunner for FetchPipeline {
    async fn run(&self) -> Result<String, PipelineError> {
        let mut fetcher = Fetcher::new();
        let (articles, summary) = fetcher.fetch_all(&self.feeds).await;

        let unique = store::dedupe_and_cap(articles, SNAPSHOT_CAP);
        let sources = self.feeds.iter().map(|feed| feed.name.clone()).collect();
        let snapshot = Snapshot::new(unique, sources);

        store::write_snapshot(&self.snapshot_path, &snapshot).await?;

        info!(
            "Saved {} unique articles to {}",
            snapshot.count,
            self.snapshot_path.display()
        );

        Ok(format!(
            "Saved {} unique articles ({} feeds succeeded, {} failed)",
            snapshot.count, summary.succeeded, summary.failed
        ))
    }
}

/// Fires the pipeline every `interval` and drops the store's cached copy
/// after each successful run. Failures are logged and the loop keeps going.
pub async fn run_scheduled(
    runner: Arc<dyn PipelineRunner>,
    store: Arc<ArticleStore>,
    interval: Duration,
) {
    loop {
        tokio::time::sleep(interval).await;
        info!("Scheduled refresh starting");
        match runner.run().await {
            Ok(summary) => {
                store.invalidate().await;
                info!("Scheduled refresh completed: {}", summary);
            }
            Err(e) => error!("Scheduled refresh failed: {}", e),
        }
    }
}
