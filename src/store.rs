//! Article model, snapshot persistence and the in-process read cache.
//!
//! Each pipeline run replaces the snapshot file wholesale; the
//! [`ArticleStore`] is a time-boxed read-through view over it for the HTTP
//! layer.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

/// Maximum number of articles kept in a snapshot.
pub const SNAPSHOT_CAP: usize = 500;

/// How long a cached article list stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(60);

/// One processed news article. Field names serialize in camelCase, matching
/// the API contract and the snapshot file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image: String,
    pub source: String,
    /// Canonical link to the original item; deduplication key.
    pub url: String,
    pub published_at: String,
    pub category: String,
    pub rewritten: bool,
}

/// The persisted aggregate written by each pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub articles: Vec<Article>,
    pub last_updated: String,
    pub count: usize,
    pub sources: Vec<String>,
}

impl Snapshot {
    pub fn new(articles: Vec<Article>, sources: Vec<String>) -> Self {
        Self {
            count: articles.len(),
            last_updated: Utc::now().to_rfc3339(),
            articles,
            sources,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode snapshot {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Deduplicates by `url` and caps the result. A later duplicate replaces the
/// earlier one's content but keeps its position, so the cap is positional by
/// fetch order.
pub fn dedupe_and_cap(articles: Vec<Article>, cap: usize) -> Vec<Article> {
    let mut unique: Vec<Article> = Vec::new();
    let mut index_of: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for article in articles {
        match index_of.get(&article.url) {
            Some(&existing) => unique[existing] = article,
            None => {
                index_of.insert(article.url.clone(), unique.len());
                unique.push(article);
            }
        }
    }

    unique.truncate(cap);
    unique
}

/// Writes the snapshot, creating the parent directory if needed.
pub async fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), StoreError> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
    }

    let json = serde_json::to_string_pretty(snapshot).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    tokio::fs::write(path, json)
        .await
        .map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
}

pub async fn read_snapshot(path: &Path) -> Result<Snapshot, StoreError> {
    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&data).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// What a [`ArticleStore::get`] call returns: the list, whether it came from
/// the in-memory copy, and the snapshot timestamp on a fresh read.
#[derive(Debug, Clone)]
pub struct ArticleView {
    pub articles: Vec<Article>,
    pub cached: bool,
    pub last_updated: Option<String>,
}

struct CacheEntry {
    articles: Vec<Article>,
    read_at: Instant,
}

/// Time-boxed in-process cache fronting the snapshot file.
pub struct ArticleStore {
    path: PathBuf,
    ttl: Duration,
    cache: RwLock<Option<CacheEntry>>,
}

impl ArticleStore {
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
            cache: RwLock::new(None),
        }
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.path
    }

    /// Returns the in-memory copy while it is younger than the TTL, otherwise
    /// re-reads the snapshot file and replaces it.
    pub async fn get(&self) -> Result<ArticleView, StoreError> {
        {
            let cache = self.cache.read().await;
            if let Some(entry) = cache.as_ref() {
                if entry.read_at.elapsed() < self.ttl {
                    return Ok(ArticleView {
                        articles: entry.articles.clone(),
                        cached: true,
                        last_updated: None,
                    });
                }
            }
        }

        let snapshot = read_snapshot(&self.path).await?;

        let mut cache = self.cache.write().await;
        *cache = Some(CacheEntry {
            articles: snapshot.articles.clone(),
            read_at: Instant::now(),
        });

        Ok(ArticleView {
            articles: snapshot.articles,
            cached: false,
            last_updated: Some(snapshot.last_updated),
        })
    }

    /// Drops the in-memory copy; the next [`get`](Self::get) re-reads storage.
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }
}
