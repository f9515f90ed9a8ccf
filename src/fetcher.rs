//! Feed retrieval and article assembly.
//!
//! Feeds are fetched one at a time; a failing feed is logged and skipped so
//! the rest of the batch still lands. Every parsed entry becomes one
//! [`Article`] with its text run through the [`Rewriter`].

use std::time::Duration;

use chrono::{DateTime, Utc};
use feed_rs::model::Entry;
use feed_rs::parser;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use tracing::{error, info, warn};

use crate::registry::{self, FeedSource};
use crate::rewrite::Rewriter;
use crate::store::Article;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Summaries are cut to this many characters before rewriting.
const SUMMARY_CHARS: usize = 250;

/// Shown when a feed item carries no usable media reference.
pub const PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/800x400/2c3e50/ffffff?text=African+News";

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("invalid tag pattern"));

/// Per-run feed counters, logged and surfaced in the pipeline summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

pub struct Fetcher {
    client: Client,
    rewriter: Rewriter,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_rewriter(Rewriter::new())
    }

    /// Builds a fetcher around a caller-supplied rewriter, letting tests pass
    /// a seeded one.
    pub fn with_rewriter(rewriter: Rewriter) -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, rewriter }
    }

    /// Fetches every feed in order, tolerating per-feed failure. Returns the
    /// accumulated articles and the success/failure counters.
    pub async fn fetch_all(&mut self, feeds: &[FeedSource]) -> (Vec<Article>, FetchSummary) {
        let mut articles = Vec::new();
        let mut summary = FetchSummary::default();

        info!("Fetching from {} RSS feeds", feeds.len());

        for feed in feeds {
            match self.fetch_feed(feed).await {
                Ok(batch) if !batch.is_empty() => {
                    info!("{}: {} articles", feed.name, batch.len());
                    summary.succeeded += 1;
                    articles.extend(batch);
                }
                Ok(_) => {
                    warn!("{}: no articles found", feed.name);
                }
                Err(e) => {
                    error!("{}: {}", feed.name, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Fetch summary: {} succeeded, {} failed",
            summary.succeeded, summary.failed
        );
        (articles, summary)
    }

    async fn fetch_feed(&mut self, feed: &FeedSource) -> anyhow::Result<Vec<Article>> {
        let response = self.client.get(&feed.url).send().await?;
        let bytes = response.error_for_status()?.bytes().await?;
        let parsed = parser::parse(&bytes[..])?;

        let fetched_at = Utc::now();
        let prefix = registry::slug(&feed.name);
        let stamp = fetched_at.timestamp_millis();

        let articles = parsed
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                self.build_article(feed, entry, &prefix, stamp, index, fetched_at)
            })
            .collect();

        Ok(articles)
    }

    fn build_article(
        &mut self,
        feed: &FeedSource,
        entry: &Entry,
        prefix: &str,
        stamp: i64,
        index: usize,
        fetched_at: DateTime<Utc>,
    ) -> Article {
        let raw = entry
            .summary
            .as_ref()
            .map(|text| text.content.clone())
            .or_else(|| entry.content.as_ref().and_then(|c| c.body.clone()))
            .unwrap_or_default();
        let clean = HTML_TAG.replace_all(&raw, "").trim().to_string();
        let snippet: String = clean.chars().take(SUMMARY_CHARS).collect();

        let title = entry.title.as_ref().map(|t| t.content.as_str());

        Article {
            id: format!("{}-{}-{}", prefix, stamp, index),
            title: self.rewriter.rewrite_title(title),
            summary: format!("{}...", self.rewriter.rewrite_text(&snippet)),
            content: self.rewriter.rewrite_text(&clean),
            image: extract_image(entry),
            source: feed.name.clone(),
            url: extract_link(entry),
            published_at: entry
                .published
                .or(entry.updated)
                .unwrap_or(fetched_at)
                .to_rfc3339(),
            category: extract_category(entry),
            rewritten: true,
        }
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered fallback over the entry's media references: any media content URL
/// first, then any thumbnail, then the placeholder.
fn extract_image(entry: &Entry) -> String {
    entry
        .media
        .iter()
        .flat_map(|media| media.content.iter())
        .find_map(|content| content.url.as_ref().map(|url| url.to_string()))
        .or_else(|| {
            entry
                .media
                .iter()
                .flat_map(|media| media.thumbnails.iter())
                .map(|thumb| thumb.image.uri.clone())
                .next()
        })
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

/// First link href, falling back to the entry id (RSS guids are often URLs).
fn extract_link(entry: &Entry) -> String {
    entry
        .links
        .first()
        .map(|link| link.href.clone())
        .filter(|href| !href.is_empty())
        .unwrap_or_else(|| entry.id.clone())
}

fn extract_category(entry: &Entry) -> String {
    entry
        .categories
        .first()
        .map(|category| {
            category
                .label
                .clone()
                .unwrap_or_else(|| category.term.clone())
        })
        .filter(|category| !category.is_empty())
        .unwrap_or_else(|| "General".to_string())
}
