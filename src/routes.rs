use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use crate::pipeline::PipelineRunner;
use crate::store::{self, Article, ArticleStore};

pub struct AppState {
    pub store: Arc<ArticleStore>,
    pub runner: Arc<dyn PipelineRunner>,
}

/// Builds the full application router, including the static front end.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/articles", get(list_articles))
        .route("/api/articles/:id", get(get_article))
        .route("/api/refresh", post(refresh))
        .fallback_service(ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArticleListResponse {
    articles: Vec<Article>,
    cached: bool,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<String>,
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub async fn list_articles(State(state): State<Arc<AppState>>) -> Response {
    match state.store.get().await {
        Ok(view) => Json(ArticleListResponse {
            cached: view.cached,
            count: view.articles.len(),
            last_updated: view.last_updated,
            articles: view.articles,
        })
        .into_response(),
        Err(e) => {
            error!("Error fetching articles: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to fetch articles",
                    "articles": [],
                    "count": 0,
                })),
            )
                .into_response()
        }
    }
}

/// Looks the article up in the persisted snapshot rather than the cache, so
/// a direct link works even right after a refresh.
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match store::read_snapshot(state.store.snapshot_path()).await {
        Ok(snapshot) => match snapshot.articles.into_iter().find(|a| a.id == id) {
            Some(article) => Json(article).into_response(),
            None => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Article not found" })),
            )
                .into_response(),
        },
        Err(e) => {
            error!("Error fetching article: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch article" })),
            )
                .into_response()
        }
    }
}

/// Runs the pipeline synchronously; the response carries its summary output.
/// The cache is only invalidated on success.
pub async fn refresh(State(state): State<Arc<AppState>>) -> Response {
    info!("Manual refresh triggered");
    match state.runner.run().await {
        Ok(output) => {
            state.store.invalidate().await;
            info!("Refresh completed");
            Json(json!({
                "success": true,
                "message": "Articles refreshed successfully",
                "output": output,
            }))
            .into_response()
        }
        Err(e) => {
            error!("Refresh failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
