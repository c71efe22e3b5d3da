//! HTTP surface: three read-only GET routes over an immutable shared state.
//!
//! Handlers receive an explicitly constructed [`AppState`] instead of
//! reaching for process-wide globals; each request computes its badge
//! independently, so there is no locking anywhere.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::render::BadgeRenderer;
use crate::wisdom::WisdomStore;

/// Immutable per-process state shared by all handlers.
pub struct AppState {
    pub store: WisdomStore,
    pub renderer: Arc<dyn BadgeRenderer>,
}

impl AppState {
    pub fn new(store: WisdomStore, renderer: Arc<dyn BadgeRenderer>) -> Self {
        Self { store, renderer }
    }
}

/// Build the service router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/wisdom", get(wisdom))
        .route("/badge", get(badge))
        .with_state(state)
}

#[derive(Serialize)]
struct WisdomResponse {
    wisdom: String,
    timestamp: String,
}

#[derive(Deserialize)]
struct BadgeParams {
    text: Option<String>,
}

async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "QA Wisdom API",
        "endpoints": {
            "/wisdom": "Get random QA wisdom (JSON)",
            "/badge": "Get wisdom as a rendered badge",
            "/badge?text=custom": "Custom text badge"
        }
    }))
}

async fn wisdom(State(state): State<Arc<AppState>>) -> Json<WisdomResponse> {
    let entry = state.store.pick();
    tracing::debug!(wisdom = entry, "serving wisdom");
    Json(WisdomResponse {
        wisdom: entry.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

async fn badge(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BadgeParams>,
) -> Result<Response, AppError> {
    // An empty `text` parameter counts as absent.
    let text = match params.text.as_deref().filter(|t| !t.is_empty()) {
        Some(custom) => custom.to_string(),
        None => state.store.pick().to_string(),
    };
    tracing::debug!(text = %text, "rendering badge");
    let badge = state.renderer.render_badge(&text)?;
    Ok((
        [
            (header::CONTENT_TYPE, badge.content_type),
            (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
            (header::PRAGMA, "no-cache"),
            (header::EXPIRES, "0"),
        ],
        badge.data,
    )
        .into_response())
}

/// Maps renderer failures onto a generic 500 JSON body.
pub struct AppError(crate::Error);

impl From<crate::Error> for AppError {
    fn from(err: crate::Error) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "internal error" })),
        )
            .into_response()
    }
}
