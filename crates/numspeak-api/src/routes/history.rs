//! Routes for reading calculation history.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Router, routing::get};
use numspeak_arithmetic::application::query_handlers::{self, DEFAULT_HISTORY_ITEMS};
use numspeak_core::error::DomainError;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /history
#[instrument(skip(state))]
async fn latest(State(state): State<AppState>) -> Result<Response, ApiError> {
    recent(&state, DEFAULT_HISTORY_ITEMS)
}

/// GET /history/{num_items}
#[instrument(skip(state))]
async fn latest_n(
    State(state): State<AppState>,
    Path(num_items): Path<i64>,
) -> Result<Response, ApiError> {
    recent(&state, num_items)
}

/// Renders the most recent entries as an indented JSON list.
fn recent(state: &AppState, num_items: i64) -> Result<Response, ApiError> {
    let entries = query_handlers::handle_recent_calculations(num_items, state.history.as_ref())?;
    let body = serde_json::to_string_pretty(&entries).map_err(|e| {
        DomainError::Infrastructure(format!("history serialization failed: {e}"))
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Returns the router for calculation history.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/history", get(latest))
        .route("/history/{num_items}", get(latest_n))
}
