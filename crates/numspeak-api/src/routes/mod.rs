//! Route modules.

use axum::Router;

use crate::state::AppState;

pub mod arithmetic;
pub mod health;
pub mod history;
pub mod spoken;

/// Returns the router for every endpoint the server exposes.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(arithmetic::router())
        .merge(history::router())
        .merge(spoken::router())
}
