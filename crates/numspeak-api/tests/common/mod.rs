//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use numspeak_arithmetic::domain::history::InMemoryHistory;
use numspeak_core::clock::Clock;
use numspeak_test_support::SequenceClock;
use tower::ServiceExt;

use numspeak_api::routes;
use numspeak_api::state::AppState;

/// Address every test request appears to come from.
pub const CALLER: [u8; 4] = [203, 0, 113, 7];

/// Timestamp of the first calculation in every test; each later one is a
/// second after the previous.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

/// Build the full app router around `history`, with a stepping clock and a
/// mocked peer address. Uses the same route structure as `main.rs`.
pub fn build_test_app(history: Arc<InMemoryHistory>) -> Router {
    let clock: Arc<dyn Clock> =
        Arc::new(SequenceClock::new(start_time(), Duration::seconds(1)));
    let app_state = AppState::new(clock, history);

    routes::router()
        .with_state(app_state)
        .layer(MockConnectInfo(SocketAddr::from((CALLER, 51000))))
}

/// A history holding at most `capacity` calculations.
pub fn history_with_capacity(capacity: usize) -> Arc<InMemoryHistory> {
    Arc::new(InMemoryHistory::new(NonZeroUsize::new(capacity).unwrap()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// Send a GET request and return the raw response body.
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response parsed as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get_text(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

/// Send a POST request with a form-encoded body and return the raw body.
pub async fn post_form(app: Router, uri: &str, form: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .unwrap();

    send(app, request).await
}

/// Send a POST request with a JSON body and return the parsed response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let (status, body) = send(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

/// Percent-encodes a `values` list for use in a query string.
pub fn values_query(raw: &str) -> String {
    let encoded: String = raw
        .bytes()
        .map(|b| match b {
            b'0'..=b'9' | b'.' | b'-' => (b as char).to_string(),
            _ => format!("%{b:02X}"),
        })
        .collect();
    format!("/?values={encoded}")
}
