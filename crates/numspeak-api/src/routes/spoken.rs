//! Routes for the spoken number converter.

use axum::extract::Path;
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /spoken.
#[derive(Debug, Deserialize)]
pub struct SpokenRequest {
    /// Value to convert. Only JSON integers are accepted.
    pub number: Value,
}

/// Response body for a successful conversion.
#[derive(Debug, Serialize)]
pub struct SpokenResponse {
    /// The number as submitted.
    pub number: Value,
    /// English spoken form.
    pub spoken: String,
}

/// GET /spoken/{number}
///
/// The path segment is read as a JSON literal; anything that is not valid
/// JSON is treated as a string.
#[instrument]
async fn speak_path(Path(raw): Path<String>) -> Result<Json<SpokenResponse>, ApiError> {
    let number = serde_json::from_str(&raw).unwrap_or_else(|_| Value::String(raw));
    speak(number)
}

/// POST /spoken
#[instrument(skip(request))]
async fn speak_body(Json(request): Json<SpokenRequest>) -> Result<Json<SpokenResponse>, ApiError> {
    speak(request.number)
}

fn speak(number: Value) -> Result<Json<SpokenResponse>, ApiError> {
    let spoken = numspeak_spoken::convert_value(&number)?;
    info!(%number, "converted number to spoken form");
    Ok(Json(SpokenResponse { number, spoken }))
}

/// Returns the router for the spoken number converter.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/spoken", post(speak_body))
        .route("/spoken/{number}", get(speak_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use numspeak_core::clock::Clock;
    use numspeak_test_support::{FixedClock, RecordingHistoryRepository};
    use tower::ServiceExt;

    fn app() -> Router {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(Utc::now()));
        router().with_state(AppState::new(
            clock,
            Arc::new(RecordingHistoryRepository::new()),
        ))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_request(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/spoken")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_path_number_is_spoken() {
        let (status, json) = send(get_request("/spoken/427589")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["number"], 427_589);
        assert_eq!(
            json["spoken"],
            "four hundred twenty seven thousand five hundred eighty nine"
        );
    }

    #[tokio::test]
    async fn test_path_word_is_not_a_number() {
        let (status, json) = send(get_request("/spoken/ten")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_input");
        assert_eq!(json["message"], "not a number");
    }

    #[tokio::test]
    async fn test_path_negative_is_rejected() {
        let (status, json) = send(get_request("/spoken/-1")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "number must be non-negative");
    }

    #[tokio::test]
    async fn test_path_quadrillion_is_out_of_range() {
        let (status, json) = send(get_request("/spoken/1000000000000000")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "out_of_range");
        assert_eq!(json["message"], "number is too large");
    }

    #[tokio::test]
    async fn test_body_number_is_spoken() {
        let (status, json) = send(post_request(&serde_json::json!({ "number": 0 }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["spoken"], "zero");
    }

    #[tokio::test]
    async fn test_body_string_and_list_are_not_numbers() {
        for number in [serde_json::json!("100"), serde_json::json!([1])] {
            let (status, json) = send(post_request(&serde_json::json!({ "number": number }))).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["message"], "not a number");
        }
    }

    #[tokio::test]
    async fn test_path_integer_beyond_i64_is_out_of_range() {
        let (status, json) = send(get_request("/spoken/100000000000000000000")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["message"], "number is too large");
    }

    #[tokio::test]
    async fn test_body_integers_beyond_i64_keep_their_sign() {
        let huge: Value = serde_json::from_str(r#"{"number": 100000000000000000000}"#).unwrap();
        let (status, json) = send(post_request(&huge)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "out_of_range");

        let negative: Value =
            serde_json::from_str(r#"{"number": -100000000000000000000}"#).unwrap();
        let (status, json) = send(post_request(&negative)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "number must be non-negative");
    }
}
