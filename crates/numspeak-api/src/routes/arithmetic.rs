//! Routes for the Arithmetic context: sum/product calculation and the
//! manual entry form.

use std::net::SocketAddr;

use axum::extract::rejection::FormRejection;
use axum::extract::{ConnectInfo, Form, Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::{Json, Router, routing::get};
use numspeak_arithmetic::application::command_handlers;
use numspeak_arithmetic::domain::commands::RecordCalculation;
use numspeak_core::error::DomainError;
use serde::Deserialize;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Returned in place of a result when `values` is missing or invalid.
pub const SERVICE_DESCRIPTION: &str = "A web service that takes in a single parameter GET or POST* called
\"values\", which is a JSON-formatted list of numbers. The response is
a JSON dictionary with two values, the \"sum\" and the \"product\".";

/// HTML form for submitting `values` by POST.
pub const ENTRY_FORM: &str = r#"
<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Entry Form</title>
  </head>
  <body>
    <form method="POST" action="/">
      <label for="values">Enter a JSON-formatted list of numbers</label>
      <input type="text" name="values" value="">
      <input type="submit" value="Submit">
    </form>
  </body>
</html>
"#;

/// The `values` parameter, from the query string or a form body.
#[derive(Debug, Default, Deserialize)]
pub struct ValuesParams {
    /// JSON-formatted list of numbers.
    pub values: Option<String>,
}

/// GET /
#[instrument(skip_all, fields(caller = %caller))]
async fn calculate_from_query(
    State(state): State<AppState>,
    ConnectInfo(caller): ConnectInfo<SocketAddr>,
    Query(params): Query<ValuesParams>,
) -> Result<Response, ApiError> {
    calculate(&state, caller, params.values)
}

/// POST /
///
/// Form fields take precedence over the query string. A body that is not a
/// form falls back to the query string.
#[instrument(skip_all, fields(caller = %caller))]
async fn calculate_from_form(
    State(state): State<AppState>,
    ConnectInfo(caller): ConnectInfo<SocketAddr>,
    Query(query): Query<ValuesParams>,
    form: Result<Form<ValuesParams>, FormRejection>,
) -> Result<Response, ApiError> {
    let form_values = match form {
        Ok(Form(form)) => form.values,
        Err(rejection) => {
            debug!(%rejection, "no form body, using query string");
            None
        }
    };
    calculate(&state, caller, form_values.or(query.values))
}

fn calculate(
    state: &AppState,
    caller: SocketAddr,
    values: Option<String>,
) -> Result<Response, ApiError> {
    let Some(values) = values else {
        return Ok(Html(SERVICE_DESCRIPTION).into_response());
    };

    let command = RecordCalculation {
        correlation_id: Uuid::new_v4(),
        values,
        caller: caller.ip().to_string(),
    };

    info!(correlation_id = %command.correlation_id, "handling record_calculation command");

    match command_handlers::handle_record_calculation(
        &command,
        state.clock.as_ref(),
        state.history.as_ref(),
    ) {
        Ok(result) => Ok(Json(result).into_response()),
        Err(DomainError::Validation(reason)) => {
            debug!(correlation_id = %command.correlation_id, %reason, "values rejected");
            Ok(Html(SERVICE_DESCRIPTION).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /entry
async fn entry_form() -> Html<&'static str> {
    Html(ENTRY_FORM)
}

/// Returns the router for the arithmetic context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(calculate_from_query).post(calculate_from_form))
        .route("/entry", get(entry_form))
}
