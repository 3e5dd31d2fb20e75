//! Item handlers.
//!
//! Each handler turns the HTTP request into a `ProxyRequest`, runs the
//! matching gateway operation and renders the envelope as the response.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use itemgate_core::gateway::{self, Operation};
use itemgate_core::item::ValidationError;
use itemgate_core::proxy::{self, ProxyRequest, ProxyResponse};

use crate::state::AppState;

/// Renders an envelope as an HTTP response with a JSON body.
fn render(envelope: ProxyResponse) -> Response {
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        envelope.body,
    )
        .into_response()
}

fn query_request(params: HashMap<String, String>) -> ProxyRequest {
    ProxyRequest {
        http_method: Some("GET".to_string()),
        query_string_parameters: (!params.is_empty()).then_some(params),
        body: None,
    }
}

/// Builds a body-carrying request. A body that is not UTF-8 text cannot be
/// JSON, so it is answered with the malformed-body envelope.
fn body_request(method: &str, body: Bytes) -> Result<ProxyRequest, ProxyResponse> {
    let body = String::from_utf8(body.to_vec()).map_err(|err| {
        tracing::warn!(error = %err, "Request body is not valid UTF-8");
        proxy::error(400, ValidationError::MalformedBody.to_string())
    })?;

    Ok(ProxyRequest {
        http_method: Some(method.to_string()),
        query_string_parameters: None,
        body: Some(body),
    })
}

async fn run_with_body(
    state: &AppState,
    operation: Operation,
    method: &str,
    body: Bytes,
) -> Response {
    let envelope = match body_request(method, body) {
        Ok(request) => gateway::dispatch(operation, state.store.as_ref(), &request).await,
        Err(envelope) => envelope,
    };
    render(envelope)
}

/// Read an item (GET /items?year=..&title=..).
pub async fn read_item(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request = query_request(params);
    render(gateway::read(state.store.as_ref(), &request).await)
}

/// Create an item (POST /items).
pub async fn create_item(State(state): State<AppState>, body: Bytes) -> Response {
    run_with_body(&state, Operation::Create, "POST", body).await
}

/// Update an item's info (PUT /items).
pub async fn update_item(State(state): State<AppState>, body: Bytes) -> Response {
    run_with_body(&state, Operation::Update, "PUT", body).await
}

/// Delete an item (DELETE /items).
pub async fn delete_item(State(state): State<AppState>, body: Bytes) -> Response {
    run_with_body(&state, Operation::Delete, "DELETE", body).await
}

/// Run an operation on a raw proxy event (POST /invoke/{operation}).
///
/// The response body is the envelope itself, as a Lambda proxy integration
/// would receive it.
pub async fn invoke(
    State(state): State<AppState>,
    Path(operation): Path<String>,
    event: Result<Json<ProxyRequest>, JsonRejection>,
) -> Response {
    let envelope = match (operation.parse::<Operation>(), event) {
        (Ok(operation), Ok(Json(request))) => {
            gateway::dispatch(operation, state.store.as_ref(), &request).await
        }
        (Err(err), _) => {
            tracing::warn!(error = %err, "Unknown operation");
            proxy::error(404, err.to_string())
        }
        (_, Err(rejection)) => {
            tracing::warn!(error = %rejection, "Malformed proxy event");
            proxy::error(400, format!("Request malformed: {rejection}"))
        }
    };

    (StatusCode::OK, Json(envelope)).into_response()
}
