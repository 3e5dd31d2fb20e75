//! Proxy event handling for the Lambda entry point.
//!
//! Kept free of `lambda_runtime` so the routing runs under plain tests.

use itemgate_core::gateway::{self, resolve_operation, Operation};
use itemgate_core::proxy::{self, ProxyRequest, ProxyResponse};

use crate::state::AppState;

/// Routes one proxy event and answers with its envelope.
///
/// A configured operation wins over the event's `httpMethod`. Events that
/// cannot be routed get a 400 envelope.
pub async fn handle(
    state: &AppState,
    configured: Option<Operation>,
    request: ProxyRequest,
) -> ProxyResponse {
    match resolve_operation(configured, &request) {
        Ok(operation) => gateway::dispatch(operation, state.store.as_ref(), &request).await,
        Err(err) => {
            tracing::warn!(error = %err, "Cannot route proxy event");
            proxy::error(400, err.to_string())
        }
    }
}
