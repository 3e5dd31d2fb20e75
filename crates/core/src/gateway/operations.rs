//! The Read, Create, Update and Delete operations.
//!
//! Each operation maps one parsed request onto one store call and always
//! answers with an envelope. Failures never escape as Rust errors.

use serde::Serialize;
use serde_json::Value;

use crate::item::{parse_read_query, parse_write_body, Item};
use crate::proxy::{self, ProxyRequest, ProxyResponse};
use crate::storage::{DeleteItemOutput, GetItemOutput, ItemStore, PutItemOutput, UpdateItemOutput};

use super::{gateway_error_to_status_code, GatewayError, Operation, StoreAction};

/// Runs `operation` against the store.
pub async fn dispatch(
    operation: Operation,
    store: &dyn ItemStore,
    request: &ProxyRequest,
) -> ProxyResponse {
    match operation {
        Operation::Read => read(store, request).await,
        Operation::Create => create(store, request).await,
        Operation::Update => update(store, request).await,
        Operation::Delete => delete(store, request).await,
    }
}

/// Reads one item. Keys come from the query string.
///
/// A missing item is a 200 with an empty payload, not an error.
pub async fn read(store: &dyn ItemStore, request: &ProxyRequest) -> ProxyResponse {
    tracing::debug!(request = ?request, "Read event");
    respond(Operation::Read, read_impl(store, request).await, 200)
}

async fn read_impl(
    store: &dyn ItemStore,
    request: &ProxyRequest,
) -> Result<GetItemOutput, GatewayError> {
    let key = parse_read_query(request.query_string_parameters.as_ref())?;
    let item = store
        .get(&key)
        .await
        .map_err(|e| GatewayError::store(StoreAction::Read, e))?;

    tracing::info!(
        year = key.year,
        title = %key.title,
        found = item.is_some(),
        "GetItem succeeded"
    );
    Ok(GetItemOutput { item })
}

/// Creates one item, overwriting any item with the same key.
pub async fn create(store: &dyn ItemStore, request: &ProxyRequest) -> ProxyResponse {
    tracing::debug!(request = ?request, "Create event");
    respond(Operation::Create, create_impl(store, request).await, 201)
}

async fn create_impl(
    store: &dyn ItemStore,
    request: &ProxyRequest,
) -> Result<PutItemOutput, GatewayError> {
    let payload = parse_write_body(request.body.as_deref())?;
    let item = Item::new(payload.key).with_info(payload.info);

    store
        .put(&item)
        .await
        .map_err(|e| GatewayError::store(StoreAction::Add, e))?;

    tracing::info!(year = item.year, title = %item.title, "Added movie");
    Ok(PutItemOutput {})
}

/// Sets the `info` attribute of one item.
///
/// A missing `info` clears the stored value to `{}` instead of leaving it
/// untouched.
pub async fn update(store: &dyn ItemStore, request: &ProxyRequest) -> ProxyResponse {
    tracing::debug!(request = ?request, "Update event");
    respond(Operation::Update, update_impl(store, request).await, 200)
}

async fn update_impl(
    store: &dyn ItemStore,
    request: &ProxyRequest,
) -> Result<UpdateItemOutput, GatewayError> {
    let payload = parse_write_body(request.body.as_deref())?;
    let info = payload
        .info
        .unwrap_or_else(|| Value::Object(Default::default()));

    let attributes = store
        .update_info(&payload.key, info)
        .await
        .map_err(|e| GatewayError::store(StoreAction::Update, e))?;

    tracing::info!(year = payload.key.year, title = %payload.key.title, "Updated item");
    Ok(UpdateItemOutput { attributes })
}

/// Deletes one item. An `info` field in the body is accepted and ignored.
pub async fn delete(store: &dyn ItemStore, request: &ProxyRequest) -> ProxyResponse {
    tracing::debug!(request = ?request, "Delete event");
    respond(Operation::Delete, delete_impl(store, request).await, 200)
}

async fn delete_impl(
    store: &dyn ItemStore,
    request: &ProxyRequest,
) -> Result<DeleteItemOutput, GatewayError> {
    let payload = parse_write_body(request.body.as_deref())?;

    store
        .delete(&payload.key)
        .await
        .map_err(|e| GatewayError::store(StoreAction::Delete, e))?;

    tracing::info!(year = payload.key.year, title = %payload.key.title, "Deleted item");
    Ok(DeleteItemOutput {})
}

fn respond<T: Serialize>(
    operation: Operation,
    result: Result<T, GatewayError>,
    status_code: u16,
) -> ProxyResponse {
    match result {
        Ok(payload) => proxy::success(status_code, &payload),
        Err(err) => {
            let status_code = gateway_error_to_status_code(&err);
            let message = err.to_string();
            if status_code >= 500 {
                tracing::error!(%operation, status_code, error = %message, "Store error");
            } else {
                tracing::warn!(%operation, status_code, error = %message, "Invalid request");
            }
            proxy::error(status_code, message)
        }
    }
}
