//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `itemgate_core::storage`.

use std::error::Error as _;
use std::fmt::{Debug, Display};

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use itemgate_core::storage::StoreError;

/// Map a GetItem SDK error to StoreError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> StoreError {
    map_transport_error("GetItem", &err)
        .unwrap_or_else(|| map_service_error("GetItem", &err.into_service_error()))
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    map_transport_error("PutItem", &err)
        .unwrap_or_else(|| map_service_error("PutItem", &err.into_service_error()))
}

/// Map an UpdateItem SDK error to StoreError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
) -> StoreError {
    map_transport_error("UpdateItem", &err)
        .unwrap_or_else(|| map_service_error("UpdateItem", &err.into_service_error()))
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> StoreError {
    map_transport_error("DeleteItem", &err)
        .unwrap_or_else(|| map_service_error("DeleteItem", &err.into_service_error()))
}

/// Failures that happen before DynamoDB answered.
fn map_transport_error<E, R>(operation: &str, err: &SdkError<E, R>) -> Option<StoreError>
where
    E: std::error::Error + 'static,
    R: Debug,
{
    let describe = || match err.source() {
        Some(source) => format!("{operation} failed: {err}: {source}"),
        None => format!("{operation} failed: {err}"),
    };

    match err {
        SdkError::ConstructionFailure(_) => Some(StoreError::Validation(describe())),
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
            Some(StoreError::Connection(describe()))
        }
        _ => None,
    }
}

/// Classify a service error by its DynamoDB error code.
fn map_service_error<E>(operation: &str, err: &E) -> StoreError
where
    E: ProvideErrorMetadata + Display,
{
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string());

    classify(operation, err.code(), message)
}

fn classify(operation: &str, code: Option<&str>, message: String) -> StoreError {
    match code {
        Some("ValidationException") | Some("SerializationException") => {
            StoreError::Validation(message)
        }
        Some("ResourceNotFoundException") => StoreError::TableNotFound(message),
        Some("ProvisionedThroughputExceededException")
        | Some("RequestLimitExceeded")
        | Some("ThrottlingException") => StoreError::Throttled(message),
        Some("InternalServerError") | Some("ServiceUnavailable") => StoreError::Service(message),
        Some(code) => StoreError::Service(format!("{operation} failed ({code}): {message}")),
        None => StoreError::Service(format!("{operation} failed: {message}")),
    }
}
