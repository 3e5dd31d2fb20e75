//! The four gateway operations and their dispatch.

mod error;
mod http_mapping;
mod operations;

use std::{fmt, str::FromStr};

use crate::item::ValidationError;
use crate::proxy::ProxyRequest;

pub use error::{GatewayError, StoreAction};
pub use http_mapping::gateway_error_to_status_code;
pub use operations::{create, delete, dispatch, read, update};

/// One of the four gateway operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Maps an HTTP method to the operation it invokes.
    pub fn from_http_method(method: &str) -> Option<Self> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Some(Operation::Read),
            "POST" => Some(Operation::Create),
            "PUT" => Some(Operation::Update),
            "DELETE" => Some(Operation::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Read => "read",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the operation for a proxy request.
///
/// A configured operation wins; otherwise the request's HTTP method decides.
pub fn resolve_operation(
    configured: Option<Operation>,
    request: &ProxyRequest,
) -> Result<Operation, ValidationError> {
    if let Some(operation) = configured {
        return Ok(operation);
    }

    let method = request.http_method.as_deref().unwrap_or_default();
    Operation::from_http_method(method)
        .ok_or_else(|| ValidationError::UnsupportedMethod(method.to_string()))
}

/// Error returned when parsing an unknown operation name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown operation: {0} (expected read, create, update or delete)")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "read" => Ok(Operation::Read),
            "create" => Ok(Operation::Create),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            _ => Err(UnknownOperation(s.to_string())),
        }
    }
}
