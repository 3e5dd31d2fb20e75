//! Response envelope builders.

use serde::Serialize;

use super::types::{ErrorBody, ProxyResponse};

/// The `errorType` reported for every failure, client or server.
pub const ERROR_TYPE: &str = "InvalidRequest";

/// Builds a success envelope whose body is the JSON encoding of `payload`.
///
/// A payload that fails to serialize is reported as a 500 error envelope.
pub fn success<T: Serialize + ?Sized>(status_code: u16, payload: &T) -> ProxyResponse {
    match serde_json::to_string(payload) {
        Ok(body) => ProxyResponse { status_code, body },
        Err(err) => error(500, format!("Unable to encode response: {err}")),
    }
}

/// Builds an error envelope with the constant `errorType`.
pub fn error(status_code: u16, message: impl Into<String>) -> ProxyResponse {
    let body = ErrorBody {
        error_type: ERROR_TYPE.to_string(),
        error_message: message.into(),
    };

    ProxyResponse {
        status_code,
        body: serde_json::to_string(&body).unwrap_or_default(),
    }
}
