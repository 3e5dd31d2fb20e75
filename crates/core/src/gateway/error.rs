use std::fmt;

use thiserror::Error;

use crate::item::ValidationError;
use crate::storage::StoreError;

/// The store call that failed, as named in the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Read,
    Add,
    Update,
    Delete,
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            StoreAction::Read => "read",
            StoreAction::Add => "add",
            StoreAction::Update => "update",
            StoreAction::Delete => "delete",
        };
        f.write_str(verb)
    }
}

/// Failure of a gateway operation.
///
/// Both kinds share one wire `errorType`; they differ in status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Unable to {action} item. Error JSON:{}", .source.detail_json())]
    Store {
        action: StoreAction,
        source: StoreError,
    },
}

impl GatewayError {
    pub fn store(action: StoreAction, source: StoreError) -> Self {
        GatewayError::Store { action, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_transparent() {
        let error = GatewayError::from(ValidationError::MissingTitle);

        assert_eq!(error.to_string(), "Please provide the title of the movie.");
    }

    #[test]
    fn test_store_message_embeds_detail_json() {
        let error = GatewayError::store(
            StoreAction::Add,
            StoreError::Throttled("Rate of requests exceeds the allowed throughput".to_string()),
        );

        let message = error.to_string();

        assert!(message.starts_with("Unable to add item. Error JSON:{"));
        assert!(message.contains(r#""code": "ProvisionedThroughputExceededException""#));
        assert!(message.contains(r#""retryable": true"#));
    }
}
