use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by an item store backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Missing required parameter in input: TableName")]
    TableNotConfigured,
    #[error("One or more parameter values were invalid: {0}")]
    Validation(String),
    #[error("Requested resource not found: {0}")]
    TableNotFound(String),
    #[error("Throughput exceeded: {0}")]
    Throttled(String),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Service error: {0}")]
    Service(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// A stable machine-readable name for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::TableNotConfigured => "MissingRequiredParameter",
            StoreError::Validation(_) => "ValidationException",
            StoreError::TableNotFound(_) => "ResourceNotFoundException",
            StoreError::Throttled(_) => "ProvisionedThroughputExceededException",
            StoreError::Connection(_) => "NetworkingError",
            StoreError::Service(_) => "InternalServerError",
            StoreError::Serialization(_) => "SerializationException",
        }
    }

    /// Whether the store client considers the failure transient.
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            StoreError::Throttled(_) | StoreError::Connection(_) | StoreError::Service(_)
        )
    }

    /// The structured detail embedded in 500 error messages.
    pub fn detail(&self) -> StoreErrorDetail {
        StoreErrorDetail {
            code: self.code().to_string(),
            message: self.to_string(),
            retryable: self.retryable(),
        }
    }

    /// The detail rendered as pretty-printed JSON.
    pub fn detail_json(&self) -> String {
        serde_json::to_string_pretty(&self.detail()).unwrap_or_else(|_| self.to_string())
    }
}

/// Serializable view of a [`StoreError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreErrorDetail {
    pub code: String,
    pub message: String,
    pub retryable: bool,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_not_configured_display() {
        assert_eq!(
            StoreError::TableNotConfigured.to_string(),
            "Missing required parameter in input: TableName"
        );
    }

    #[test]
    fn test_codes_and_retryable() {
        let throttled = StoreError::Throttled("slow down".to_string());
        assert_eq!(throttled.code(), "ProvisionedThroughputExceededException");
        assert!(throttled.retryable());

        let invalid = StoreError::Validation("empty key".to_string());
        assert_eq!(invalid.code(), "ValidationException");
        assert!(!invalid.retryable());
    }

    #[test]
    fn test_detail_json_roundtrip() {
        let error = StoreError::TableNotFound("movies".to_string());

        let detail: StoreErrorDetail = serde_json::from_str(&error.detail_json()).unwrap();

        assert_eq!(detail.code, "ResourceNotFoundException");
        assert_eq!(detail.message, "Requested resource not found: movies");
        assert!(!detail.retryable);
    }
}
