//! Pure mapping from gateway errors to HTTP status codes.

use super::GatewayError;

/// Maps a [`GatewayError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `Store` -> 500 (Internal Server Error), whatever the store reported
///
/// # Examples
///
/// ```
/// use itemgate_core::gateway::{gateway_error_to_status_code, GatewayError};
/// use itemgate_core::item::ValidationError;
///
/// let error = GatewayError::from(ValidationError::MissingYear);
/// assert_eq!(gateway_error_to_status_code(&error), 400);
/// ```
pub fn gateway_error_to_status_code(error: &GatewayError) -> u16 {
    match error {
        GatewayError::Validation(_) => 400,
        GatewayError::Store { .. } => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::StoreAction;
    use crate::item::ValidationError;
    use crate::storage::StoreError;

    #[test]
    fn test_validation_maps_to_400() {
        let error = GatewayError::from(ValidationError::MissingBody);
        assert_eq!(gateway_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_store_errors_map_to_500() {
        for source in [
            StoreError::TableNotConfigured,
            StoreError::Validation("empty key".to_string()),
            StoreError::Connection("refused".to_string()),
        ] {
            let error = GatewayError::store(StoreAction::Read, source);
            assert_eq!(gateway_error_to_status_code(&error), 500);
        }
    }
}
