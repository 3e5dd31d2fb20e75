//! Application state shared by every request handler.
//!
//! Holds the process-wide store handle and configuration. Both are fixed at
//! startup and read-only afterwards.

use std::sync::Arc;

use itemgate_core::storage::ItemStore;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The item store backend.
    pub store: Arc<dyn ItemStore>,
    /// Startup configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates an AppState around an existing store.
    pub fn with_store(store: Arc<dyn ItemStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Name of the compiled-in storage backend.
    pub fn backend(&self) -> &'static str {
        BACKEND
    }
}

// ============================================================================
// Factory functions for the different backends
// ============================================================================

#[cfg(feature = "inmemory")]
const BACKEND: &str = "inmemory";

#[cfg(all(feature = "dynamodb", not(feature = "inmemory")))]
const BACKEND: &str = "dynamodb";

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryItemStore;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for local development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory storage, items are lost on restart");
            Ok(Self::with_store(
                Arc::new(InMemoryItemStore::new()),
                config.clone(),
            ))
        }
    }
}

#[cfg(all(feature = "dynamodb", not(feature = "inmemory")))]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbItemStore;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            if config.table_name.is_none() {
                tracing::warn!("TABLE_NAME is not set, store calls will fail");
            }
            let store = DynamoDbItemStore::from_config(config).await;
            Ok(Self::with_store(Arc::new(store), config.clone()))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
