//! In-memory storage backend.
//!
//! Stores items in a `HashMap` wrapped in `Arc<RwLock<_>>`. Data is not
//! persisted and is lost when the store is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use itemgate::storage::inmemory::InMemoryItemStore;
//!
//! let store = InMemoryItemStore::new();
//! ```

mod repository;

pub use repository::InMemoryItemStore;
