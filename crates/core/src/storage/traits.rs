use async_trait::async_trait;
use serde_json::Value;

use crate::item::{Item, ItemKey};

use super::{Result, UpdatedAttributes};

/// A key-value table addressed by the `(year, title)` composite key.
///
/// Every method is a single, unconditional, key-level operation.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Gets an item by its key. A missing item is `Ok(None)`.
    async fn get(&self, key: &ItemKey) -> Result<Option<Item>>;

    /// Writes a whole item, overwriting any item with the same key.
    async fn put(&self, item: &Item) -> Result<()>;

    /// Sets the `info` attribute of the item at `key`, creating the key if
    /// it does not exist. Returns the new value of the updated attribute.
    async fn update_info(&self, key: &ItemKey, info: Value) -> Result<UpdatedAttributes>;

    /// Deletes the item at `key`. Deleting a missing key succeeds.
    async fn delete(&self, key: &ItemKey) -> Result<()>;
}
