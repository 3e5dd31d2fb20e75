//! In-memory item store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use itemgate_core::item::{Item, ItemKey};
use itemgate_core::storage::{ItemStore, Result, StoreError, UpdatedAttributes};

/// In-memory item store with the same semantics as the DynamoDB backend.
///
/// Empty string key attributes are rejected the way DynamoDB rejects them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemStore {
    items: Arc<RwLock<HashMap<ItemKey, Item>>>,
}

impl InMemoryItemStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

fn check_key(key: &ItemKey) -> Result<()> {
    if key.title.is_empty() {
        return Err(StoreError::Validation(
            "The AttributeValue for a key attribute cannot contain an empty string value. Key: title"
                .to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn get(&self, key: &ItemKey) -> Result<Option<Item>> {
        check_key(key)?;
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn put(&self, item: &Item) -> Result<()> {
        let key = item.key();
        check_key(&key)?;
        let mut items = self.items.write().await;
        items.insert(key, item.clone());
        Ok(())
    }

    async fn update_info(&self, key: &ItemKey, info: Value) -> Result<UpdatedAttributes> {
        check_key(key)?;
        let mut items = self.items.write().await;
        let item = items
            .entry(key.clone())
            .or_insert_with(|| Item::new(key.clone()));
        item.info = Some(info.clone());
        Ok(UpdatedAttributes { info })
    }

    async fn delete(&self, key: &ItemKey) -> Result<()> {
        check_key(key)?;
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }
}
