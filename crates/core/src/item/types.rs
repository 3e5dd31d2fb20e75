use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The composite primary key of an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub year: i64,
    pub title: String,
}

impl ItemKey {
    pub fn new(year: i64, title: impl Into<String>) -> Self {
        Self {
            year,
            title: title.into(),
        }
    }
}

/// A stored movie item.
///
/// `info` is schema-less. It is omitted from the wire shape when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub year: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,
}

impl Item {
    /// Creates an item without an `info` payload.
    pub fn new(key: ItemKey) -> Self {
        Self {
            year: key.year,
            title: key.title,
            info: None,
        }
    }

    /// Attaches an `info` payload. A JSON `null` is treated as absent.
    pub fn with_info(mut self, info: Option<Value>) -> Self {
        self.info = info.filter(|value| !value.is_null());
        self
    }

    /// Returns the composite key of this item.
    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.year, self.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_serializes_without_info() {
        let item = Item::new(ItemKey::new(2014, "Interstellar"));

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json, json!({"year": 2014, "title": "Interstellar"}));
    }

    #[test]
    fn test_item_serializes_with_info() {
        let item = Item::new(ItemKey::new(2014, "Interstellar"))
            .with_info(Some(json!({"rating": 8.6})));

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            json!({"year": 2014, "title": "Interstellar", "info": {"rating": 8.6}})
        );
    }

    #[test]
    fn test_null_info_is_dropped() {
        let item = Item::new(ItemKey::new(1999, "The Matrix")).with_info(Some(Value::Null));

        assert_eq!(item.info, None);
    }

    #[test]
    fn test_key_roundtrip() {
        let key = ItemKey::new(1977, "Star Wars");
        let item = Item::new(key.clone());

        assert_eq!(item.key(), key);
    }
}
