//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! items. The schema-less `info` payload goes through `serde_dynamo`.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;

use itemgate_core::item::{Item, ItemKey};
use itemgate_core::storage::{StoreError, UpdatedAttributes};

use super::keys::{self, INFO, TITLE, YEAR};

/// Convert an Item to a DynamoDB item. `info` is only written when present.
pub fn item_to_attributes(item: &Item) -> Result<HashMap<String, AttributeValue>, StoreError> {
    let mut attributes = keys::key_attributes(&item.key());

    if let Some(info) = &item.info {
        attributes.insert(INFO.to_string(), json_to_attribute(info)?);
    }

    Ok(attributes)
}

/// Convert a DynamoDB item to an Item.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, StoreError> {
    let key = ItemKey {
        year: get_year(attributes)?,
        title: get_string(attributes, TITLE)?,
    };
    let info = attributes
        .get(INFO)
        .map(|value| attribute_to_json(value.clone()))
        .transpose()?;

    Ok(Item::new(key).with_info(info))
}

/// Convert an arbitrary JSON value to an AttributeValue.
pub fn json_to_attribute(value: &Value) -> Result<AttributeValue, StoreError> {
    serde_dynamo::to_attribute_value(value)
        .map_err(|e| StoreError::Serialization(format!("Invalid info attribute: {e}")))
}

/// Convert an AttributeValue back to JSON.
pub fn attribute_to_json(value: AttributeValue) -> Result<Value, StoreError> {
    serde_dynamo::from_attribute_value(value)
        .map_err(|e| StoreError::Serialization(format!("Unreadable info attribute: {e}")))
}

/// Reads the new `info` from UpdateItem's returned attributes.
///
/// When DynamoDB returns nothing for `info`, the value that was sent is
/// the value now stored.
pub fn updated_attributes(
    returned: Option<HashMap<String, AttributeValue>>,
    sent: Value,
) -> Result<UpdatedAttributes, StoreError> {
    let info = returned
        .and_then(|mut attributes| attributes.remove(INFO))
        .map(attribute_to_json)
        .transpose()?;

    Ok(UpdatedAttributes {
        info: info.unwrap_or(sent),
    })
}

fn get_year(attributes: &HashMap<String, AttributeValue>) -> Result<i64, StoreError> {
    let raw = attributes
        .get(YEAR)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| StoreError::Serialization(format!("Missing or invalid field: {YEAR}")))?;

    raw.parse::<i64>()
        .map_err(|e| StoreError::Serialization(format!("Invalid number {YEAR}: {e}")))
}

fn get_string(
    attributes: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, StoreError> {
    attributes
        .get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::Serialization(format!("Missing or invalid field: {key}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_item() -> Item {
        Item::new(ItemKey::new(2014, "Interstellar")).with_info(Some(json!({
            "rating": 8.6,
            "directors": ["Christopher Nolan"],
            "plot": "A team of explorers travel through a wormhole in space.",
            "released": true
        })))
    }

    #[test]
    fn test_item_to_attributes_writes_typed_keys() {
        let attributes = item_to_attributes(&sample_item()).unwrap();

        assert_eq!(
            attributes.get("year"),
            Some(&AttributeValue::N("2014".to_string()))
        );
        assert_eq!(
            attributes.get("title"),
            Some(&AttributeValue::S("Interstellar".to_string()))
        );
        assert!(matches!(attributes.get("info"), Some(AttributeValue::M(_))));
    }

    #[test]
    fn test_item_without_info_has_no_info_attribute() {
        let item = Item::new(ItemKey::new(1982, "Blade Runner"));

        let attributes = item_to_attributes(&item).unwrap();

        assert_eq!(attributes.len(), 2);
        assert!(!attributes.contains_key("info"));
    }

    #[test]
    fn test_attributes_roundtrip_preserves_info() {
        let item = sample_item();

        let restored = attributes_to_item(&item_to_attributes(&item).unwrap()).unwrap();

        assert_eq!(restored, item);
    }

    #[test]
    fn test_empty_info_object_is_kept() {
        let attribute = json_to_attribute(&json!({})).unwrap();

        assert_eq!(attribute, AttributeValue::M(HashMap::new()));
        assert_eq!(attribute_to_json(attribute).unwrap(), json!({}));
    }

    #[test]
    fn test_updated_attributes_reads_returned_info() {
        let returned = HashMap::from([(
            "info".to_string(),
            json_to_attribute(&json!({"rating": 9})).unwrap(),
        )]);

        let updated = updated_attributes(Some(returned), json!({"rating": 1})).unwrap();

        assert_eq!(updated.info, json!({"rating": 9}));
    }

    #[test]
    fn test_updated_attributes_falls_back_to_sent_info() {
        let sent = json!({"plot": "Red pill"});

        assert_eq!(
            updated_attributes(None, sent.clone()).unwrap().info,
            sent
        );
        assert_eq!(
            updated_attributes(Some(HashMap::new()), sent.clone())
                .unwrap()
                .info,
            sent
        );
    }

    #[test]
    fn test_missing_title_is_error() {
        let attributes =
            HashMap::from([("year".to_string(), AttributeValue::N("2014".to_string()))]);

        let result = attributes_to_item(&attributes);

        assert_eq!(
            result,
            Err(StoreError::Serialization(
                "Missing or invalid field: title".to_string()
            ))
        );
    }

    #[test]
    fn test_non_integer_year_is_error() {
        let attributes = HashMap::from([
            ("year".to_string(), AttributeValue::N("2014.5".to_string())),
            ("title".to_string(), AttributeValue::S("Interstellar".to_string())),
        ]);

        assert!(matches!(
            attributes_to_item(&attributes),
            Err(StoreError::Serialization(_))
        ));
    }
}
