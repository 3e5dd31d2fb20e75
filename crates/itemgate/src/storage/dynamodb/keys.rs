//! Attribute names of the item table.
//!
//! The table is keyed by `year` (number, partition key) and `title`
//! (string, sort key). The free-form payload lives in `info`.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use itemgate_core::item::ItemKey;

pub const YEAR: &str = "year";
pub const TITLE: &str = "title";
pub const INFO: &str = "info";

/// Update expression setting the `info` attribute.
pub const SET_INFO_EXPRESSION: &str = "set #a = :x";
pub const SET_INFO_NAME: &str = "#a";
pub const SET_INFO_VALUE: &str = ":x";

/// Builds the primary key attribute map for `key`.
pub fn key_attributes(key: &ItemKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (YEAR.to_string(), AttributeValue::N(key.year.to_string())),
        (TITLE.to_string(), AttributeValue::S(key.title.clone())),
    ])
}
