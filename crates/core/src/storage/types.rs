//! Result payloads returned in success envelopes.
//!
//! The shapes mirror the DynamoDB document client output, so callers see the
//! same bodies regardless of the backend in use.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::item::Item;

/// Result of a read: `{"Item": {...}}`, or `{}` when nothing was found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetItemOutput {
    #[serde(rename = "Item", default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}

/// Result of a create: always `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutItemOutput {}

/// The attribute values changed by an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedAttributes {
    pub info: Value,
}

/// Result of an update: `{"Attributes": {"info": ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateItemOutput {
    #[serde(rename = "Attributes")]
    pub attributes: UpdatedAttributes,
}

/// Result of a delete: always `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteItemOutput {}
