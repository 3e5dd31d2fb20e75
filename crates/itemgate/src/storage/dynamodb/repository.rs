//! DynamoDB item store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;
use serde_json::Value;

use itemgate_core::item::{Item, ItemKey};
use itemgate_core::storage::{ItemStore, Result, StoreError, UpdatedAttributes};

use super::conversions::{
    attributes_to_item, item_to_attributes, json_to_attribute, updated_attributes,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_update_item_error,
};
use super::keys::{self, INFO, SET_INFO_EXPRESSION, SET_INFO_NAME, SET_INFO_VALUE};
use crate::config::Config;

/// DynamoDB-based item store.
///
/// Every call is a single unconditional item operation. Retries and timeouts
/// are left to the SDK client's defaults.
pub struct DynamoDbItemStore {
    client: Client,
    table_name: Option<String>,
}

impl DynamoDbItemStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: Option<String>) -> Self {
        Self { client, table_name }
    }

    /// Creates a new store from application configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region
    /// and optional custom endpoint.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// The configured table, or a store error when none was configured.
    fn table(&self) -> Result<&str> {
        self.table_name
            .as_deref()
            .ok_or(StoreError::TableNotConfigured)
    }
}

#[async_trait]
impl ItemStore for DynamoDbItemStore {
    async fn get(&self, key: &ItemKey) -> Result<Option<Item>> {
        let output = self
            .client
            .get_item()
            .table_name(self.table()?)
            .set_key(Some(keys::key_attributes(key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match output.item {
            Some(attributes) => Ok(Some(attributes_to_item(&attributes)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, item: &Item) -> Result<()> {
        let attributes = item_to_attributes(item)?;

        self.client
            .put_item()
            .table_name(self.table()?)
            .set_item(Some(attributes))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_info(&self, key: &ItemKey, info: Value) -> Result<UpdatedAttributes> {
        let output = self
            .client
            .update_item()
            .table_name(self.table()?)
            .set_key(Some(keys::key_attributes(key)))
            .update_expression(SET_INFO_EXPRESSION)
            .expression_attribute_names(SET_INFO_NAME, INFO)
            .expression_attribute_values(SET_INFO_VALUE, json_to_attribute(&info)?)
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(map_update_item_error)?;

        updated_attributes(output.attributes, info)
    }

    async fn delete(&self, key: &ItemKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(self.table()?)
            .set_key(Some(keys::key_attributes(key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
