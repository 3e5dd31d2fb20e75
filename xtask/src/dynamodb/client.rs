//! AWS SDK client setup (Imperative Shell).

use super::config::{AttributeType, KeyAttribute};
use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus};
use aws_sdk_dynamodb::error::ProvideErrorMetadata;
use aws_sdk_dynamodb::types::{KeyType, ScalarAttributeType, TableDescription};
use aws_sdk_dynamodb::Client;

/// AWS client configuration.
#[derive(Debug, Clone)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}

impl AwsConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &AwsConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

/// Fetches current table state, returns None if table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => match response.table() {
            Some(table) => Ok(Some(table_state(table))),
            None => Err(DynamodbError::AwsSdk(format!(
                "DescribeTable returned no description for '{}'",
                table_name
            ))),
        },
        Err(err) if err.code() == Some("ResourceNotFoundException") => Ok(None),
        Err(err) => Err(DynamodbError::AwsSdk(err.to_string())),
    }
}

fn table_state(table: &TableDescription) -> TableState {
    let status = match table.table_status() {
        Some(aws_sdk_dynamodb::types::TableStatus::Creating) => TableStatus::Creating,
        Some(aws_sdk_dynamodb::types::TableStatus::Updating) => TableStatus::Updating,
        Some(aws_sdk_dynamodb::types::TableStatus::Deleting) => TableStatus::Deleting,
        _ => TableStatus::Active,
    };

    let key_for = |key_type: KeyType| {
        let name = table
            .key_schema()
            .iter()
            .find(|element| element.key_type() == &key_type)
            .map(|element| element.attribute_name())?;

        let attribute_type = table
            .attribute_definitions()
            .iter()
            .find(|definition| definition.attribute_name() == name)
            .and_then(|definition| match definition.attribute_type() {
                ScalarAttributeType::N => Some(AttributeType::Number),
                ScalarAttributeType::S => Some(AttributeType::String),
                _ => None,
            })?;

        Some(KeyAttribute {
            name: name.to_string(),
            attribute_type,
        })
    };

    TableState {
        status,
        partition_key: key_for(KeyType::Hash),
        sort_key: key_for(KeyType::Range),
    }
}
