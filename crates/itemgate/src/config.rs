use std::env;

/// Default AWS region for the DynamoDB client.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Application configuration loaded from environment variables.
///
/// Read once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the item table. Not validated: a missing name only surfaces
    /// as a store error on the first call.
    pub table_name: Option<String>,
    /// AWS region (default: "us-east-1").
    pub region: String,
    /// Custom endpoint URL, for local DynamoDB.
    /// Only used by the `dynamodb` backend.
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - Item table name (no default)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("TABLE_NAME").filter(|name| !name.is_empty()),
            region: lookup("AWS_REGION")
                .filter(|region| !region.is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|url| !url.is_empty()),
        }
    }

    /// Returns a display string for the configured table.
    pub fn table_display(&self) -> &str {
        self.table_name.as_deref().unwrap_or("<unset>")
    }
}
