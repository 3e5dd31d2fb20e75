use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An HTTP-style proxy request.
///
/// Field names follow the API Gateway proxy event. Unknown fields are
/// ignored, so a complete proxy event deserializes into this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl ProxyRequest {
    /// Creates a request carrying only query string parameters.
    pub fn with_query<K, V>(params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            query_string_parameters: Some(
                params
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            ..Self::default()
        }
    }

    /// Creates a request carrying only a body.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    /// Sets the HTTP method.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.http_method = Some(method.into());
        self
    }
}

/// The uniform response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    /// JSON text of the result payload or of an [`ErrorBody`].
    pub body: String,
}

/// The JSON payload of every error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_type: String,
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_gateway_event() {
        let event = r#"{
            "resource": "/movies",
            "path": "/movies",
            "httpMethod": "GET",
            "headers": {"Accept": "application/json"},
            "queryStringParameters": {"year": "2014", "title": "Interstellar"},
            "requestContext": {"stage": "prod"},
            "body": null,
            "isBase64Encoded": false
        }"#;

        let request: ProxyRequest = serde_json::from_str(event).unwrap();

        assert_eq!(request.http_method.as_deref(), Some("GET"));
        let params = request.query_string_parameters.unwrap();
        assert_eq!(params.get("year").map(String::as_str), Some("2014"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_deserialize_minimal_event() {
        let request: ProxyRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request, ProxyRequest::default());
    }

    #[test]
    fn test_response_wire_shape() {
        let response = ProxyResponse {
            status_code: 201,
            body: "{}".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({"statusCode": 201, "body": "{}"}));
    }
}
