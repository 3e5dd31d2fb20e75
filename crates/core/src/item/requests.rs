//! Parsing of raw proxy inputs into validated requests.

use std::collections::HashMap;

use serde_json::Value;

use super::error::ValidationError;
use super::types::ItemKey;
use super::validation::validate_keys;

/// A validated write request (create, update or delete).
#[derive(Debug, Clone, PartialEq)]
pub struct WriteRequest {
    pub key: ItemKey,
    /// The `info` payload, `None` when missing or JSON `null`.
    pub info: Option<Value>,
}

/// Extracts and validates the key from query string parameters.
///
/// Missing parameters (or no parameters at all) fail key validation.
pub fn parse_read_query(
    params: Option<&HashMap<String, String>>,
) -> Result<ItemKey, ValidationError> {
    let year = params
        .and_then(|p| p.get("year"))
        .map(|year| Value::String(year.clone()));
    let title = params
        .and_then(|p| p.get("title"))
        .map(|title| Value::String(title.clone()));

    validate_keys(year.as_ref(), title.as_ref())
}

/// Parses a JSON request body and validates its key fields.
///
/// The body check runs before key validation: an absent or blank body, or
/// the JSON literal `null`, is a missing body.
pub fn parse_write_body(body: Option<&str>) -> Result<WriteRequest, ValidationError> {
    let text = body
        .filter(|text| !text.trim().is_empty())
        .ok_or(ValidationError::MissingBody)?;

    let value: Value = serde_json::from_str(text).map_err(|_| ValidationError::MalformedBody)?;
    if value.is_null() {
        return Err(ValidationError::MissingBody);
    }

    let fields = value.as_object();
    let key = validate_keys(
        fields.and_then(|f| f.get("year")),
        fields.and_then(|f| f.get("title")),
    )?;
    let info = fields
        .and_then(|f| f.get("info"))
        .filter(|info| !info.is_null())
        .cloned();

    Ok(WriteRequest { key, info })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_read_query_parses_year() {
        let query = params(&[("year", "2014"), ("title", "Interstellar")]);

        let key = parse_read_query(Some(&query)).unwrap();

        assert_eq!(key, ItemKey::new(2014, "Interstellar"));
    }

    #[test]
    fn test_read_without_query_is_missing_year() {
        assert_eq!(parse_read_query(None), Err(ValidationError::MissingYear));
    }

    #[test]
    fn test_read_without_title() {
        let query = params(&[("year", "2014")]);

        assert_eq!(
            parse_read_query(Some(&query)),
            Err(ValidationError::MissingTitle)
        );
    }

    #[test]
    fn test_read_with_non_numeric_year() {
        let query = params(&[("year", "soon"), ("title", "Dune")]);

        assert_eq!(
            parse_read_query(Some(&query)),
            Err(ValidationError::InvalidYear)
        );
    }

    #[test]
    fn test_write_body_with_info() {
        let body = r#"{"year": 2014, "title": "Interstellar", "info": {"rating": 8.6}}"#;

        let request = parse_write_body(Some(body)).unwrap();

        assert_eq!(request.key, ItemKey::new(2014, "Interstellar"));
        assert_eq!(request.info, Some(json!({"rating": 8.6})));
    }

    #[test]
    fn test_write_body_with_string_year() {
        let body = r#"{"year": "2010", "title": "Inception"}"#;

        let request = parse_write_body(Some(body)).unwrap();

        assert_eq!(request.key, ItemKey::new(2010, "Inception"));
        assert_eq!(request.info, None);
    }

    #[test]
    fn test_write_body_null_info_is_absent() {
        let body = r#"{"year": 2010, "title": "Inception", "info": null}"#;

        let request = parse_write_body(Some(body)).unwrap();

        assert_eq!(request.info, None);
    }

    #[test]
    fn test_missing_body_fails_before_keys() {
        assert_eq!(parse_write_body(None), Err(ValidationError::MissingBody));
        assert_eq!(parse_write_body(Some("  ")), Err(ValidationError::MissingBody));
        assert_eq!(parse_write_body(Some("null")), Err(ValidationError::MissingBody));
    }

    #[test]
    fn test_malformed_body() {
        assert_eq!(
            parse_write_body(Some("{year: 2014")),
            Err(ValidationError::MalformedBody)
        );
    }

    #[test]
    fn test_body_without_keys() {
        assert_eq!(
            parse_write_body(Some("{}")),
            Err(ValidationError::MissingYear)
        );
        assert_eq!(
            parse_write_body(Some(r#"{"year": 2014}"#)),
            Err(ValidationError::MissingTitle)
        );
    }

    #[test]
    fn test_non_object_body_has_no_keys() {
        assert_eq!(
            parse_write_body(Some("[1, 2]")),
            Err(ValidationError::MissingYear)
        );
    }
}
