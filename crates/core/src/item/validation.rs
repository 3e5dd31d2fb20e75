//! Key validation and coercion.
//!
//! Presence is checked before shape: a request missing both keys is always
//! rejected for its year first.

use serde_json::Value;

use super::error::ValidationError;
use super::types::ItemKey;

/// Validates that both key fields are present and coerces them into an
/// [`ItemKey`].
///
/// Absence means a missing field or a JSON `null`. Empty strings are present.
pub fn validate_keys(
    year: Option<&Value>,
    title: Option<&Value>,
) -> Result<ItemKey, ValidationError> {
    let year = year
        .filter(|value| !value.is_null())
        .ok_or(ValidationError::MissingYear)?;
    let title = title
        .filter(|value| !value.is_null())
        .ok_or(ValidationError::MissingTitle)?;

    Ok(ItemKey {
        year: coerce_year(year)?,
        title: coerce_title(title)?,
    })
}

/// Coerces a year value into an integer.
///
/// Accepts integral JSON numbers and strings that parse fully as an integer
/// once surrounding whitespace is trimmed.
pub fn coerce_year(value: &Value) -> Result<i64, ValidationError> {
    match value {
        Value::Number(number) => {
            if let Some(year) = number.as_i64() {
                return Ok(year);
            }
            match number.as_f64() {
                Some(year)
                    if year.fract() == 0.0 && year >= i64::MIN as f64 && year < i64::MAX as f64 =>
                {
                    Ok(year as i64)
                }
                _ => Err(ValidationError::InvalidYear),
            }
        }
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidYear),
        _ => Err(ValidationError::InvalidYear),
    }
}

/// Coerces a title value into a string.
///
/// Scalars other than strings are rendered as their JSON text.
pub fn coerce_title(value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Err(ValidationError::MissingTitle),
        Value::Array(_) | Value::Object(_) => Err(ValidationError::InvalidTitle),
    }
}
