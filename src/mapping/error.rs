use serde::{Serialize, Deserialize};
use serde_json::Value;
use thiserror::Error;

/// Name of a json value's kind, as it appears in error reports
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object"
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MappingError {
    /// A required field's external key is absent from the response object.
    /// Fatal to the whole record: partially filled records are never returned
    #[error("key '{0}' is missing from the response object")]
    KeyMissing(String),

    /// The value's json kind doesn't match the declared field type
    #[error("key '{key}': expected {expected}, got {found}")]
    TypeMismatch {
        key: String,
        expected: String,
        found: String
    },

    /// A number, or a string under the leniency rule, which can't be
    /// represented by the declared field type
    #[error("key '{key}': can't convert '{value}' into {expected}")]
    InvalidNumber {
        key: String,
        value: String,
        expected: String
    }
}

impl MappingError {
    pub fn mismatch(key: &str, expected: &str, found: &Value) -> Self {
        Self::TypeMismatch {
            key: key.to_string(),
            expected: expected.to_string(),
            found: kind_name(found).to_string()
        }
    }

    pub fn invalid_number<T: ToString>(key: &str, value: T, expected: &str) -> Self {
        Self::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
            expected: expected.to_string()
        }
    }
}
