use serde_json::{Map, Value};

use super::convert::FromJson;
use super::error::MappingError;
use super::record;

/// Unwrap one level of response nesting, returning the object
/// stored under the given namespace key
///
/// Most web API methods respond with `{"<namespace>": {...}}` where
/// the namespace is `"response"`, `"appnews"`, `"applist"` and so on
/// depending on the interface
pub fn nested<'a>(value: &'a Value, namespace: &str) -> Result<&'a Map<String, Value>, MappingError> {
    let object = record::as_object("<response root>", value)?;

    match object.get(namespace) {
        Some(value) => record::as_object(namespace, value),
        None => Err(MappingError::KeyMissing(namespace.to_string()))
    }
}

/// Unwrap the `{"<namespace>": {...}}` envelope and convert the
/// object inside into a record
pub fn object_of<T: FromJson>(value: &Value, namespace: &str) -> Result<T, MappingError> {
    let object = record::as_object("<response root>", value)?;

    match object.get(namespace) {
        Some(value) => T::from_json(namespace, value),
        None => Err(MappingError::KeyMissing(namespace.to_string()))
    }
}

/// Unwrap the `{"<namespace>": {"<key>": [...]}}` envelope and
/// convert every element of the array inside
///
/// One element which fails to convert fails the whole call.
/// Partial lists are never returned
pub fn list_of<T: FromJson>(value: &Value, namespace: &str, key: &str) -> Result<Vec<T>, MappingError> {
    let object = nested(value, namespace)?;
    let path = format!("{}.{}", namespace, key);

    match object.get(key) {
        Some(value) => Vec::<T>::from_json(&path, value),
        None => Err(MappingError::KeyMissing(path))
    }
}

/// Unwrap the store envelope, where the response is keyed by the
/// id it was requested for:
///
/// ```json
/// {"<id>": {"success": true, "data": {...}}}
/// ```
///
/// Returns `Ok(None)` when the response carries no entries at all,
/// or when the store reports `"success": false`. That is how it
/// says "no such app", which is an answer rather than an error
pub fn keyed_data<T: FromJson>(value: &Value) -> Result<Option<T>, MappingError> {
    let object = record::as_object("<response root>", value)?;

    let Some((id, entry)) = object.iter().next() else {
        return Ok(None);
    };

    let entry = record::as_object(id, entry)?;

    if !record::required::<bool>(entry, "success")? {
        return Ok(None);
    }

    let path = format!("{}.data", id);

    match entry.get("data") {
        Some(data) => T::from_json(&path, data).map(Some),
        None => Err(MappingError::KeyMissing(path))
    }
}

#[test]
fn test_keyed_data_failures() {
    use serde_json::json;

    assert_eq!(keyed_data::<String>(&json!({})), Ok(None));
    assert_eq!(keyed_data::<String>(&json!({"440": {"success": false}})), Ok(None));

    assert_eq!(
        keyed_data::<String>(&json!({"440": {"success": true}})),
        Err(MappingError::KeyMissing(String::from("440.data")))
    );
}
