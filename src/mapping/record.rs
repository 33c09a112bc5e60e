use serde_json::{Map, Value};

use super::convert::{FromJson, FromJsonLenient};
use super::error::MappingError;

/// Expect the value to be a json object
pub fn as_object<'a>(key: &str, value: &'a Value) -> Result<&'a Map<String, Value>, MappingError> {
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(MappingError::mismatch(key, "object", value))
    }
}

/// Look up a field which must be present
pub fn required<T: FromJson>(object: &Map<String, Value>, key: &str) -> Result<T, MappingError> {
    match object.get(key) {
        Some(value) => T::from_json(key, value),
        None => Err(MappingError::KeyMissing(key.to_string()))
    }
}

/// Look up a field which may be absent. An explicit `null`
/// counts as absent as well
pub fn optional<T: FromJson>(object: &Map<String, Value>, key: &str) -> Result<Option<T>, MappingError> {
    match object.get(key) {
        Some(Value::Null) | None => Ok(None),
        Some(value) => T::from_json(key, value).map(Some)
    }
}

/// Look up a field which must be present, accepting the string
/// encoding of numbers
pub fn lenient<T: FromJsonLenient>(object: &Map<String, Value>, key: &str) -> Result<T, MappingError> {
    match object.get(key) {
        Some(value) => T::from_json_lenient(key, value),
        None => Err(MappingError::KeyMissing(key.to_string()))
    }
}

/// Look up a field which may be absent, accepting the string
/// encoding of numbers
pub fn lenient_optional<T: FromJsonLenient>(object: &Map<String, Value>, key: &str) -> Result<Option<T>, MappingError> {
    match object.get(key) {
        Some(Value::Null) | None => Ok(None),
        Some(value) => T::from_json_lenient(key, value).map(Some)
    }
}

/// Declare an API record together with its field mapping table
///
/// Every row names the field, its type, the lookup policy and the
/// external key the API sends it under:
///
/// - `required` - the key must be present, its value must match the type
/// - `optional` - absent or `null` becomes `None`
/// - `lenient` - like `required`, but a number may arrive as a string
/// - `lenient_optional` - like `optional`, with the same relaxation
///
/// The macro generates the struct itself and its [`FromJson`] and
/// [`ToJson`](crate::mapping::ToJson) implementations. Serialization
/// always emits the canonical encoding, so a lenient field read from
/// a string is written back as a number
///
/// ```
/// use steam_web_core::json_record;
/// use steam_web_core::mapping::FromJson;
///
/// json_record! {
///     pub struct Achievement {
///         name: String => required "apiname",
///         achieved: u8 => required "achieved",
///         unlock_time: Option<u64> => optional "unlocktime"
///     }
/// }
///
/// let value = serde_json::json!({
///     "apiname": "NEW_ACHIEVEMENT_1_0",
///     "achieved": 1
/// });
///
/// let achievement = Achievement::from_json("achievement", &value).unwrap();
///
/// assert_eq!(achievement.name, "NEW_ACHIEVEMENT_1_0");
/// assert_eq!(achievement.achieved, 1);
/// assert_eq!(achievement.unlock_time, None);
/// ```
#[macro_export]
macro_rules! json_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $policy:ident $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty
            ),*
        }

        impl $crate::mapping::FromJson for $name {
            fn from_json(key: &str, value: &$crate::serde_json::Value) -> Result<Self, $crate::mapping::MappingError> {
                let object = $crate::mapping::record::as_object(key, value)?;

                Ok(Self {
                    $(
                        $field: $crate::json_record!(@get $policy object, $key)?
                    ),*
                })
            }
        }

        impl $crate::mapping::ToJson for $name {
            fn to_json(&self) -> $crate::serde_json::Value {
                let mut object = $crate::serde_json::Map::new();

                $(
                    $crate::json_record!(@put $policy object, $key, &self.$field);
                )*

                $crate::serde_json::Value::Object(object)
            }
        }
    };

    (@get required $object:ident, $key:literal) => {
        $crate::mapping::record::required($object, $key)
    };

    (@get optional $object:ident, $key:literal) => {
        $crate::mapping::record::optional($object, $key)
    };

    (@get lenient $object:ident, $key:literal) => {
        $crate::mapping::record::lenient($object, $key)
    };

    (@get lenient_optional $object:ident, $key:literal) => {
        $crate::mapping::record::lenient_optional($object, $key)
    };

    (@put required $object:ident, $key:literal, $field:expr) => {
        $object.insert($key.to_string(), $crate::mapping::ToJson::to_json($field));
    };

    (@put optional $object:ident, $key:literal, $field:expr) => {
        if let Some(value) = $field {
            $object.insert($key.to_string(), $crate::mapping::ToJson::to_json(value));
        }
    };

    (@put lenient $object:ident, $key:literal, $field:expr) => {
        $object.insert($key.to_string(), $crate::mapping::ToJson::to_json($field));
    };

    (@put lenient_optional $object:ident, $key:literal, $field:expr) => {
        if let Some(value) = $field {
            $object.insert($key.to_string(), $crate::mapping::ToJson::to_json(value));
        }
    };
}

#[test]
fn test_field_policies() {
    use serde_json::json;

    let object = json!({
        "appid": 440,
        "dlc": "570",
        "website": null
    });

    let object = as_object("app", &object).unwrap();

    assert_eq!(required::<u32>(object, "appid"), Ok(440));
    assert_eq!(optional::<String>(object, "website"), Ok(None));
    assert_eq!(optional::<String>(object, "header_image"), Ok(None));
    assert_eq!(lenient::<u32>(object, "dlc"), Ok(570));

    assert_eq!(
        required::<u32>(object, "name"),
        Err(MappingError::KeyMissing(String::from("name")))
    );
}
