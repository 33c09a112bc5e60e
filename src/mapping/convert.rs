use serde_json::Value;

use super::error::MappingError;

/// Convert a json value into the declared field type
///
/// Implemented for the scalar types the API actually uses, for
/// `Vec<T>` of convertible elements, and by [`json_record!`](crate::json_record)
/// for every declared record. Asking for a conversion nobody
/// implemented is a compile error, not a runtime one.
///
/// `key` is the external key the value was found under. It doesn't
/// affect the conversion and only shows up in error reports
pub trait FromJson: Sized {
    fn from_json(key: &str, value: &Value) -> Result<Self, MappingError>;
}

/// Convert a field which should be a number, but is sometimes
/// encoded as a string with the number inside
///
/// The API is not consistent about these: steam ids, required ages,
/// genre ids and achievement percents all switch between the two
/// encodings depending on the endpoint and its version. The actual
/// kind is checked per value, at conversion time
pub trait FromJsonLenient: Sized {
    fn from_json_lenient(key: &str, value: &Value) -> Result<Self, MappingError>;
}

/// Convert a value back into the json representation the API uses
pub trait ToJson {
    fn to_json(&self) -> Value;
}

impl FromJson for bool {
    fn from_json(key: &str, value: &Value) -> Result<Self, MappingError> {
        match value {
            Value::Bool(value) => Ok(*value),
            _ => Err(MappingError::mismatch(key, "boolean", value))
        }
    }
}

impl ToJson for bool {
    #[inline]
    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromJson for String {
    fn from_json(key: &str, value: &Value) -> Result<Self, MappingError> {
        match value {
            Value::String(value) => Ok(value.clone()),
            _ => Err(MappingError::mismatch(key, "string", value))
        }
    }
}

impl FromJsonLenient for String {
    fn from_json_lenient(key: &str, value: &Value) -> Result<Self, MappingError> {
        match value {
            Value::String(value) => Ok(value.clone()),
            Value::Number(number) => Ok(number.to_string()),
            _ => Err(MappingError::mismatch(key, "string or number", value))
        }
    }
}

impl ToJson for String {
    #[inline]
    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

macro_rules! impl_from_json_uint {
    ($($ty:ty)+) => {
        $(
            impl FromJson for $ty {
                fn from_json(key: &str, value: &Value) -> Result<Self, MappingError> {
                    let Value::Number(number) = value else {
                        return Err(MappingError::mismatch(key, "number", value));
                    };

                    number.as_u64()
                        .and_then(|number| <$ty>::try_from(number).ok())
                        .ok_or_else(|| MappingError::invalid_number(key, number, stringify!($ty)))
                }
            }

            impl FromJsonLenient for $ty {
                fn from_json_lenient(key: &str, value: &Value) -> Result<Self, MappingError> {
                    match value {
                        Value::String(string) => string.parse::<$ty>()
                            .map_err(|_| MappingError::invalid_number(key, string, stringify!($ty))),

                        _ => <$ty>::from_json(key, value)
                    }
                }
            }

            impl ToJson for $ty {
                #[inline]
                fn to_json(&self) -> Value {
                    Value::from(*self)
                }
            }
        )+
    };
}

macro_rules! impl_from_json_int {
    ($($ty:ty)+) => {
        $(
            impl FromJson for $ty {
                fn from_json(key: &str, value: &Value) -> Result<Self, MappingError> {
                    let Value::Number(number) = value else {
                        return Err(MappingError::mismatch(key, "number", value));
                    };

                    number.as_i64()
                        .and_then(|number| <$ty>::try_from(number).ok())
                        .ok_or_else(|| MappingError::invalid_number(key, number, stringify!($ty)))
                }
            }

            impl FromJsonLenient for $ty {
                fn from_json_lenient(key: &str, value: &Value) -> Result<Self, MappingError> {
                    match value {
                        Value::String(string) => string.parse::<$ty>()
                            .map_err(|_| MappingError::invalid_number(key, string, stringify!($ty))),

                        _ => <$ty>::from_json(key, value)
                    }
                }
            }

            impl ToJson for $ty {
                #[inline]
                fn to_json(&self) -> Value {
                    Value::from(*self)
                }
            }
        )+
    };
}

macro_rules! impl_from_json_float {
    ($($ty:ty)+) => {
        $(
            impl FromJson for $ty {
                fn from_json(key: &str, value: &Value) -> Result<Self, MappingError> {
                    let Value::Number(number) = value else {
                        return Err(MappingError::mismatch(key, "number", value));
                    };

                    number.as_f64()
                        .map(|number| number as $ty)
                        .ok_or_else(|| MappingError::invalid_number(key, number, stringify!($ty)))
                }
            }

            impl FromJsonLenient for $ty {
                fn from_json_lenient(key: &str, value: &Value) -> Result<Self, MappingError> {
                    match value {
                        Value::String(string) => string.parse::<$ty>()
                            .map_err(|_| MappingError::invalid_number(key, string, stringify!($ty))),

                        _ => <$ty>::from_json(key, value)
                    }
                }
            }

            impl ToJson for $ty {
                #[inline]
                fn to_json(&self) -> Value {
                    Value::from(*self)
                }
            }
        )+
    };
}

impl_from_json_uint!(u8 u16 u32 u64);
impl_from_json_int!(i8 i16 i32 i64);
impl_from_json_float!(f32 f64);

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(key: &str, value: &Value) -> Result<Self, MappingError> {
        let Value::Array(values) = value else {
            return Err(MappingError::mismatch(key, "array", value));
        };

        // One bad element fails the whole array. Partial lists
        // are never returned
        values.iter()
            .enumerate()
            .map(|(i, value)| T::from_json(&format!("{}[{}]", key, i), value))
            .collect()
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(T::to_json).collect())
    }
}

#[test]
fn test_numeric_leniency() {
    use serde_json::json;

    assert_eq!(u32::from_json_lenient("required_age", &json!(0)), Ok(0));
    assert_eq!(u32::from_json_lenient("required_age", &json!("0")), Ok(0));

    assert!(u32::from_json("required_age", &json!("0")).is_err());
}
