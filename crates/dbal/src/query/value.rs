//! Bound parameter values and their declared types

use std::fmt;

use serde_json::Value as JsonValue;

/// Database value enumeration for type-safe parameter binding
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseValue {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    Bytes(Vec<u8>),
    Uuid(uuid::Uuid),
    DateTime(chrono::DateTime<chrono::Utc>),
    Date(chrono::NaiveDate),
    Time(chrono::NaiveTime),
    Json(JsonValue),
    Array(Vec<DatabaseValue>),
}

impl DatabaseValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, DatabaseValue::Null)
    }

    /// Binding type inferred from the value itself
    pub fn parameter_type(&self) -> ParameterType {
        match self {
            DatabaseValue::Null => ParameterType::Null,
            DatabaseValue::Bool(_) => ParameterType::Boolean,
            DatabaseValue::Int32(_) => ParameterType::Integer,
            DatabaseValue::Int64(_) => ParameterType::BigInt,
            DatabaseValue::Float32(_) | DatabaseValue::Float64(_) => ParameterType::Float,
            DatabaseValue::String(_) => ParameterType::String,
            DatabaseValue::Bytes(_) => ParameterType::Binary,
            DatabaseValue::Uuid(_) => ParameterType::Uuid,
            DatabaseValue::DateTime(_) => ParameterType::DateTime,
            DatabaseValue::Date(_) => ParameterType::Date,
            DatabaseValue::Time(_) => ParameterType::Time,
            DatabaseValue::Json(_) => ParameterType::Json,
            DatabaseValue::Array(items) => {
                let element = items
                    .iter()
                    .map(DatabaseValue::parameter_type)
                    .find(|t| *t != ParameterType::Null)
                    .unwrap_or(ParameterType::Null);
                ParameterType::Array(Box::new(element))
            }
        }
    }
}

/// Declared binding type of a query parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterType {
    Null,
    Boolean,
    Integer,
    BigInt,
    Float,
    String,
    Binary,
    Uuid,
    DateTime,
    Date,
    Time,
    Json,
    Array(Box<ParameterType>),
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterType::Null => write!(f, "null"),
            ParameterType::Boolean => write!(f, "boolean"),
            ParameterType::Integer => write!(f, "integer"),
            ParameterType::BigInt => write!(f, "bigint"),
            ParameterType::Float => write!(f, "float"),
            ParameterType::String => write!(f, "string"),
            ParameterType::Binary => write!(f, "binary"),
            ParameterType::Uuid => write!(f, "uuid"),
            ParameterType::DateTime => write!(f, "datetime"),
            ParameterType::Date => write!(f, "date"),
            ParameterType::Time => write!(f, "time"),
            ParameterType::Json => write!(f, "json"),
            ParameterType::Array(element) => write!(f, "{}[]", element),
        }
    }
}

impl From<bool> for DatabaseValue {
    fn from(value: bool) -> Self {
        DatabaseValue::Bool(value)
    }
}

impl From<i32> for DatabaseValue {
    fn from(value: i32) -> Self {
        DatabaseValue::Int32(value)
    }
}

impl From<i64> for DatabaseValue {
    fn from(value: i64) -> Self {
        DatabaseValue::Int64(value)
    }
}

impl From<f32> for DatabaseValue {
    fn from(value: f32) -> Self {
        DatabaseValue::Float32(value)
    }
}

impl From<f64> for DatabaseValue {
    fn from(value: f64) -> Self {
        DatabaseValue::Float64(value)
    }
}

impl From<String> for DatabaseValue {
    fn from(value: String) -> Self {
        DatabaseValue::String(value)
    }
}

impl From<&str> for DatabaseValue {
    fn from(value: &str) -> Self {
        DatabaseValue::String(value.to_string())
    }
}

impl From<Vec<u8>> for DatabaseValue {
    fn from(value: Vec<u8>) -> Self {
        DatabaseValue::Bytes(value)
    }
}

impl From<uuid::Uuid> for DatabaseValue {
    fn from(value: uuid::Uuid) -> Self {
        DatabaseValue::Uuid(value)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DatabaseValue {
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        DatabaseValue::DateTime(value)
    }
}

impl From<chrono::NaiveDate> for DatabaseValue {
    fn from(value: chrono::NaiveDate) -> Self {
        DatabaseValue::Date(value)
    }
}

impl From<chrono::NaiveTime> for DatabaseValue {
    fn from(value: chrono::NaiveTime) -> Self {
        DatabaseValue::Time(value)
    }
}

impl From<JsonValue> for DatabaseValue {
    fn from(value: JsonValue) -> Self {
        DatabaseValue::Json(value)
    }
}

impl<T> From<Option<T>> for DatabaseValue
where
    T: Into<DatabaseValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => DatabaseValue::Null,
        }
    }
}
