use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use super::decimal::decode_decimal;
use super::enum_table::EnumTable;
use super::error::ConversionError;
use super::timestamp::decode_timestamp;

/// Whether a wire field may be left out of a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// Absent or `null` decodes to the type's zero value ("" / 0 / false).
    Optional,
}

/// Raw field mapping decoded from one exchange payload.
///
/// The transport layer owns the payload encoding; by the time a payload
/// reaches this type it is a flat map of wire field names to raw values.
/// Typed getters apply the optional-field policy and the per-type
/// converters, and report exactly one offending field on failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    fields: Map<String, Value>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Accepts only a JSON object.
    pub fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ConversionError::InvalidType {
                field: "<payload>".to_string(),
                expected: "object",
            }),
        }
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    pub fn string(&self, name: &str, presence: Presence) -> Result<String, ConversionError> {
        match self.lookup(name, presence)? {
            None => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(invalid_type(name, "string")),
        }
    }

    pub fn integer(&self, name: &str, presence: Presence) -> Result<i64, ConversionError> {
        match self.lookup(name, presence)? {
            None => Ok(0),
            Some(Value::Number(n)) => n.as_i64().ok_or_else(|| ConversionError::MalformedNumber {
                field: name.to_string(),
                raw: n.to_string(),
            }),
            Some(_) => Err(invalid_type(name, "integer")),
        }
    }

    pub fn boolean(&self, name: &str, presence: Presence) -> Result<bool, ConversionError> {
        match self.lookup(name, presence)? {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(invalid_type(name, "boolean")),
        }
    }

    pub fn decimal(&self, name: &str, presence: Presence) -> Result<Decimal, ConversionError> {
        match self.lookup(name, presence)? {
            None => Ok(Decimal::ZERO),
            Some(Value::String(raw)) => decode_decimal(name, raw),
            Some(_) => Err(invalid_type(name, "decimal string")),
        }
    }

    /// Timestamps have no zero value; the field is always required.
    pub fn timestamp(&self, name: &str) -> Result<DateTime<Utc>, ConversionError> {
        match self.lookup(name, Presence::Required)? {
            Some(Value::Number(n)) => match n.as_i64() {
                Some(millis) => decode_timestamp(name, millis),
                None => Err(ConversionError::MalformedTimestamp {
                    field: name.to_string(),
                    raw: n.to_string(),
                }),
            },
            _ => Err(invalid_type(name, "integer")),
        }
    }

    /// Enumeration tokens have no zero value; the field is always required.
    pub fn token<T>(&self, name: &str, table: &EnumTable<T>) -> Result<T, ConversionError>
    where
        T: Copy + PartialEq + std::fmt::Debug,
    {
        match self.lookup(name, Presence::Required)? {
            Some(Value::String(token)) => table.decode(token),
            _ => Err(invalid_type(name, "string")),
        }
    }

    fn lookup(&self, name: &str, presence: Presence) -> Result<Option<&Value>, ConversionError> {
        match (self.fields.get(name), presence) {
            (Some(Value::Null) | None, Presence::Optional) => Ok(None),
            (Some(Value::Null) | None, Presence::Required) => {
                Err(ConversionError::MissingField(name.to_string()))
            }
            (Some(value), _) => Ok(Some(value)),
        }
    }
}

impl From<Map<String, Value>> for FieldSet {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_map(fields)
    }
}

fn invalid_type(name: &str, expected: &'static str) -> ConversionError {
    ConversionError::InvalidType {
        field: name.to_string(),
        expected,
    }
}
