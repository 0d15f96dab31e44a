use thiserror::Error;

/// A single field failed to convert from its wire form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("unknown {family} value '{token}'")]
    UnknownEnumValue { family: &'static str, token: String },

    /// The value exists in the domain but this exchange's table has no token for it.
    #[error("{family} value {value} has no wire token")]
    UnmappedEnumValue { family: &'static str, value: String },

    #[error("malformed number in field '{field}': '{raw}'")]
    MalformedNumber { field: String, raw: String },

    #[error("malformed timestamp in field '{field}': {raw}")]
    MalformedTimestamp { field: String, raw: String },

    #[error("field '{field}' has the wrong type, expected {expected}")]
    InvalidType { field: String, expected: &'static str },

    /// The payload could not be read as a field mapping at all.
    #[error("malformed payload: {0}")]
    Payload(String),
}

impl ConversionError {
    /// Wire name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConversionError::MissingField(field) => Some(field),
            ConversionError::MalformedNumber { field, .. }
            | ConversionError::MalformedTimestamp { field, .. }
            | ConversionError::InvalidType { field, .. } => Some(field),
            ConversionError::UnknownEnumValue { .. }
            | ConversionError::UnmappedEnumValue { .. }
            | ConversionError::Payload(_) => None,
        }
    }
}

/// A conversion table or field layout is inconsistent and cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("{family} table maps token '{token}' more than once")]
    DuplicateToken { family: &'static str, token: String },

    #[error("{family} table maps value {value} more than once")]
    DuplicateValue { family: &'static str, value: String },

    #[error("{exchange} v{version} layout has no entry for {field}")]
    MissingLayoutField {
        exchange: &'static str,
        version: u32,
        field: &'static str,
    },

    #[error("{exchange} v{version} layout declares {field} more than once")]
    DuplicateLayoutField {
        exchange: &'static str,
        version: u32,
        field: &'static str,
    },

    #[error("{exchange} v{version} layout uses wire name '{wire_name}' more than once")]
    DuplicateWireName {
        exchange: &'static str,
        version: u32,
        wire_name: &'static str,
    },

    #[error("{exchange} v{version} layout marks {field} optional but it has no zero value")]
    OptionalWithoutDefault {
        exchange: &'static str,
        version: u32,
        field: &'static str,
    },

    #[error("no exchange profile '{name}' with layout version {version}")]
    UnknownProfile { name: String, version: u32 },
}
