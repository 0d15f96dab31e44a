use std::fmt;

use super::error::{ConversionError, TableError};

/// Bidirectional mapping between one enumeration family and its wire tokens.
///
/// Tables are built once per exchange and passed by reference into the
/// order builder. Construction rejects duplicate tokens and duplicate
/// values, which keeps `decode` and `encode` exact inverses of each other.
/// Token matching is exact and case-sensitive; an unknown token is always
/// an error, never a default.
#[derive(Debug, Clone)]
pub struct EnumTable<T> {
    family: &'static str,
    entries: Vec<(T, &'static str)>,
}

impl<T> EnumTable<T>
where
    T: Copy + PartialEq + fmt::Debug,
{
    pub fn new(family: &'static str, entries: Vec<(T, &'static str)>) -> Result<Self, TableError> {
        for (i, (value, token)) in entries.iter().enumerate() {
            let rest = &entries[i + 1..];
            if rest.iter().any(|(_, t)| t == token) {
                return Err(TableError::DuplicateToken {
                    family,
                    token: token.to_string(),
                });
            }
            if rest.iter().any(|(v, _)| v == value) {
                return Err(TableError::DuplicateValue {
                    family,
                    value: format!("{:?}", value),
                });
            }
        }

        Ok(Self { family, entries })
    }

    /// Name of the enumeration family, used in error reports.
    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn decode(&self, token: &str) -> Result<T, ConversionError> {
        self.entries
            .iter()
            .find(|(_, t)| *t == token)
            .map(|(value, _)| *value)
            .ok_or_else(|| ConversionError::UnknownEnumValue {
                family: self.family,
                token: token.to_string(),
            })
    }

    pub fn encode(&self, value: T) -> Result<&'static str, ConversionError> {
        self.entries
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, token)| *token)
            .ok_or_else(|| ConversionError::UnmappedEnumValue {
                family: self.family,
                value: format!("{:?}", value),
            })
    }

    /// Every mapping in the table, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (T, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
