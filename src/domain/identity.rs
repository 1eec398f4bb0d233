use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Error;

pub const ACCOUNT_NUMBER_LEN: usize = 6;

/// A loosely typed input value, as it arrives from an untyped source.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Other(String),
}

impl FieldValue {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "string",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Other(_) => "other",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => FieldValue::Text(s),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => n
                    .as_f64()
                    .map(FieldValue::Float)
                    .unwrap_or_else(|| FieldValue::Other(n.to_string())),
            },
            other => FieldValue::Other(other.to_string()),
        }
    }
}

/// Six ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn parse(value: &FieldValue) -> Result<Self, Error> {
        let FieldValue::Text(text) = value else {
            return Err(Error::TypeMismatch(format!(
                "Invalid account number. Account number must be of type string, got {}.",
                value.kind()
            )));
        };

        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::invalid(
                "Invalid account number. Account number must contain only digits.",
            ));
        }

        if text.len() != ACCOUNT_NUMBER_LEN {
            return Err(Error::invalid(
                "Invalid account number. Account number must only be of length 6.",
            ));
        }

        Ok(Self(text.clone()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// First name, whitespace, last name (apostrophe or hyphen allowed inside),
// then an optional middle name or initial. Only the start of the input is
// checked.
static HOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]{2,}\s[a-zA-Z]+'?-?[a-zA-Z]{2,}\s?([a-zA-Z]+)?")
        .expect("Invalid account holder regex pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountHolder(String);

impl AccountHolder {
    pub fn parse(value: &str) -> Result<Self, Error> {
        if !HOLDER_PATTERN.is_match(value) {
            return Err(Error::invalid(
                "Invalid account name. Account name must be first name followed by last name.",
            ));
        }
        Ok(Self(value.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
