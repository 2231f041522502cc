// Amount - 256-bit unsigned value type used for every balance

use primitive_types::U256;
use thiserror::Error;

/// Unsigned 256-bit balance / supply value
pub type Amount = U256;

/// Errors that can occur when parsing an amount from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("Empty amount")]
    Empty,

    #[error("Invalid decimal amount: {0}")]
    InvalidDigits(String),

    #[error("Amount does not fit in 256 bits: {0}")]
    Overflow(String),
}

/// Parse a base-10 amount, allowing `_` as a digit separator
pub fn parse_amount(input: &str) -> Result<Amount, AmountParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let digits: String = trimmed.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AmountParseError::InvalidDigits(trimmed.to_string()));
    }

    U256::from_dec_str(&digits).map_err(|_| AmountParseError::Overflow(trimmed.to_string()))
}

/// Serde adapter: amounts travel as decimal strings, numbers are accepted too
pub mod serde_decimal {
    use super::{parse_amount, Amount};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Amount, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Amount, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum AmountInput {
            String(String),
            Number(u64),
        }

        match AmountInput::deserialize(deserializer)? {
            AmountInput::String(raw) => parse_amount(&raw).map_err(D::Error::custom),
            AmountInput::Number(value) => Ok(Amount::from(value)),
        }
    }
}
