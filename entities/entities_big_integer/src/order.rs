//! Digit Order and Sign Flags
//!
//! The two flags that travel alongside a digit sequence: the order digits are
//! read or written in, and the sign of the value.

use std::fmt;
use std::str::FromStr;

use crate::error::BigIntegerError;

/// Order in which a digit sequence is laid out.
///
/// Internally a [`BigInteger`](crate::BigInteger) always stores its digits
/// least-significant first. The flag only describes external sequences, text
/// and rendered strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigitOrder {
    /// Most significant digit first (conventional reading order)
    BigEndian,
    /// Least significant digit first
    #[default]
    LittleEndian,
}

impl DigitOrder {
    /// Put `digits` into little-endian order, assuming they are laid out in `self`.
    pub(crate) fn into_little_endian(self, mut digits: Vec<u8>) -> Vec<u8> {
        if self == DigitOrder::BigEndian {
            digits.reverse();
        }
        digits
    }
}

impl TryFrom<u8> for DigitOrder {
    type Error = BigIntegerError;

    /// Ordinals match the external flag values: 1 is big-endian, 2 is little-endian.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DigitOrder::BigEndian),
            2 => Ok(DigitOrder::LittleEndian),
            other => Err(BigIntegerError::invalid_argument(format!(
                "unrecognized digit order ordinal {}",
                other
            ))),
        }
    }
}

impl FromStr for DigitOrder {
    type Err = BigIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "big" | "bigendian" | "be" => Ok(DigitOrder::BigEndian),
            "little" | "littleendian" | "le" => Ok(DigitOrder::LittleEndian),
            _ => Err(BigIntegerError::invalid_argument(format!(
                "unrecognized digit order {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for DigitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitOrder::BigEndian => write!(f, "big-endian"),
            DigitOrder::LittleEndian => write!(f, "little-endian"),
        }
    }
}

/// Sign of a big integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    #[default]
    Positive,
}

impl Sign {
    /// Ordinal used for sign comparison: positive is 1, negative is -1.
    pub fn ordinal(self) -> i32 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }

    /// The opposite sign.
    pub fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl FromStr for Sign {
    type Err = BigIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "+" | "positive" | "pos" => Ok(Sign::Positive),
            "-" | "negative" | "neg" => Ok(Sign::Negative),
            _ => Err(BigIntegerError::invalid_argument(format!(
                "unrecognized sign {:?}",
                s
            ))),
        }
    }
}
