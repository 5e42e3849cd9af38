//! Big Integer Builder
//!
//! Collects the construction options for a [`BigInteger`]: exactly one source
//! plus the sign, the digit order of the source and whether raw digits are
//! validated. Selecting a second source is an error at build time.
//!
//! ```rust
//! use entities_big_integer::{BigInteger, DigitOrder, Sign};
//!
//! let value = BigInteger::builder()
//!     .digits(vec![1, 5, 3])
//!     .order(DigitOrder::BigEndian)
//!     .sign(Sign::Negative)
//!     .build()
//!     .unwrap();
//! assert_eq!(value.to_string(), "-153");
//! ```

use std::path::PathBuf;

use crate::big::BigInteger;
use crate::error::{BigIntegerError, BigIntegerResult};
use crate::order::{DigitOrder, Sign};

/// Where the digits come from.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Source {
    Integer(u128),
    Digits(Vec<u8>),
    Text(String),
    File(PathBuf),
}

/// Builder for [`BigInteger`].
///
/// Defaults: no source, positive sign, little-endian source order and
/// non-strict digits.
#[derive(Clone, Debug, Default)]
pub struct BigIntegerBuilder {
    sources: Vec<Source>,
    sign: Sign,
    order: DigitOrder,
    strict: bool,
}

impl BigIntegerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a native magnitude. The digit order setting does not apply.
    pub fn integer<T: Into<u128>>(mut self, value: T) -> Self {
        self.sources.push(Source::Integer(value.into()));
        self
    }

    /// Use a raw digit sequence.
    pub fn digits(mut self, digits: Vec<u8>) -> Self {
        self.sources.push(Source::Digits(digits));
        self
    }

    /// Use the decimal digits found in `text`.
    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.sources.push(Source::Text(text.into()));
        self
    }

    /// Use the decimal digits stored in the file at `path`.
    pub fn file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.sources.push(Source::File(path.into()));
        self
    }

    pub fn sign(mut self, sign: Sign) -> Self {
        self.sign = sign;
        self
    }

    /// Order of the digit sequence, text or file content.
    pub fn order(mut self, order: DigitOrder) -> Self {
        self.order = order;
        self
    }

    /// Reject raw digits outside `0..=9` and trim redundant most-significant
    /// zeros.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the big integer.
    ///
    /// # Errors
    ///
    /// - [`BigIntegerError::InvalidArgument`] when no source or more than one
    ///   source was selected, or in strict mode when a raw digit is outside
    ///   `0..=9`.
    /// - [`BigIntegerError::Io`] when a file source cannot be read.
    pub fn build(self) -> BigIntegerResult<BigInteger> {
        if self.sources.len() > 1 {
            return Err(BigIntegerError::invalid_argument(format!(
                "exactly one source is allowed, {} were given",
                self.sources.len()
            )));
        }
        let source = self.sources.into_iter().next().ok_or_else(|| {
            BigIntegerError::invalid_argument(
                "a native integer, a digit sequence, a text or a file path is required",
            )
        })?;

        let integer = match source {
            Source::Integer(value) => BigInteger::from_u128(value, self.sign),
            Source::Digits(digits) => {
                if self.strict {
                    if let Some(bad) = digits.iter().find(|&&d| d > 9) {
                        return Err(BigIntegerError::invalid_argument(format!(
                            "digit {} is outside 0..=9",
                            bad
                        )));
                    }
                }
                BigInteger::from_digits(digits, self.order, self.sign)
            }
            Source::Text(text) => BigInteger::from_text(&text, self.order, self.sign),
            Source::File(path) => BigInteger::from_file(path, self.order, self.sign)?,
        };

        Ok(if self.strict { integer.trimmed() } else { integer })
    }
}
