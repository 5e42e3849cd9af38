//! Big Integer Operations
//!
//! Provides an arbitrary precision signed integer stored as a sequence of
//! decimal digits.
//!
//! # Representation
//!
//! A [`BigInteger`] owns its digits least-significant first together with a
//! [`Sign`]. For example, 153 is stored as `[3, 5, 1]`. Zero is always the
//! single digit `0` with a positive sign.
//!
//! # Construction
//!
//! - From a native magnitude plus an explicit sign ([`BigInteger::from_u64`]).
//! - From a digit sequence in either [`DigitOrder`] ([`BigInteger::from_digits`]).
//! - From text, a reader or a file, keeping every decimal digit and ignoring
//!   everything else ([`BigInteger::from_text`], [`BigInteger::from_file`]).
//!
//! Raw digit sequences are not validated. Digits outside `0..=9` or redundant
//! most-significant zeros make comparison and arithmetic results unspecified.
//! Use [`BigIntegerBuilder::strict`](crate::BigIntegerBuilder::strict) to have
//! them rejected or trimmed instead.
//!
//! # Examples
//!
//! ```rust
//! use entities_big_integer::{BigInteger, Sign};
//!
//! let a = BigInteger::from_u64(236, Sign::Negative);
//! let b = BigInteger::from(79u64);
//! assert_eq!((&a + &b).to_string(), "-157");
//! assert_eq!((&a - &b).to_string(), "-315");
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::cmp::Ordering;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::ops::{Add, Neg, Sub};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace, warn};

use crate::builder::BigIntegerBuilder;
use crate::digits;
use crate::error::{BigIntegerError, BigIntegerResult};
use crate::order::{DigitOrder, Sign};

/// Arbitrary precision signed integer over decimal digits.
///
/// Values are immutable: arithmetic returns a new `BigInteger` and never
/// touches its operands.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInteger {
    /// Little-endian decimal digits, never empty
    digits: Vec<u8>,
    sign: Sign,
}

impl BigInteger {
    /// Zero: a single `0` digit with a positive sign.
    pub fn zero() -> Self {
        Self {
            digits: vec![0],
            sign: Sign::Positive,
        }
    }

    /// Start a [`BigIntegerBuilder`].
    pub fn builder() -> BigIntegerBuilder {
        BigIntegerBuilder::new()
    }

    /// Wrap little-endian digits, substituting `0` for an empty sequence and
    /// forcing a positive sign on zero.
    fn from_parts(mut digits: Vec<u8>, sign: Sign) -> Self {
        if digits.is_empty() {
            digits.push(0);
        }
        let sign = if digits::is_zero(&digits) {
            Sign::Positive
        } else {
            sign
        };
        Self { digits, sign }
    }

    /// Create a big integer from a native magnitude and an explicit sign.
    pub fn from_u64(value: u64, sign: Sign) -> Self {
        Self::from_u128(u128::from(value), sign)
    }

    /// Create a big integer from a 128-bit magnitude and an explicit sign.
    pub fn from_u128(value: u128, sign: Sign) -> Self {
        Self::from_parts(digits::from_native(value), sign)
    }

    /// Create a big integer from a digit sequence laid out in `order`.
    ///
    /// The digits are taken as given; see the module docs for the contract on
    /// digit range and padding. An empty sequence is zero.
    pub fn from_digits(digits: Vec<u8>, order: DigitOrder, sign: Sign) -> Self {
        if digits.is_empty() {
            warn!("empty digit sequence, using zero");
        }
        Self::from_parts(order.into_little_endian(digits), sign)
    }

    /// Create a big integer from every decimal digit found in `text`.
    ///
    /// Digits are collected in encounter order and then interpreted in
    /// `order`. All other characters, line breaks included, are ignored.
    pub fn from_text(text: &str, order: DigitOrder, sign: Sign) -> Self {
        Self::from_scanned(text.as_bytes(), order, sign)
    }

    /// Create a big integer from every decimal digit readable from `reader`.
    pub fn from_reader<R: Read>(
        mut reader: R,
        order: DigitOrder,
        sign: Sign,
    ) -> BigIntegerResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_scanned(&bytes, order, sign))
    }

    /// Create a big integer from every decimal digit stored in the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntegerError::Io`] carrying the original I/O error when
    /// the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        order: DigitOrder,
        sign: Sign,
    ) -> BigIntegerResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let integer = Self::from_reader(file, order, sign)?;
        debug!(
            path = %path.display(),
            digits = integer.digits.len(),
            "loaded big integer from file"
        );
        Ok(integer)
    }

    fn from_scanned(bytes: &[u8], order: DigitOrder, sign: Sign) -> Self {
        let scanned = digits::scan(bytes);
        if scanned.is_empty() {
            warn!("no decimal digits in source, using zero");
        }
        Self::from_parts(order.into_little_endian(scanned), sign)
    }

    /// Drop redundant most-significant zero digits.
    pub(crate) fn trimmed(mut self) -> Self {
        digits::trim(&mut self.digits);
        self
    }

    /// Render the signed decimal representation with digits in `order`.
    ///
    /// [`DigitOrder::BigEndian`] gives conventional notation, which is also
    /// what `Display` produces. Zero never carries a sign.
    pub fn to_string_order(&self, order: DigitOrder) -> String {
        let mut rendered = String::with_capacity(self.digits.len() + 1);
        if self.is_negative() {
            rendered.push('-');
        }
        let ordered: Box<dyn Iterator<Item = &u8>> = match order {
            DigitOrder::BigEndian => Box::new(self.digits.iter().rev()),
            DigitOrder::LittleEndian => Box::new(self.digits.iter()),
        };
        // Out-of-range raw digits are written as their full decimal value.
        for &digit in ordered {
            match char::from_digit(u32::from(digit), 10) {
                Some(c) => rendered.push(c),
                None => rendered.push_str(&digit.to_string()),
            }
        }
        rendered
    }

    /// Little-endian digits.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Number of stored digits, redundant zeros included.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Digit at little-endian position `index`, or `None` past the last digit.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.digits.get(index).copied()
    }

    pub fn is_zero(&self) -> bool {
        digits::is_zero(&self.digits)
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative && !self.is_zero()
    }

    /// Compare two big integers (signed comparison)
    ///
    /// Signs are compared first, then magnitudes. For two negative values the
    /// magnitude comparison is inverted.
    ///
    /// Returns:
    /// - -1 if a < b
    /// - 0 if a == b
    /// - 1 if a > b
    pub fn compare(a: &Self, b: &Self) -> i32 {
        let (sa, sb) = (a.sign.ordinal(), b.sign.ordinal());
        if sa != sb {
            return if sa > sb { 1 } else { -1 };
        }
        let magnitude = Self::compare_magnitude(a, b);
        match a.sign {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        }
    }

    /// Unsigned comparison of two big integers
    ///
    /// Returns -1, 0 or 1 comparing |a| with |b|.
    pub fn compare_magnitude(a: &Self, b: &Self) -> i32 {
        digits::compare(&a.digits, &b.digits)
    }

    /// Same digits, opposite sign. Zero stays positive.
    pub fn negate(&self) -> Self {
        Self::from_parts(self.digits.clone(), self.sign.flip())
    }

    /// Add two big integers: self + other
    pub fn plus(&self, other: &Self) -> Self {
        Self::sum(&self.digits, self.sign, &other.digits, other.sign)
    }

    /// Subtract two big integers: self - other
    pub fn minus(&self, other: &Self) -> Self {
        Self::difference(&self.digits, self.sign, &other.digits, other.sign)
    }

    // `sum` and `difference` hand mixed-sign operands to each other with the
    // right-hand sign flipped. The callee then always sees equal signs, so
    // there is at most one hop.

    fn sum(lhs: &[u8], lhs_sign: Sign, rhs: &[u8], rhs_sign: Sign) -> Self {
        if lhs_sign != rhs_sign {
            let flipped = rhs_sign.flip();
            debug_assert_eq!(lhs_sign, flipped);
            trace!("mixed-sign addition rewritten as subtraction");
            return Self::difference(lhs, lhs_sign, rhs, flipped);
        }
        Self::from_parts(digits::add(lhs, rhs), lhs_sign)
    }

    fn difference(lhs: &[u8], lhs_sign: Sign, rhs: &[u8], rhs_sign: Sign) -> Self {
        if lhs_sign != rhs_sign {
            let flipped = rhs_sign.flip();
            debug_assert_eq!(lhs_sign, flipped);
            trace!("mixed-sign subtraction rewritten as addition");
            return Self::sum(lhs, lhs_sign, rhs, flipped);
        }
        match digits::compare(lhs, rhs) {
            0 => Self::zero(),
            1 => Self::from_parts(digits::sub(lhs, rhs), lhs_sign),
            _ => Self::from_parts(digits::sub(rhs, lhs), lhs_sign.flip()),
        }
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        let mut acc: i64 = 0;
        for &digit in self.digits.iter().rev() {
            let digit = i64::from(digit);
            acc = acc.checked_mul(10)?;
            acc = match self.sign {
                Sign::Positive => acc.checked_add(digit)?,
                Sign::Negative => acc.checked_sub(digit)?,
            };
        }
        Some(acc)
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_order(DigitOrder::BigEndian))
    }
}

impl FromStr for BigInteger {
    type Err = BigIntegerError;

    /// Parse conventional decimal notation: an optional `+` or `-` followed
    /// by at least one ASCII digit and nothing else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, body) = match s.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &s[1..]),
            Some(b'+') => (Sign::Positive, &s[1..]),
            _ => (Sign::Positive, s),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BigIntegerError::invalid_argument(format!(
                "{:?} is not a decimal integer",
                s
            )));
        }
        Ok(Self::from_scanned(body.as_bytes(), DigitOrder::BigEndian, sign).trimmed())
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::compare(self, other).cmp(&0)
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        self.negate()
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        self.negate()
    }
}

impl Add for BigInteger {
    type Output = BigInteger;

    fn add(self, other: BigInteger) -> BigInteger {
        self.plus(&other)
    }
}

impl<'a> Add<&'a BigInteger> for &'a BigInteger {
    type Output = BigInteger;

    fn add(self, other: &'a BigInteger) -> BigInteger {
        self.plus(other)
    }
}

impl Sub for BigInteger {
    type Output = BigInteger;

    fn sub(self, other: BigInteger) -> BigInteger {
        self.minus(&other)
    }
}

impl<'a> Sub<&'a BigInteger> for &'a BigInteger {
    type Output = BigInteger;

    fn sub(self, other: &'a BigInteger) -> BigInteger {
        self.minus(other)
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self::from_u64(value, Sign::Positive)
    }
}

impl From<u32> for BigInteger {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value), Sign::Positive)
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        Self::from_u64(value.unsigned_abs(), sign)
    }
}

impl From<i32> for BigInteger {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}
