//! Magnitude Operations
//!
//! Sign-independent helpers over little-endian decimal digit slices. Every
//! function here assumes digits in `0..=9`; anything else is a caller error
//! and yields unspecified (but memory-safe) results.

use std::cmp::Ordering;

/// Split a native magnitude into little-endian decimal digits.
///
/// Zero becomes the single digit `0`.
pub(crate) fn from_native(mut value: u128) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push((value % 10) as u8);
        value /= 10;
    }
    digits
}

/// Collect every ASCII decimal digit of `bytes` in encounter order.
///
/// Whitespace, line breaks and any other non-digit bytes are skipped, so a
/// number may be split across several lines. Multi-byte UTF-8 sequences never
/// contain ASCII bytes, so scanning text as bytes is exact.
pub(crate) fn scan(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .filter(|b| b.is_ascii_digit())
        .map(|b| b - b'0')
        .collect()
}

/// True when every digit is zero.
pub(crate) fn is_zero(digits: &[u8]) -> bool {
    digits.iter().all(|&d| d == 0)
}

/// Drop most-significant zero digits, keeping at least one digit.
pub(crate) fn trim(digits: &mut Vec<u8>) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
}

/// Compare two magnitudes.
///
/// A longer sequence is the larger magnitude, so zero-padded inputs compare
/// by their padded length. Equal lengths are compared from the most
/// significant digit down.
///
/// Returns -1, 0 or 1.
pub(crate) fn compare(a: &[u8], b: &[u8]) -> i32 {
    let ordering = a
        .len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()));
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Schoolbook addition with carry.
pub(crate) fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let width = a.len().max(b.len());
    let mut result = Vec::with_capacity(width + 1);
    let mut carry = 0u16;

    for i in 0..width {
        let sum = u16::from(a.get(i).copied().unwrap_or(0))
            + u16::from(b.get(i).copied().unwrap_or(0))
            + carry;
        result.push((sum % 10) as u8);
        carry = sum / 10;
    }
    if carry != 0 {
        result.push(carry as u8);
    }

    trim(&mut result);
    result
}

/// Schoolbook subtraction with borrow, `larger - smaller`.
///
/// `larger` must not be a smaller magnitude than `smaller`.
pub(crate) fn sub(larger: &[u8], smaller: &[u8]) -> Vec<u8> {
    debug_assert!(compare(larger, smaller) >= 0, "minuend magnitude is smaller");

    let width = larger.len().max(smaller.len());
    let mut result = Vec::with_capacity(width);
    let mut borrow = 0i16;

    for i in 0..width {
        let mut diff = i16::from(larger.get(i).copied().unwrap_or(0))
            - i16::from(smaller.get(i).copied().unwrap_or(0))
            - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result.push(diff as u8);
    }

    trim(&mut result);
    result
}
