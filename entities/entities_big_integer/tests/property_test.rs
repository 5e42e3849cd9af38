//! Property-based tests for entities_big_integer
//!
//! Arithmetic is checked against malachite's `Integer` as an independent
//! oracle, and ordering and sign laws are checked on random operands.

use entities_big_integer::{BigInteger, DigitOrder, Sign};
use malachite::Integer;
use proptest::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;

/// Canonical signed decimal text, well beyond the range of native integers
fn decimal() -> impl Strategy<Value = String> {
    "-?[1-9][0-9]{0,40}|0"
}

fn parse_both(text: &str) -> (BigInteger, Integer) {
    (
        text.parse::<BigInteger>().unwrap(),
        Integer::from_str(text).unwrap(),
    )
}

proptest! {
    /// Property: native magnitudes render back to their decimal form
    #[test]
    fn prop_native_round_trip(n in any::<u64>()) {
        prop_assert_eq!(BigInteger::from(n).to_string(), n.to_string());
    }

    /// Property: reading a sequence in one order equals writing it in the other
    #[test]
    fn prop_digit_order_symmetry(digits in prop::collection::vec(0u8..=9, 1..40)) {
        let from_big = BigInteger::from_digits(digits.clone(), DigitOrder::BigEndian, Sign::Positive);
        let from_little = BigInteger::from_digits(digits.clone(), DigitOrder::LittleEndian, Sign::Positive);

        prop_assert_eq!(
            from_big.to_string_order(DigitOrder::LittleEndian),
            from_little.to_string_order(DigitOrder::BigEndian)
        );
        let reversed: String = from_little.to_string_order(DigitOrder::BigEndian).chars().rev().collect();
        prop_assert_eq!(from_big.to_string_order(DigitOrder::BigEndian), reversed);
    }

    /// Property: addition and subtraction agree with the oracle
    #[test]
    fn prop_arithmetic_matches_oracle(a in decimal(), b in decimal()) {
        let (x, ox) = parse_both(&a);
        let (y, oy) = parse_both(&b);

        prop_assert_eq!((&x + &y).to_string(), (&ox + &oy).to_string());
        prop_assert_eq!((&x - &y).to_string(), (&ox - &oy).to_string());
    }

    /// Property: compare is antisymmetric and agrees with the oracle and Ord
    #[test]
    fn prop_compare_is_consistent(a in decimal(), b in decimal()) {
        let (x, ox) = parse_both(&a);
        let (y, oy) = parse_both(&b);

        let expected = match ox.cmp(&oy) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        };
        prop_assert_eq!(BigInteger::compare(&x, &y), expected);
        prop_assert_eq!(BigInteger::compare(&y, &x), -expected);
        prop_assert_eq!(x == y, expected == 0);
        prop_assert_eq!(x < y, expected < 0);
        prop_assert_eq!(x > y, expected > 0);
    }

    /// Property: compare is transitive
    #[test]
    fn prop_compare_is_transitive(a in decimal(), b in decimal(), c in decimal()) {
        let mut values: Vec<BigInteger> = [a, b, c].iter().map(|s| s.parse().unwrap()).collect();
        values.sort();
        prop_assert!(BigInteger::compare(&values[0], &values[1]) <= 0);
        prop_assert!(BigInteger::compare(&values[1], &values[2]) <= 0);
        prop_assert!(BigInteger::compare(&values[0], &values[2]) <= 0);
    }

    /// Property: zero is the additive identity and a - a is positive zero
    #[test]
    fn prop_identity_and_inverse(a in decimal()) {
        let x: BigInteger = a.parse().unwrap();
        let zero = BigInteger::zero();

        prop_assert_eq!(&x + &zero, x.clone());
        prop_assert_eq!(&x - &zero, x.clone());
        let inverse = &x - &x;
        prop_assert_eq!(inverse.sign(), Sign::Positive);
        prop_assert_eq!(inverse, zero);
    }

    /// Property: negation distributes over addition and flips subtraction
    #[test]
    fn prop_sign_laws(a in decimal(), b in decimal()) {
        let x: BigInteger = a.parse().unwrap();
        let y: BigInteger = b.parse().unwrap();

        prop_assert_eq!(&x + &y, -(&(-&x) + &(-&y)));
        prop_assert_eq!(&x - &y, -(&y - &x));
    }
}
