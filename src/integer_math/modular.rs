// src/integer_math/modular.rs

use log::debug;
use crate::core::arithmetic::NaturalNumber;
use crate::core::natural_number::NaturalNumberKernel;

/// True iff `n` is even. Reads the last digit only; `n` is never touched.
pub fn is_even<N: NaturalNumberKernel>(n: &N) -> bool {
    // radix 10 is even, so the parity of n is the parity of its last digit
    n.least_significant_digit() % 2 == 0
}

/// n ← n mod m
pub fn reduce_mod<N: NaturalNumber>(n: &mut N, modulus: &N) {
    let mut remainder = n.divide(modulus);
    n.transfer_from(&mut remainder);
}

/// Updates `base` to `base^exponent mod modulus`.
///
/// Right-to-left binary exponentiation: every round squares the running base
/// modulo `modulus` and folds it into the accumulator when the current low bit
/// of the exponent is set. Intermediate values stay below `modulus²`, and the
/// number of rounds is the bit length of `exponent`.
///
/// `exponent` and `modulus` are left unchanged. With `modulus = 1` the result
/// is 0; otherwise `exponent = 0` gives 1 (including `0^0`).
///
/// # Panics
/// If `modulus` is zero.
///
/// # Examples
/// ```
/// use naturalnum::backends::DigitVec;
/// use naturalnum::core::NaturalNumber;
/// use naturalnum::integer_math::modular::power_mod;
///
/// let mut n = DigitVec::from_u64(2);
/// power_mod(&mut n, &DigitVec::from_u64(10), &DigitVec::from_u64(1000));
/// assert_eq!(n.to_string(), "24");
/// ```
pub fn power_mod<N: NaturalNumber>(base: &mut N, exponent: &N, modulus: &N) {
    assert!(!modulus.is_zero(), "Violation of: modulus > 0");

    let two = N::from_u64(2);
    let mut remaining = exponent.clone();

    let mut square = base.new_instance();
    square.transfer_from(base);
    reduce_mod(&mut square, modulus);

    let mut result = N::from_u64(1);
    reduce_mod(&mut result, modulus);

    let mut rounds = 0u32;
    while !remaining.is_zero() {
        if !is_even(&remaining) {
            result.multiply(&square);
            reduce_mod(&mut result, modulus);
        }
        remaining.divide(&two);
        if !remaining.is_zero() {
            let factor = square.clone();
            square.multiply(&factor);
            reduce_mod(&mut square, modulus);
        }
        rounds += 1;
    }

    debug!(
        "power_mod: exponent {} mod {} finished in {} rounds",
        exponent.to_decimal(),
        modulus.to_decimal(),
        rounds
    );
    base.transfer_from(&mut result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::{DigitString, DigitVec};

    #[test]
    fn test_is_even_does_not_mutate() {
        for &(value, even) in &[(0u64, true), (1, false), (10, true), (9, false), (1234567898, true)] {
            let n = DigitString::from_u64(value);
            assert_eq!(is_even(&n), even, "is_even({})", value);
            assert_eq!(is_even(&n), even);
            assert_eq!(n, DigitString::from_u64(value));
        }
    }

    #[test]
    fn test_power_mod_zero_zero_two() {
        let mut n = DigitString::from_u64(0);
        let p = DigitString::from_u64(0);
        let m = DigitString::from_u64(2);
        power_mod(&mut n, &p, &m);
        assert_eq!(n, DigitString::from_u64(1));
        assert_eq!(p, DigitString::from_u64(0));
        assert_eq!(m, DigitString::from_u64(2));
    }

    #[test]
    fn test_power_mod_fermat() {
        let mut n = DigitString::from_u64(17);
        let p = DigitString::from_u64(18);
        let m = DigitString::from_u64(19);
        power_mod(&mut n, &p, &m);
        assert_eq!(n, DigitString::from_u64(1));
        assert_eq!(p, DigitString::from_u64(18));
        assert_eq!(m, DigitString::from_u64(19));
    }

    #[test]
    fn test_power_mod_modulus_one() {
        let mut n = DigitVec::from_u64(5);
        power_mod(&mut n, &DigitVec::from_u64(0), &DigitVec::from_u64(1));
        assert!(n.is_zero());
    }

    #[test]
    fn test_power_mod_large_exponent() {
        // 3^(10^30) mod 1000003, 1000003 prime: exponent reduces mod 1000002
        let mut n = DigitVec::from_u64(3);
        let p = DigitVec::from_decimal("1000000000000000000000000000000").unwrap();
        let m = DigitVec::from_u64(1000003);
        power_mod(&mut n, &p, &m);

        let mut expected = 1u64;
        let mut base = 3u64;
        let mut e = 1_000_000_000_000_000_000_000_000_000_000u128 % 1_000_002;
        while e > 0 {
            if e & 1 == 1 {
                expected = expected * base % 1_000_003;
            }
            base = base * base % 1_000_003;
            e >>= 1;
        }
        assert_eq!(n, DigitVec::from_u64(expected));
    }

    #[test]
    #[should_panic(expected = "Violation of: modulus > 0")]
    fn test_power_mod_zero_modulus_panics() {
        let mut n = DigitVec::from_u64(5);
        power_mod(&mut n, &DigitVec::from_u64(2), &DigitVec::default());
    }
}
