// src/integer_math/gcd.rs

use log::trace;
use crate::core::arithmetic::NaturalNumber;

/// Reduces the pair `(a, b)` to `(gcd(a, b), 0)` in place with Euclid's
/// algorithm: while `b` is non-zero, `(a, b) ← (b, a mod b)`.
///
/// `gcd(0, 0)` is 0.
///
/// # Examples
/// ```
/// use naturalnum::backends::DigitString;
/// use naturalnum::core::NaturalNumber;
/// use naturalnum::integer_math::gcd::reduce_to_gcd;
///
/// let mut a = DigitString::from_u64(30);
/// let mut b = DigitString::from_u64(21);
/// reduce_to_gcd(&mut a, &mut b);
/// assert_eq!(a.to_string(), "3");
/// assert_eq!(b.to_string(), "0");
/// ```
pub fn reduce_to_gcd<N: NaturalNumber>(a: &mut N, b: &mut N) {
    let mut rounds = 0u32;
    while !b.is_zero() {
        let mut remainder = a.divide(b);
        a.transfer_from(b);
        b.transfer_from(&mut remainder);
        rounds += 1;
    }
    trace!("reduce_to_gcd: gcd {} after {} rounds", a.to_decimal(), rounds);
}

/// gcd of two values, leaving both untouched.
pub fn gcd<N: NaturalNumber>(left: &N, right: &N) -> N {
    let mut a = left.clone();
    let mut b = right.clone();
    reduce_to_gcd(&mut a, &mut b);
    a
}

pub fn are_coprime<N: NaturalNumber>(left: &N, right: &N) -> bool {
    gcd(left, right) == N::from_u64(1)
}
