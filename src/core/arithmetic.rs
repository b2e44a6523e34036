// src/core/arithmetic.rs
//
// Secondary arithmetic over any NaturalNumberKernel.
//
// Nothing in here looks at a digit store directly: digits are pulled out with
// divide_by_radix, worked on as plain Vec<u32> (least significant first) and
// pushed back with multiply_by_radix. Any backend that gets the kernel
// primitives right gets every operation below for free.

use std::cmp::Ordering;
use log::trace;
use crate::core::error::NaturalNumberError;
use crate::core::natural_number::{NaturalNumberKernel, RADIX};

/// Largest value `to_int` accepts.
pub const INT_LIMIT: u64 = i32::MAX as u64;

/// Removes every digit of `n`, least significant first.
fn drain_digits<N: NaturalNumberKernel>(n: &mut N) -> Vec<u32> {
    let mut digits = Vec::new();
    while !n.is_zero() {
        digits.push(n.divide_by_radix());
    }
    digits
}

/// Digits of `n`, least significant first, without touching `n`.
fn digits_of<N: NaturalNumberKernel>(n: &N) -> Vec<u32> {
    let mut scratch = n.clone();
    drain_digits(&mut scratch)
}

/// Rebuilds `n` from least-significant-first digits. Zero digits at the high
/// end vanish because multiply_by_radix(0) on zero leaves zero.
fn refill<N: NaturalNumberKernel>(n: &mut N, digits: &[u32]) {
    n.clear();
    for &digit in digits.iter().rev() {
        n.multiply_by_radix(digit);
    }
}

/// True iff `s` is exactly the canonical decimal form of some natural number:
/// digits only, no sign, no leading zero unless the whole string is "0".
pub fn is_canonical_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && (s == "0" || !s.starts_with('0'))
}

/// Secondary operations, implemented once for every kernel.
///
/// All operations are destructive on the receiver. Preconditions are checked
/// with assertions and panic with a `Violation of:` message.
pub trait NaturalNumber: NaturalNumberKernel {
    fn from_u64(value: u64) -> Self {
        let mut n = Self::default();
        n.set_from_u64(value);
        n
    }

    /// Fails with [`NaturalNumberError::NegativeInteger`] when `value < 0`.
    fn from_i64(value: i64) -> Result<Self, NaturalNumberError> {
        u64::try_from(value)
            .map(Self::from_u64)
            .map_err(|_| NaturalNumberError::NegativeInteger(value))
    }

    /// Fails with [`NaturalNumberError::MalformedDecimal`] unless `s` is canonical.
    fn from_decimal(s: &str) -> Result<Self, NaturalNumberError> {
        let mut n = Self::default();
        n.set_from_decimal(s)?;
        Ok(n)
    }

    fn set_from_u64(&mut self, value: u64) {
        let mut digits = Vec::new();
        let mut rest = value;
        while rest > 0 {
            digits.push((rest % u64::from(RADIX)) as u32);
            rest /= u64::from(RADIX);
        }
        refill(self, &digits);
    }

    /// Leaves `self` unchanged on error.
    fn set_from_decimal(&mut self, s: &str) -> Result<(), NaturalNumberError> {
        if !is_canonical_decimal(s) {
            return Err(NaturalNumberError::MalformedDecimal(s.to_string()));
        }
        self.clear();
        for b in s.bytes() {
            self.multiply_by_radix(u32::from(b - b'0'));
        }
        Ok(())
    }

    fn can_parse(s: &str) -> bool {
        is_canonical_decimal(s)
    }

    fn to_u64(&self) -> Option<u64> {
        let mut value: u64 = 0;
        for &digit in digits_of(self).iter().rev() {
            value = value
                .checked_mul(u64::from(RADIX))?
                .checked_add(u64::from(digit))?;
        }
        Some(value)
    }

    fn can_convert_to_int(&self) -> bool {
        self.to_u64().map_or(false, |v| v <= INT_LIMIT)
    }

    /// # Panics
    /// If the value exceeds `i32::MAX`.
    fn to_int(&self) -> i32 {
        match self.to_u64().and_then(|v| i32::try_from(v).ok()) {
            Some(v) => v,
            None => panic!("Violation of: {} <= {}", self.to_decimal(), i32::MAX),
        }
    }

    /// Canonical decimal digits, "0" for zero.
    fn to_decimal(&self) -> String {
        let digits = digits_of(self);
        if digits.is_empty() {
            return "0".to_string();
        }
        digits
            .iter()
            .rev()
            .filter_map(|&d| std::char::from_digit(d, RADIX))
            .collect()
    }

    /// Numeric ordering. Canonical digit sequences compare by length first,
    /// then lexicographically from the most significant digit.
    fn compare_to(&self, other: &Self) -> Ordering {
        let a = digits_of(self);
        let b = digits_of(other);
        a.len()
            .cmp(&b.len())
            .then_with(|| a.iter().rev().cmp(b.iter().rev()))
    }

    fn increment(&mut self) {
        let mut nines = 0;
        let mut digit = self.divide_by_radix();
        while digit == RADIX - 1 {
            nines += 1;
            digit = self.divide_by_radix();
        }
        self.multiply_by_radix(digit + 1);
        for _ in 0..nines {
            self.multiply_by_radix(0);
        }
    }

    /// # Panics
    /// If `self` is zero.
    fn decrement(&mut self) {
        assert!(!self.is_zero(), "Violation of: self > 0");
        let mut zeros = 0;
        let mut digit = self.divide_by_radix();
        while digit == 0 {
            zeros += 1;
            digit = self.divide_by_radix();
        }
        self.multiply_by_radix(digit - 1);
        for _ in 0..zeros {
            self.multiply_by_radix(RADIX - 1);
        }
    }

    /// self ← self + other
    fn add(&mut self, other: &Self) {
        let a = digits_of(self);
        let b = digits_of(other);
        let len = a.len().max(b.len());
        let mut sum = Vec::with_capacity(len + 1);
        let mut carry = 0;
        for i in 0..len {
            let column = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0) + carry;
            sum.push(column % RADIX);
            carry = column / RADIX;
        }
        if carry > 0 {
            sum.push(carry);
        }
        refill(self, &sum);
    }

    /// self ← self - other
    ///
    /// # Panics
    /// If `other > self`; `self` is left unchanged in that case.
    fn subtract(&mut self, other: &Self) {
        let a = digits_of(self);
        let b = digits_of(other);
        let len = a.len().max(b.len());
        let mut difference = Vec::with_capacity(len);
        let mut borrow = 0;
        for i in 0..len {
            let minuend = a.get(i).copied().unwrap_or(0);
            let subtrahend = b.get(i).copied().unwrap_or(0) + borrow;
            if minuend >= subtrahend {
                difference.push(minuend - subtrahend);
                borrow = 0;
            } else {
                difference.push(minuend + RADIX - subtrahend);
                borrow = 1;
            }
        }
        assert!(borrow == 0, "Violation of: other <= self");
        refill(self, &difference);
    }

    /// self ← self * other, schoolbook long multiplication.
    fn multiply(&mut self, other: &Self) {
        let a = digits_of(self);
        let b = digits_of(other);
        if a.is_empty() || b.is_empty() {
            self.clear();
            return;
        }
        let radix = u64::from(RADIX);
        let mut product = vec![0u64; a.len() + b.len()];
        for (i, &x) in a.iter().enumerate() {
            if x == 0 {
                continue;
            }
            let mut carry = 0u64;
            for (j, &y) in b.iter().enumerate() {
                let cell = product[i + j] + u64::from(x) * u64::from(y) + carry;
                product[i + j] = cell % radix;
                carry = cell / radix;
            }
            product[i + b.len()] += carry;
        }
        let digits: Vec<u32> = product.into_iter().map(|d| d as u32).collect();
        refill(self, &digits);
    }

    /// Long division. `self` becomes the quotient; the remainder is returned
    /// as a fresh instance.
    ///
    /// # Panics
    /// If `divisor` is zero.
    fn divide(&mut self, divisor: &Self) -> Self {
        assert!(!divisor.is_zero(), "Violation of: divisor is not zero");
        let digits = digits_of(self);
        let mut quotient = self.new_instance();
        let mut remainder = self.new_instance();
        for &digit in digits.iter().rev() {
            remainder.multiply_by_radix(digit);
            let mut q = 0;
            while remainder.compare_to(divisor) != Ordering::Less {
                remainder.subtract(divisor);
                q += 1;
            }
            quotient.multiply_by_radix(q);
        }
        self.transfer_from(&mut quotient);
        remainder
    }

    /// self ← self ^ exponent by repeated squaring; 0^0 = 1.
    fn power(&mut self, exponent: u32) {
        let mut base = self.new_instance();
        base.transfer_from(self);
        let mut result = Self::from_u64(1);
        let mut p = exponent;
        while p > 0 {
            if p & 1 == 1 {
                result.multiply(&base);
            }
            p >>= 1;
            if p > 0 {
                let factor = base.clone();
                base.multiply(&factor);
            }
        }
        self.transfer_from(&mut result);
    }

    /// self ← ⌊self^(1/degree)⌋ by interval halving over [0, self + 1].
    ///
    /// `low_enough` is always at most the true root and `too_high` always above
    /// it; the search stops once they are adjacent.
    ///
    /// # Panics
    /// If `degree < 2`.
    fn root(&mut self, degree: u32) {
        assert!(degree >= 2, "Violation of: degree >= 2");
        let one = Self::from_u64(1);
        let two = Self::from_u64(2);

        let mut upper_limit = self.clone();
        upper_limit.increment();

        let mut low_enough = self.new_instance();
        let mut too_high = upper_limit.clone();
        let mut width = too_high.clone();

        let mut steps = 0u32;
        while width.compare_to(&one) == Ordering::Greater {
            width.divide(&two);
            let mut guess = low_enough.clone();
            guess.add(&width);

            if power_is_below(&guess, degree, &upper_limit) {
                low_enough.transfer_from(&mut guess);
            } else {
                too_high.transfer_from(&mut guess);
            }

            width.copy_from(&too_high);
            width.subtract(&low_enough);
            steps += 1;
        }
        trace!(
            "root({}, {}) = {} after {} halvings",
            self.to_decimal(),
            degree,
            low_enough.to_decimal(),
            steps
        );
        self.transfer_from(&mut low_enough);
    }
}

impl<T: NaturalNumberKernel> NaturalNumber for T {}

/// base^degree < limit, without building powers much larger than `limit`.
///
/// For base >= 2 the running product passes `limit` within log2(limit) + 1
/// multiplications, so an enormous degree costs nothing extra.
fn power_is_below<N: NaturalNumber>(base: &N, degree: u32, limit: &N) -> bool {
    let one = N::from_u64(1);
    if base.compare_to(&one) != Ordering::Greater {
        // 0^d = 0 and 1^d = 1 for d >= 1
        return base.compare_to(limit) == Ordering::Less;
    }
    let mut product = one;
    for _ in 0..degree {
        product.multiply(base);
        if product.compare_to(limit) != Ordering::Less {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::DigitVec;

    fn nn(s: &str) -> DigitVec {
        DigitVec::from_decimal(s).unwrap()
    }

    #[test]
    fn test_canonical_decimal() {
        assert!(is_canonical_decimal("0"));
        assert!(is_canonical_decimal("2147483647"));
        assert!(!is_canonical_decimal(""));
        assert!(!is_canonical_decimal("00"));
        assert!(!is_canonical_decimal("012"));
        assert!(!is_canonical_decimal("-5"));
        assert!(!is_canonical_decimal("+5"));
        assert!(!is_canonical_decimal("1 2"));
        assert!(!is_canonical_decimal("１２"));
    }

    #[test]
    fn test_from_i64_rejects_negative() {
        assert_eq!(DigitVec::from_i64(-1), Err(NaturalNumberError::NegativeInteger(-1)));
        assert_eq!(DigitVec::from_i64(2134).unwrap(), nn("2134"));
    }

    #[test]
    fn test_set_from_decimal_keeps_value_on_error() {
        let mut n = nn("65");
        assert!(n.set_from_decimal("6x5").is_err());
        assert_eq!(n.to_decimal(), "65");
    }

    #[test]
    fn test_increment_and_decrement_across_carries() {
        let mut n = nn("999");
        n.increment();
        assert_eq!(n.to_decimal(), "1000");
        n.decrement();
        assert_eq!(n.to_decimal(), "999");

        let mut z = DigitVec::default();
        z.increment();
        assert_eq!(z.to_decimal(), "1");
        z.decrement();
        assert!(z.is_zero());
    }

    #[test]
    #[should_panic(expected = "Violation of: self > 0")]
    fn test_decrement_zero_panics() {
        DigitVec::default().decrement();
    }

    #[test]
    fn test_add_with_carry_chain() {
        let mut n = nn("99999999999999999999999999999999");
        n.add(&nn("999999999999999999999"));
        assert_eq!(n.to_decimal(), "100000000000999999999999999999998");
    }

    #[test]
    fn test_subtract_with_borrow_chain() {
        let mut n = nn("100000000000000000000");
        n.subtract(&nn("1"));
        assert_eq!(n.to_decimal(), "99999999999999999999");
        n.subtract(&nn("99999999999999999999"));
        assert!(n.is_zero());
    }

    #[test]
    #[should_panic(expected = "Violation of: other <= self")]
    fn test_subtract_larger_panics() {
        let mut n = nn("12");
        n.subtract(&nn("13"));
    }

    #[test]
    fn test_multiply() {
        let mut n = nn("123456789");
        n.multiply(&nn("987654321"));
        assert_eq!(n.to_decimal(), "121932631112635269");

        let mut z = nn("123");
        z.multiply(&DigitVec::default());
        assert!(z.is_zero());
    }

    #[test]
    fn test_divide_by_radix_sized_divisor() {
        let mut n = nn("98453147");
        let r = n.divide(&nn("10"));
        assert_eq!(n.to_decimal(), "9845314");
        assert_eq!(r.to_decimal(), "7");
    }

    #[test]
    fn test_divide_smaller_dividend() {
        let mut n = nn("7");
        let r = n.divide(&nn("300"));
        assert!(n.is_zero());
        assert_eq!(r.to_decimal(), "7");
    }

    #[test]
    #[should_panic(expected = "Violation of: divisor is not zero")]
    fn test_divide_by_zero_panics() {
        let mut n = nn("7");
        n.divide(&DigitVec::default());
    }

    #[test]
    fn test_power() {
        let mut n = nn("2");
        n.power(100);
        assert_eq!(n.to_decimal(), "1267650600228229401496703205376");

        let mut z = DigitVec::default();
        z.power(0);
        assert_eq!(z.to_decimal(), "1");

        let mut z = DigitVec::default();
        z.power(3);
        assert!(z.is_zero());
    }

    #[test]
    fn test_root_examples() {
        let cases = [
            ("0", 2, "0"),
            ("1", 2, "1"),
            ("13", 2, "3"),
            ("1024", 2, "32"),
            ("189943527", 2, "13782"),
            ("189943527", 3, "574"),
            ("4096", 3, "16"),
            ("189943527", 15, "3"),
            ("82", 5, "2"),
            ("143489073", 15, "3"),
            ("2147483648", 2, "46340"),
            ("9223372036854775807", 3, "2097151"),
            ("9223372036854775808", 3, "2097152"),
            ("618970019642690137449562111", 4, "4987896"),
            ("162259276829213363391578010288127", 5, "2767208"),
            ("170141183460469231731687303715884105727", 6, "2353973"),
        ];
        for (n, r, expected) in cases.iter() {
            let mut value = nn(n);
            value.root(*r);
            assert_eq!(value.to_decimal(), *expected, "root({}, {})", n, r);
        }
    }

    #[test]
    fn test_root_with_huge_degree_terminates() {
        let mut n = nn("1000000");
        n.root(i32::MAX as u32);
        assert_eq!(n.to_decimal(), "1");
    }

    #[test]
    #[should_panic(expected = "Violation of: degree >= 2")]
    fn test_root_degree_one_panics() {
        nn("9").root(1);
    }

    #[test]
    fn test_to_int_bounds() {
        assert_eq!(nn("2147483647").to_int(), i32::MAX);
        assert!(nn("2147483647").can_convert_to_int());
        assert!(!nn("2147483648").can_convert_to_int());
        assert_eq!(nn("18446744073709551615").to_u64(), Some(u64::MAX));
        assert_eq!(nn("18446744073709551616").to_u64(), None);
    }

    #[test]
    #[should_panic(expected = "Violation of")]
    fn test_to_int_overflow_panics() {
        nn("2147483648").to_int();
    }

    #[test]
    fn test_compare_to() {
        assert_eq!(nn("9").compare_to(&nn("10")), Ordering::Less);
        assert_eq!(nn("10").compare_to(&nn("9")), Ordering::Greater);
        assert_eq!(nn("4321").compare_to(&nn("4321")), Ordering::Equal);
        assert_eq!(nn("4311").compare_to(&nn("4321")), Ordering::Less);
    }
}
