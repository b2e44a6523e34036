// src/backends/digit_string.rs

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use crate::core::arithmetic::NaturalNumber;
use crate::core::error::NaturalNumberError;
use crate::core::natural_number::{check_radix_digit, NaturalNumberKernel, RADIX};

/// Natural number kept as a `String` of ASCII decimal digits
///
/// Most significant digit first, so the least significant digit sits at the
/// end of the string and both radix primitives are a `push` or a `pop`.
/// Zero is the empty string.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    pub fn new() -> Self {
        DigitString(String::new())
    }

    /// Raw digit store; empty for zero.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl NaturalNumberKernel for DigitString {
    fn multiply_by_radix(&mut self, digit: u32) {
        check_radix_digit(digit);
        if self.0.is_empty() && digit == 0 {
            return;
        }
        self.0.push(char::from(b'0' + digit as u8));
    }

    fn divide_by_radix(&mut self) -> u32 {
        self.0.pop().and_then(|c| c.to_digit(RADIX)).unwrap_or(0)
    }

    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    fn least_significant_digit(&self) -> u32 {
        self.0.as_bytes().last().map_or(0, |&b| u32::from(b - b'0'))
    }

    fn backend_name() -> &'static str {
        "DigitString"
    }
}

impl FromStr for DigitString {
    type Err = NaturalNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl PartialOrd for DigitString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DigitString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Debug for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitString({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_is_canonical() {
        let mut n = DigitString::new();
        n.multiply_by_radix(0);
        assert_eq!(n.digits(), "");
        n.multiply_by_radix(7);
        n.multiply_by_radix(0);
        assert_eq!(n.digits(), "70");
        assert_eq!(n.to_string(), "70");
    }

    #[test]
    fn test_divide_by_radix_drains_to_empty() {
        let mut n: DigitString = "365".parse().unwrap();
        assert_eq!(n.divide_by_radix(), 5);
        assert_eq!(n.divide_by_radix(), 6);
        assert_eq!(n.divide_by_radix(), 3);
        assert!(n.is_zero());
        assert_eq!(n.divide_by_radix(), 0);
        assert_eq!(n.digits(), "");
    }

    #[test]
    fn test_numeric_not_lexicographic_order() {
        let nine: DigitString = "9".parse().unwrap();
        let ten: DigitString = "10".parse().unwrap();
        assert!(nine < ten);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", DigitString::new()), "DigitString(0)");
    }
}
