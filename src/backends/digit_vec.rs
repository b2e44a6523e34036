// src/backends/digit_vec.rs

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use crate::core::arithmetic::NaturalNumber;
use crate::core::error::NaturalNumberError;
use crate::core::natural_number::{check_radix_digit, NaturalNumberKernel, RADIX};

/// Natural number kept as an array of digits
///
/// One `u8` per decimal digit, most significant first. The vector never starts
/// with a zero; zero itself is the empty vector.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitVec(Vec<u8>);

impl DigitVec {
    pub fn new() -> Self {
        DigitVec(Vec::new())
    }

    /// Number of stored digits (0 for zero).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl NaturalNumberKernel for DigitVec {
    fn multiply_by_radix(&mut self, digit: u32) {
        check_radix_digit(digit);
        if self.0.is_empty() && digit == 0 {
            return;
        }
        self.0.push(digit as u8);
    }

    fn divide_by_radix(&mut self) -> u32 {
        self.0.pop().map_or(0, u32::from)
    }

    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    fn least_significant_digit(&self) -> u32 {
        self.0.last().map_or(0, |&d| u32::from(d))
    }

    fn backend_name() -> &'static str {
        "DigitVec"
    }

    fn copy_from(&mut self, source: &Self) {
        self.0.clear();
        self.0.extend_from_slice(&source.0);
    }
}

impl FromStr for DigitVec {
    type Err = NaturalNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl PartialOrd for DigitVec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DigitVec {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl fmt::Display for DigitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "0");
        }
        for &digit in &self.0 {
            match std::char::from_digit(u32::from(digit), RADIX) {
                Some(c) => write!(f, "{}", c)?,
                None => return Err(fmt::Error),
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DigitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitVec({})", self)
    }
}
