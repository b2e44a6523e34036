// src/backends/bigint_backend.rs

use num::{BigUint, Integer, Zero};
use std::fmt;
use std::str::FromStr;
use crate::core::arithmetic::NaturalNumber;
use crate::core::error::NaturalNumberError;
use crate::core::natural_number::{check_radix_digit, NaturalNumberKernel, RADIX};

/// BigUint-backed natural number
///
/// The digit store is a `num::BigUint`; the radix primitives are a multiply-add
/// and a div-rem by ten. Every secondary operation still goes through those
/// primitives, which makes this backend the reference the others are checked
/// against rather than a fast path.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigUintBackend(BigUint);

impl BigUintBackend {
    pub fn new(value: BigUint) -> Self {
        BigUintBackend(value)
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }
}

impl NaturalNumberKernel for BigUintBackend {
    fn multiply_by_radix(&mut self, digit: u32) {
        check_radix_digit(digit);
        self.0 *= RADIX;
        self.0 += digit;
    }

    fn divide_by_radix(&mut self) -> u32 {
        let (quotient, remainder) = self.0.div_rem(&BigUint::from(RADIX));
        self.0 = quotient;
        remainder.iter_u32_digits().next().unwrap_or(0)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn least_significant_digit(&self) -> u32 {
        (&self.0 % RADIX).iter_u32_digits().next().unwrap_or(0)
    }

    fn backend_name() -> &'static str {
        "BigUint"
    }
}

impl FromStr for BigUintBackend {
    type Err = NaturalNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl fmt::Display for BigUintBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for BigUintBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUintBackend({})", self.0)
    }
}

impl From<BigUint> for BigUintBackend {
    fn from(n: BigUint) -> Self {
        BigUintBackend(n)
    }
}

impl From<BigUintBackend> for BigUint {
    fn from(b: BigUintBackend) -> Self {
        b.0
    }
}
