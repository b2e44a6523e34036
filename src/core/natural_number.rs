// src/core/natural_number.rs

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::mem;

/// Numeral base of every digit store.
pub const RADIX: u32 = 10;

/// Kernel trait for natural number digit stores
///
/// This trait abstracts over different digit representations so that the
/// secondary arithmetic layer ([`crate::core::arithmetic::NaturalNumber`]) can
/// be written once against these primitives and reused by every backend.
///
/// Implementations:
/// - DigitString: ASCII digits in a `String`, most significant first
/// - DigitVec: `Vec<u8>` digits, most significant first
/// - DigitList: singly linked list, least significant digit at the head
/// - BigUintBackend: `num::BigUint`
///
/// Every implementation keeps its store canonical: no leading zero digit, and
/// zero is the empty store. Equality is therefore value equality.
pub trait NaturalNumberKernel: Clone + Debug + Default + Eq + Sized + Send + Sync {
    /// value ← value * RADIX + digit
    ///
    /// # Panics
    /// If `digit >= RADIX`.
    fn multiply_by_radix(&mut self, digit: u32);

    /// Removes and returns the least significant digit. Zero stays zero and
    /// yields 0.
    fn divide_by_radix(&mut self) -> u32;

    /// Check if value is zero
    fn is_zero(&self) -> bool;

    /// The digit `divide_by_radix` would return, leaving `self` untouched.
    fn least_significant_digit(&self) -> u32;

    /// Backend type name for debugging/logging
    fn backend_name() -> &'static str;

    /// Resets to zero, releasing the previous digits.
    fn clear(&mut self) {
        *self = Self::default();
    }

    /// A zero of the same representation, for scratch storage.
    fn new_instance(&self) -> Self {
        Self::default()
    }

    /// Deep copy of `source` into `self`; `source` is left untouched.
    fn copy_from(&mut self, source: &Self) {
        self.clone_from(source);
    }

    /// Moves the digit store of `source` into `self` and leaves `source` zero.
    fn transfer_from(&mut self, source: &mut Self) {
        *self = mem::take(source);
    }
}

pub(crate) fn check_radix_digit(digit: u32) {
    assert!(digit < RADIX, "Violation of: 0 <= digit < {}, got {}", RADIX, digit);
}

/// Backend type selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendType {
    DigitString,
    DigitVec,
    DigitList,
    BigUint,
}

impl BackendType {
    pub fn name(&self) -> &'static str {
        match self {
            BackendType::DigitString => "DigitString",
            BackendType::DigitVec => "DigitVec",
            BackendType::DigitList => "DigitList",
            BackendType::BigUint => "BigUint",
        }
    }
}

impl Default for BackendType {
    fn default() -> Self {
        BackendType::DigitString
    }
}
