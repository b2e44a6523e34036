// src/calculator/mod.rs
//
// Two-register calculator controller. `top` and `bottom` are the registers;
// every event is applied to them through kernel and secondary operations, and
// the result of a binary operation always lands in `bottom`.

use log::debug;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::mem;
use crate::core::arithmetic::{NaturalNumber, INT_LIMIT};
use crate::core::natural_number::RADIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorEvent {
    Clear,
    Swap,
    Enter,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Root,
    AddDigit(u32),
}

impl CalculatorEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CalculatorEvent::Clear => "clear",
            CalculatorEvent::Swap => "swap",
            CalculatorEvent::Enter => "enter",
            CalculatorEvent::Add => "add",
            CalculatorEvent::Subtract => "subtract",
            CalculatorEvent::Multiply => "multiply",
            CalculatorEvent::Divide => "divide",
            CalculatorEvent::Power => "power",
            CalculatorEvent::Root => "root",
            CalculatorEvent::AddDigit(_) => "add-digit",
        }
    }
}

/// Which of the guarded operations the current registers allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllowedOperations {
    pub subtract: bool,
    pub divide: bool,
    pub power: bool,
    pub root: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The event's legality predicate is false for the current registers.
    OperationNotAllowed(&'static str),
    /// A digit outside `0..RADIX`.
    InvalidDigit(u32),
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::OperationNotAllowed(op) => {
                write!(f, "{} is not allowed for the current registers", op)
            }
            CalculatorError::InvalidDigit(d) => write!(f, "{} is not a decimal digit", d),
        }
    }
}

impl Error for CalculatorError {}

#[derive(Debug, Clone, Default)]
pub struct Calculator<N> {
    top: N,
    bottom: N,
}

impl<N: NaturalNumber> Calculator<N> {
    pub fn new() -> Self {
        Calculator {
            top: N::default(),
            bottom: N::default(),
        }
    }

    pub fn with_registers(top: N, bottom: N) -> Self {
        Calculator { top, bottom }
    }

    pub fn top(&self) -> &N {
        &self.top
    }

    pub fn bottom(&self) -> &N {
        &self.bottom
    }

    /// divide iff bottom ≠ 0; subtract iff bottom ≤ top; power iff
    /// bottom ≤ i32::MAX; root iff 2 ≤ bottom ≤ i32::MAX.
    pub fn allowed_operations(&self) -> AllowedOperations {
        let two = N::from_u64(2);
        let int_limit = N::from_u64(INT_LIMIT);
        let fits_int = self.bottom.compare_to(&int_limit) != Ordering::Greater;
        AllowedOperations {
            subtract: self.bottom.compare_to(&self.top) != Ordering::Greater,
            divide: !self.bottom.is_zero(),
            power: fits_int,
            root: fits_int && self.bottom.compare_to(&two) != Ordering::Less,
        }
    }

    pub fn process(&mut self, event: CalculatorEvent) -> Result<(), CalculatorError> {
        self.check_allowed(event)?;
        debug!(
            "calculator {}: top={} bottom={}",
            event.name(),
            self.top.to_decimal(),
            self.bottom.to_decimal()
        );

        match event {
            CalculatorEvent::Clear => self.bottom.clear(),
            CalculatorEvent::Swap => {
                let mut temp = self.top.new_instance();
                temp.transfer_from(&mut self.top);
                self.top.transfer_from(&mut self.bottom);
                self.bottom.transfer_from(&mut temp);
            }
            CalculatorEvent::Enter => self.top.copy_from(&self.bottom),
            CalculatorEvent::Add => {
                self.bottom.add(&self.top);
                self.top.clear();
            }
            CalculatorEvent::Subtract => {
                self.top.subtract(&self.bottom);
                self.bottom.transfer_from(&mut self.top);
            }
            CalculatorEvent::Multiply => {
                self.bottom.multiply(&self.top);
                self.top.clear();
            }
            CalculatorEvent::Divide => {
                let mut remainder = self.top.divide(&self.bottom);
                self.bottom.transfer_from(&mut self.top);
                self.top.transfer_from(&mut remainder);
            }
            CalculatorEvent::Power => {
                let exponent = self.bottom.to_int() as u32;
                self.top.power(exponent);
                self.bottom.transfer_from(&mut self.top);
            }
            CalculatorEvent::Root => {
                let degree = self.bottom.to_int() as u32;
                self.top.root(degree);
                self.bottom.transfer_from(&mut self.top);
            }
            CalculatorEvent::AddDigit(digit) => self.bottom.multiply_by_radix(digit),
        }
        Ok(())
    }

    /// Hands back both registers, leaving the calculator cleared.
    pub fn take_registers(&mut self) -> (N, N) {
        (mem::take(&mut self.top), mem::take(&mut self.bottom))
    }

    fn check_allowed(&self, event: CalculatorEvent) -> Result<(), CalculatorError> {
        let allowed = self.allowed_operations();
        let permitted = match event {
            CalculatorEvent::Subtract => allowed.subtract,
            CalculatorEvent::Divide => allowed.divide,
            CalculatorEvent::Power => allowed.power,
            CalculatorEvent::Root => allowed.root,
            CalculatorEvent::AddDigit(digit) if digit >= RADIX => {
                return Err(CalculatorError::InvalidDigit(digit));
            }
            _ => true,
        };
        if permitted {
            Ok(())
        } else {
            Err(CalculatorError::OperationNotAllowed(event.name()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::DigitVec;

    fn calc(top: u64, bottom: u64) -> Calculator<DigitVec> {
        Calculator::with_registers(DigitVec::from_u64(top), DigitVec::from_u64(bottom))
    }

    #[test]
    fn test_allowed_operations() {
        let c = calc(5, 0);
        assert_eq!(
            c.allowed_operations(),
            AllowedOperations { subtract: true, divide: false, power: true, root: false }
        );

        let c = calc(5, 7);
        let allowed = c.allowed_operations();
        assert!(!allowed.subtract);
        assert!(allowed.divide);
        assert!(allowed.root);

        let c = Calculator::with_registers(DigitVec::from_u64(1), DigitVec::from_u64(INT_LIMIT + 1));
        let allowed = c.allowed_operations();
        assert!(!allowed.power);
        assert!(!allowed.root);
    }

    #[test]
    fn test_swap_moves_without_copying() {
        let mut c = calc(12, 34);
        c.process(CalculatorEvent::Swap).unwrap();
        assert_eq!(c.top(), &DigitVec::from_u64(34));
        assert_eq!(c.bottom(), &DigitVec::from_u64(12));
    }

    #[test]
    fn test_divide_leaves_quotient_and_remainder() {
        let mut c = calc(17, 5);
        c.process(CalculatorEvent::Divide).unwrap();
        assert_eq!(c.bottom(), &DigitVec::from_u64(3));
        assert_eq!(c.top(), &DigitVec::from_u64(2));
    }

    #[test]
    fn test_disallowed_operation_leaves_registers() {
        let mut c = calc(3, 9);
        assert_eq!(
            c.process(CalculatorEvent::Subtract),
            Err(CalculatorError::OperationNotAllowed("subtract"))
        );
        assert_eq!(c.top(), &DigitVec::from_u64(3));
        assert_eq!(c.bottom(), &DigitVec::from_u64(9));
    }

    #[test]
    fn test_invalid_digit() {
        let mut c = calc(0, 4);
        assert_eq!(c.process(CalculatorEvent::AddDigit(10)), Err(CalculatorError::InvalidDigit(10)));
        c.process(CalculatorEvent::AddDigit(2)).unwrap();
        assert_eq!(c.bottom(), &DigitVec::from_u64(42));
    }
}
