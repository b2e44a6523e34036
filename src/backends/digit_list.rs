// src/backends/digit_list.rs

use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::str::FromStr;
use crate::core::arithmetic::NaturalNumber;
use crate::core::error::NaturalNumberError;
use crate::core::natural_number::{check_radix_digit, NaturalNumberKernel, RADIX};

struct DigitNode {
    digit: u8,
    next: Option<Box<DigitNode>>,
}

/// Natural number kept as a singly linked list of digits
///
/// The head holds the least significant digit, so multiply_by_radix and
/// divide_by_radix are O(1) pushes and pops at the front. The tail digit is
/// never zero; zero is the empty list.
///
/// Clone, equality and drop walk the list iteratively so a number with
/// millions of digits cannot overflow the stack.
#[derive(Default)]
pub struct DigitList {
    head: Option<Box<DigitNode>>,
    len: usize,
}

impl DigitList {
    pub fn new() -> Self {
        DigitList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Digits from least to most significant.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        iter::successors(self.head.as_deref(), |node| node.next.as_deref()).map(|node| node.digit)
    }

    fn push_front(&mut self, digit: u8) {
        let next = self.head.take();
        self.head = Some(Box::new(DigitNode { digit, next }));
        self.len += 1;
    }

    fn pop_front(&mut self) -> Option<u8> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            node.digit
        })
    }
}

impl NaturalNumberKernel for DigitList {
    fn multiply_by_radix(&mut self, digit: u32) {
        check_radix_digit(digit);
        if self.head.is_none() && digit == 0 {
            return;
        }
        self.push_front(digit as u8);
    }

    fn divide_by_radix(&mut self) -> u32 {
        self.pop_front().map_or(0, u32::from)
    }

    fn is_zero(&self) -> bool {
        self.head.is_none()
    }

    fn least_significant_digit(&self) -> u32 {
        self.head.as_ref().map_or(0, |node| u32::from(node.digit))
    }

    fn backend_name() -> &'static str {
        "DigitList"
    }
}

impl Clone for DigitList {
    fn clone(&self) -> Self {
        let digits: Vec<u8> = self.iter().collect();
        let mut copy = DigitList::new();
        for &digit in digits.iter().rev() {
            copy.push_front(digit);
        }
        copy
    }
}

impl PartialEq for DigitList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for DigitList {}

impl Drop for DigitList {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl FromStr for DigitList {
    type Err = NaturalNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl PartialOrd for DigitList {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DigitList {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl fmt::Display for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }
        let text: String = self
            .iter()
            .collect::<Vec<u8>>()
            .into_iter()
            .rev()
            .filter_map(|d| std::char::from_digit(u32::from(d), RADIX))
            .collect();
        write!(f, "{}", text)
    }
}

impl fmt::Debug for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitList({})", self)
    }
}
