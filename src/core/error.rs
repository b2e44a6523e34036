// src/core/error.rs

use std::error::Error;
use std::fmt;

/// Invalid arguments handed to a natural number constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NaturalNumberError {
    /// A negative machine integer where a natural number was expected.
    NegativeInteger(i64),
    /// A string that is not the canonical decimal form of a natural number.
    MalformedDecimal(String),
}

impl fmt::Display for NaturalNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NaturalNumberError::NegativeInteger(n) => {
                write!(f, "invalid argument: {} is negative", n)
            }
            NaturalNumberError::MalformedDecimal(s) => {
                write!(f, "invalid argument: {:?} is not a canonical decimal natural number", s)
            }
        }
    }
}

impl Error for NaturalNumberError {}
