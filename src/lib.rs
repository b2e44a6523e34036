// src/lib.rs

pub mod backends;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod core;
pub mod expression;
pub mod integer_math;

pub use crate::backends::{BigUintBackend, DigitList, DigitString, DigitVec};
pub use crate::core::{NaturalNumber, NaturalNumberError, NaturalNumberKernel};
