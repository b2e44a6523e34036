// src/core/mod.rs

pub mod arithmetic;
pub mod error;
pub mod natural_number;
pub mod static_random;

pub use arithmetic::NaturalNumber;
pub use error::NaturalNumberError;
pub use natural_number::{BackendType, NaturalNumberKernel, RADIX};
