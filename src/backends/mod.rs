// src/backends/mod.rs

pub mod digit_string;
pub mod digit_vec;
pub mod digit_list;
pub mod bigint_backend;

pub use digit_string::DigitString;
pub use digit_vec::DigitVec;
pub use digit_list::DigitList;
pub use bigint_backend::BigUintBackend;
