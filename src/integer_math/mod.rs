// src/integer_math/mod.rs

pub mod gcd;
pub mod modular;
pub mod primality;

pub use gcd::reduce_to_gcd;
pub use modular::{is_even, power_mod};
