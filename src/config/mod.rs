// src/config/mod.rs

pub mod natural_config;

// Re-export main types for convenience
pub use natural_config::{NaturalConfig, PrimalityConfig};
