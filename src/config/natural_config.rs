// src/config/natural_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;
use crate::core::natural_number::BackendType;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaturalConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Digit store used by the command line front end
    pub backend: BackendType,

    /// Primality testing
    pub primality: PrimalityConfig,
}

/// Primality testing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimalityConfig {
    /// Random witnesses per likely-prime check (default: 50)
    pub witness_rounds: usize,

    /// Fixed RNG seed for reproducible runs; fresh entropy when absent
    pub seed: Option<u64>,
}

impl Default for NaturalConfig {
    fn default() -> Self {
        NaturalConfig {
            log_level: "info".to_string(),
            backend: BackendType::default(),
            primality: PrimalityConfig::default(),
        }
    }
}

impl Default for PrimalityConfig {
    fn default() -> Self {
        PrimalityConfig {
            witness_rounds: 50,
            seed: None,
        }
    }
}

impl NaturalConfig {
    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("backend", "digit_string")?
            .set_default("primality.witness_rounds", 50)
    }

    fn with_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        // Override with environment variables (prefix: NATURALNUM_, nesting: __)
        builder.add_source(
            Environment::with_prefix("NATURALNUM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
    }

    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("naturalnum.toml").exists() {
            builder = builder.add_source(File::with_name("naturalnum.toml"));
        } else if Path::new("naturalnum.yaml").exists() {
            builder = builder.add_source(File::with_name("naturalnum.yaml"));
        }

        Self::with_environment(builder).build()?.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::with_environment(builder).build()?.try_deserialize()
    }
}
