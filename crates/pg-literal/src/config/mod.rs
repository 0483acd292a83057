//! Codec configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use crate::error::ConfigError;
use tracing::debug;

impl CodecConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: CodecConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        debug!(
            array_delimiter = %config.array_delimiter,
            case_insensitive_empty = config.case_insensitive_empty,
            "loaded codec configuration"
        );
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate(self)
    }
}
