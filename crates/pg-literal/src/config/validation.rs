//! Configuration validation.

use super::CodecConfig;
use crate::error::ConfigError;

/// Characters that already carry meaning inside array literals.
const RESERVED_DELIMITERS: &[char] = &['"', '\\', '{', '}'];

/// Validate the configuration.
pub fn validate(config: &CodecConfig) -> Result<(), ConfigError> {
    let delimiter = config.array_delimiter;

    if RESERVED_DELIMITERS.contains(&delimiter) {
        return Err(ConfigError::Invalid(format!(
            "array_delimiter cannot be {:?}: it is reserved by the array syntax",
            delimiter
        )));
    }

    if delimiter.is_whitespace() || delimiter.is_control() {
        return Err(ConfigError::Invalid(format!(
            "array_delimiter must be a visible character, got {:?}",
            delimiter
        )));
    }

    Ok(())
}
