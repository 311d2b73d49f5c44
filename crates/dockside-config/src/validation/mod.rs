//! Full configuration validation.
//!
//! Validates numeric ranges for every section and collects all errors into
//! a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::DocksideConfig;
use dockside_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DocksideConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_companion(&mut errors, config);
    sections::validate_timing(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
