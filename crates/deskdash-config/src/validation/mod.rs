//! Full configuration validation.
//!
//! Validates numeric ranges, window id syntax, and cross-references
//! between the menu, catalog, and initial window list. Errors from every
//! section are collected into a single `ConfigError`.

mod helpers;
mod relay;
mod windows;


use crate::schema::DeskdashConfig;
use deskdash_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DeskdashConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    windows::validate_windows(&mut errors, config);
    windows::validate_menu(&mut errors, config);
    windows::validate_catalog(&mut errors, config);
    relay::validate_relay(&mut errors, config);
    relay::validate_activity(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
