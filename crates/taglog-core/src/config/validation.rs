//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    config.changelog.release_pattern().map_err(|e| ConfigError::InvalidValue {
        field: "changelog.tag_pattern".to_string(),
        message: e.to_string(),
    })?;

    if config.changelog.title.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.title".to_string(),
            message: "title cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
