//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::release::{ReleasePattern, DEFAULT_TAG_PATTERN};

/// Main configuration for taglog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Regex deciding which tags name a release
    pub tag_pattern: String,

    /// Whether release headings include the commit date
    pub include_dates: bool,

    /// Default output file (stdout when unset)
    pub file: Option<PathBuf>,

    /// Document title
    pub title: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            tag_pattern: DEFAULT_TAG_PATTERN.to_string(),
            include_dates: true,
            file: None,
            title: "Changelog".to_string(),
        }
    }
}

impl ChangelogConfig {
    /// Compile the configured release tag pattern
    pub fn release_pattern(&self) -> Result<ReleasePattern, ConfigError> {
        ReleasePattern::new(&self.tag_pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_changelog_config() {
        let config = ChangelogConfig::default();
        assert_eq!(config.tag_pattern, DEFAULT_TAG_PATTERN);
        assert!(config.include_dates);
        assert!(config.file.is_none());
        assert_eq!(config.title, "Changelog");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[changelog]\ninclude_dates = false\n").unwrap();
        assert!(!config.changelog.include_dates);
        assert_eq!(config.changelog.tag_pattern, DEFAULT_TAG_PATTERN);
    }

    #[test]
    fn test_release_pattern_from_config() {
        let config = ChangelogConfig {
            tag_pattern: r"^rel-\d+$".to_string(),
            ..Default::default()
        };
        let pattern = config.release_pattern().unwrap();
        assert!(pattern.is_release("rel-4"));
        assert!(!pattern.is_release("4.0.0"));
    }
}
