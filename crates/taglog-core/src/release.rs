//! Release tag pattern

use regex::Regex;

use crate::error::ConfigError;

/// Default pattern for release tags: optional `v`/`V` followed by a digit
pub const DEFAULT_TAG_PATTERN: &str = r"^(v|V)?\d+.*$";

/// Compiled pattern deciding which tags name a release
#[derive(Debug, Clone)]
pub struct ReleasePattern {
    regex: Regex,
}

impl ReleasePattern {
    /// Compile a release pattern
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidTagPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Check whether a tag names a release
    pub fn is_release(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }

    /// The source text of the pattern
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for ReleasePattern {
    fn default() -> Self {
        // The default pattern is a constant known to compile
        Self {
            regex: Regex::new(DEFAULT_TAG_PATTERN).expect("Invalid default tag regex"),
        }
    }
}
