//! Changelog types

use chrono::NaiveDate;
use serde::Serialize;

use taglog_core::ReleasePattern;

/// One entry of the decorated history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    /// Full 40-character commit hash
    pub id: String,
    /// Tag names in decoration order (branch and HEAD labels excluded)
    pub tags: Vec<String>,
    /// Calendar date of the commit in its own UTC offset
    pub date: NaiveDate,
    /// First line of the commit message
    pub message: String,
}

impl Commit {
    /// The release this commit introduces: the last tag matching `pattern`
    pub fn version(&self, pattern: &ReleasePattern) -> Option<&str> {
        self.tags
            .iter()
            .rev()
            .find(|tag| pattern.is_release(tag))
            .map(String::as_str)
    }

    /// Pair this commit with its derived version
    pub fn with_version<'a>(&'a self, pattern: &ReleasePattern) -> VersionedCommit<'a> {
        VersionedCommit {
            commit: self,
            version: self.version(pattern),
        }
    }
}

/// A commit together with the release it introduces, for structured output
#[derive(Debug, Clone, Serialize)]
pub struct VersionedCommit<'a> {
    #[serde(flatten)]
    pub commit: &'a Commit,
    pub version: Option<&'a str>,
}
