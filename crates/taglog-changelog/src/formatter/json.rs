//! JSON changelog formatter

use tracing::debug;

use taglog_core::ReleasePattern;

use super::ChangelogFormatter;
use crate::types::{Commit, VersionedCommit};

/// Emits the parsed commits, each with its derived version, as a JSON array
pub struct JsonFormatter {
    pub release_pattern: ReleasePattern,
}

impl JsonFormatter {
    pub fn new(release_pattern: ReleasePattern) -> Self {
        Self { release_pattern }
    }
}

impl ChangelogFormatter for JsonFormatter {
    fn format(&self, commits: &[Commit]) -> String {
        let records: Vec<VersionedCommit<'_>> = commits
            .iter()
            .map(|c| c.with_version(&self.release_pattern))
            .collect();

        let mut output =
            serde_json::to_string_pretty(&records).expect("commit records serialize to JSON");
        output.push('\n');
        debug!(output_len = output.len(), "json changelog formatted");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_json() {
        let commits = vec![
            Commit {
                id: "44be5d95e4a919f229b7867a464437eb259396e3".to_string(),
                tags: vec!["latest".to_string(), "1.3.7".to_string()],
                date: NaiveDate::from_ymd_opt(2019, 12, 5).unwrap(),
                message: "Added completion".to_string(),
            },
            Commit {
                id: "f7578da9c4f05617cd167d31b6aefc52d240f461".to_string(),
                tags: vec![],
                date: NaiveDate::from_ymd_opt(2019, 12, 3).unwrap(),
                message: "Fixed unit test".to_string(),
            },
        ];

        let output = JsonFormatter::new(ReleasePattern::default()).format(&commits);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["version"], "1.3.7");
        assert_eq!(value[1]["version"], serde_json::Value::Null);
        assert_eq!(value[1]["message"], "Fixed unit test");
    }

    #[test]
    fn test_format_json_empty() {
        let output = JsonFormatter::new(ReleasePattern::default()).format(&[]);
        assert_eq!(output, "[]\n");
    }
}
