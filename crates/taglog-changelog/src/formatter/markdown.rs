//! Markdown changelog formatter

use tracing::{debug, instrument};

use taglog_core::config::ChangelogConfig;
use taglog_core::{ConfigError, ReleasePattern};

use super::ChangelogFormatter;
use crate::types::Commit;

/// Markdown changelog formatter.
///
/// Commits are walked in order; a commit carrying a release tag gets a
/// `## Release` heading right before its own bullet, so every commit below
/// a heading (until the next one) belongs to that release.
pub struct MarkdownFormatter {
    /// Pattern deciding which tags open a release section
    pub release_pattern: ReleasePattern,
    /// Include the release commit's date in headings
    pub include_dates: bool,
    /// Document title
    pub title: String,
}

impl MarkdownFormatter {
    /// Build a formatter from changelog configuration
    pub fn from_config(config: &ChangelogConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            release_pattern: config.release_pattern()?,
            include_dates: config.include_dates,
            title: config.title.clone(),
        })
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(
        skip(self, commits),
        fields(
            commit_count = commits.len(),
            tag_pattern = self.release_pattern.as_str(),
            include_dates = self.include_dates
        )
    )]
    fn format(&self, commits: &[Commit]) -> String {
        let mut output = format!("# {}\n", self.title);

        // Unreleased commits on top are separated from the title
        if commits
            .first()
            .is_some_and(|c| c.version(&self.release_pattern).is_none())
        {
            output.push('\n');
        }

        let mut releases = 0;
        for commit in commits {
            if let Some(version) = commit.version(&self.release_pattern) {
                releases += 1;
                if self.include_dates {
                    output.push_str(&format!("\n## Release {} ({})\n\n", version, commit.date));
                } else {
                    output.push_str(&format!("\n## Release {}\n\n", version));
                }
            }
            output.push_str(&format!("- {}\n", commit.message));
        }

        debug!(releases, output_len = output.len(), "markdown changelog formatted");
        output
    }
}
