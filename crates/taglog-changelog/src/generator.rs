//! Changelog generation

use tracing::{debug, info, instrument};

use taglog_core::config::ChangelogConfig;
use taglog_core::{ChangelogError, ConfigError};

use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::parser::{DecoratedLogParser, LogParser};
use crate::types::Commit;

/// Changelog generator: raw history text in, formatted document out
pub struct ChangelogGenerator {
    parser: Box<dyn LogParser>,
    formatter: Box<dyn ChangelogFormatter>,
}

impl ChangelogGenerator {
    /// Create a generator with the decorated log parser and a markdown
    /// formatter built from `config`
    pub fn new(config: &ChangelogConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            parser: Box::new(DecoratedLogParser::new()),
            formatter: Box::new(MarkdownFormatter::from_config(config)?),
        })
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Parse raw history text into commits
    pub fn parse(&self, raw: &str) -> Result<Vec<Commit>, ChangelogError> {
        self.parser.parse(raw)
    }

    /// Format commits into a changelog document
    pub fn format(&self, commits: &[Commit]) -> String {
        self.formatter.format(commits)
    }

    /// Parse and format in one step
    #[instrument(skip(self, raw), fields(bytes = raw.len()))]
    pub fn generate(&self, raw: &str) -> Result<String, ChangelogError> {
        let commits = self.parse(raw)?;
        info!(commit_count = commits.len(), "generating changelog");
        let output = self.format(&commits);
        debug!(output_len = output.len(), "changelog formatted");
        Ok(output)
    }
}
