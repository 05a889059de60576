//! Parser for `git log --decorate` output
//!
//! Each entry of the default (`medium`) log format looks like:
//!
//! ```text
//! commit 44be5d95e4a919f229b7867a464437eb259396e3 (HEAD -> master, tag: 1.3.7)
//! Author: Jane Doe <jane@example.com>
//! Date:   Thu Dec 5 21:34:21 2019 +0100
//!
//!     Added completion on templates and themes
//! ```

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

use super::LogParser;
use crate::types::Commit;
use taglog_core::ChangelogError;

/// Regex matching one log entry up to the first line of its message.
///
/// Header lines are never blank, so an entry cannot extend past the blank
/// line ending its header. The message is optional for commits made with
/// `--allow-empty-message`.
static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xm)
        ^commit [\ \t]+ (?P<id>[[:xdigit:]]{40}) [\ \t]*
        (?P<decorations>\(.*\))?
        (?:\n.+)*?
        \nDate: [\ \t]+ (?P<date>.*) \n
        (?:\n [\ \t]+ (?P<message>.*))?
        ",
    )
    .expect("Invalid log entry regex")
});

/// Layout of git's default date format, after whitespace normalization
const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y %z";

/// Prefix git puts on tag decorations
const TAG_PREFIX: &str = "tag: ";

/// Parser for decorated `git log` output
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoratedLogParser;

impl DecoratedLogParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Extract tag names from a `(HEAD -> main, tag: v1.0, origin/main)` list
    fn parse_tags(decorations: &str) -> Vec<String> {
        let inner = decorations
            .strip_prefix('(')
            .and_then(|d| d.strip_suffix(')'))
            .unwrap_or(decorations);

        inner
            .split(", ")
            .filter_map(|part| part.strip_prefix(TAG_PREFIX))
            .map(str::to_string)
            .collect()
    }

    /// Reduce a git date line to its calendar date in its own offset.
    ///
    /// The weekday must agree with the date; git always writes a consistent
    /// one, so a mismatch means the log was edited by hand.
    fn parse_date(date: &str) -> Result<NaiveDate, ChangelogError> {
        // git pads the day of month; collapse runs of whitespace first
        let normalized = date.split_whitespace().collect::<Vec<_>>().join(" ");

        DateTime::parse_from_str(&normalized, DATE_FORMAT)
            .map(|timestamp| timestamp.date_naive())
            .map_err(|source| ChangelogError::MalformedDate {
                date: date.to_string(),
                source,
            })
    }
}

impl LogParser for DecoratedLogParser {
    #[instrument(skip(self, raw), fields(bytes = raw.len()))]
    fn parse(&self, raw: &str) -> Result<Vec<Commit>, ChangelogError> {
        let commits = ENTRY_REGEX
            .captures_iter(raw)
            .map(|caps| -> Result<Commit, ChangelogError> {
                let tags = caps
                    .name("decorations")
                    .map(|d| Self::parse_tags(d.as_str()))
                    .unwrap_or_default();

                Ok(Commit {
                    id: caps["id"].to_string(),
                    tags,
                    date: Self::parse_date(&caps["date"])?,
                    message: caps
                        .name("message")
                        .map_or("", |m| m.as_str().trim())
                        .to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(commit_count = commits.len(), "parsed decorated log");
        Ok(commits)
    }
}
