//! taglog Changelog - Changelog generation from decorated git history
//!
//! This crate parses `git log --decorate` output into commits and renders
//! them as a changelog grouped by release tag.

pub mod formatter;
pub mod generator;
pub mod parser;
pub mod types;

pub use formatter::{ChangelogFormatter, JsonFormatter, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use parser::{DecoratedLogParser, LogParser};
pub use types::{Commit, VersionedCommit};
