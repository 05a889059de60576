//! Changelog formatters

mod json;
mod markdown;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;

use crate::types::Commit;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format commits, in the order given, into a changelog document
    fn format(&self, commits: &[Commit]) -> String;
}
