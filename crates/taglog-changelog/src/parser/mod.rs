//! History parsing

mod decorated;

pub use decorated::DecoratedLogParser;

use taglog_core::ChangelogError;

use crate::types::Commit;

/// Trait for history parsers
pub trait LogParser: Send + Sync {
    /// Parse raw history text into commits, preserving their order.
    ///
    /// Any malformed entry fails the whole parse.
    fn parse(&self, raw: &str) -> Result<Vec<Commit>, ChangelogError>;
}
