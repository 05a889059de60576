//! Exit codes for the CLI

use taglog_core::{ChangelogError, ConfigError, GitError, TaglogError};

/// General error, including failure to obtain the git history
pub const ERROR: i32 = 1;

/// The history contained a malformed entry
pub const PARSE_ERROR: i32 = 2;

/// Configuration error, including an invalid release tag pattern
pub const CONFIG_ERROR: i32 = 3;

/// The changelog could not be written
pub const IO_ERROR: i32 = 4;

/// Map an error returned by a command to the process exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<TaglogError>() {
        return match e {
            TaglogError::Config(_) => CONFIG_ERROR,
            TaglogError::Git(_) => ERROR,
            TaglogError::Changelog(e) => changelog_code(e),
        };
    }
    if let Some(e) = err.downcast_ref::<ChangelogError>() {
        return changelog_code(e);
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }
    if err.downcast_ref::<GitError>().is_some() {
        return ERROR;
    }
    ERROR
}

fn changelog_code(err: &ChangelogError) -> i32 {
    match err {
        ChangelogError::MalformedDate { .. } => PARSE_ERROR,
        ChangelogError::WriteFailed { .. } | ChangelogError::StdoutFailed(_) => IO_ERROR,
    }
}
