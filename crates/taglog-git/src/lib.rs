//! taglog Git - Git history acquisition
//!
//! This crate obtains the decorated `git log` text that the changelog parser
//! consumes. Repository discovery is left to git itself, so `GIT_DIR` and
//! `GIT_WORK_TREE` are honored and its error messages reach the user as-is.

mod log;

pub use log::{decorated_log, read_log_file};

use taglog_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;
