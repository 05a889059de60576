//! taglog Core - Core library for changelog generation
//!
//! This crate provides the error types, configuration, and release tag
//! matching shared by the taglog crates.

pub mod config;
pub mod error;
pub mod release;

pub use error::{ChangelogError, ConfigError, GitError, Result, TaglogError};
pub use release::{ReleasePattern, DEFAULT_TAG_PATTERN};
