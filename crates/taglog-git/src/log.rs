//! Decorated history acquisition

use std::io::Read;
use std::path::Path;
use std::process::Command;

use tracing::{debug, instrument, warn};

use taglog_core::error::GitError;

use crate::Result;

/// Arguments pinning `git log` to the layout the changelog parser expects,
/// regardless of user configuration (`log.date`, `log.abbrevCommit`, colors).
const LOG_ARGS: &[&str] = &[
    "-c",
    "log.showSignature=false",
    "log",
    "--decorate=short",
    "--no-abbrev-commit",
    "--no-color",
    "--date=default",
    "--format=medium",
];

/// Run `git log --decorate` from `dir` and return its combined output.
///
/// git locates the repository from `dir`; when that fails its own message
/// is returned in [`GitError::LogFailed`].
#[instrument(fields(dir = %dir.display()))]
pub fn decorated_log(dir: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(LOG_ARGS)
        .current_dir(dir)
        .output()
        .map_err(GitError::CommandFailed)?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        warn!(status = %output.status, "git log failed");
        return Err(GitError::LogFailed {
            output: combined.trim().to_string(),
        });
    }

    debug!(bytes = combined.len(), "read decorated log");
    Ok(combined)
}

/// Read previously captured `git log --decorate` output; `-` reads stdin
pub fn read_log_file(path: &Path) -> Result<String> {
    let read_failed = |source| GitError::ReadFailed {
        path: path.to_path_buf(),
        source,
    };

    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(read_failed)?;
        text
    } else {
        std::fs::read_to_string(path).map_err(read_failed)?
    };

    debug!(path = %path.display(), bytes = text.len(), "read captured log");
    Ok(text)
}
