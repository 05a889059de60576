//! Changelog command

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::{debug, info};

use taglog_changelog::{ChangelogGenerator, JsonFormatter};
use taglog_core::config::{load_config_or_default, ChangelogConfig};
use taglog_core::ChangelogError;
use taglog_git::{decorated_log, read_log_file};

use crate::cli::{output, Cli, OutputFormat};

/// Generate the changelog
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Write changelog to this file (default: print to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Regexp for release tags [default: ^(v|V)?\d+.*$]
    #[arg(short, long, value_name = "REGEX")]
    pub tag: Option<String>,

    /// Omit dates in release titles
    #[arg(long)]
    pub nodate: bool,

    /// Read `git log --decorate` output from a file ("-" for stdin) instead of running git
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(file = ?self.file, tag = ?self.tag, nodate = self.nodate, "executing changelog command");
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        let (changelog, destination) = self.render(&cwd, cli.format)?;

        match destination {
            Some(path) => {
                std::fs::write(&path, &changelog)
                    .map_err(|source| ChangelogError::WriteFailed {
                        path: path.clone(),
                        source,
                    })?;

                if !cli.quiet {
                    output::success(&format!("Changelog written to {}", output::path(&path)));
                }
            }
            None => print_changelog(&mut std::io::stdout().lock(), &changelog)?,
        }

        Ok(())
    }

    /// Produce the changelog text and where it should go
    fn render(&self, cwd: &Path, format: OutputFormat) -> anyhow::Result<(String, Option<PathBuf>)> {
        let (config, config_path) = load_config_or_default(cwd)?;
        debug!(config = ?config_path, "configuration resolved");
        let config = self.apply_overrides(config.changelog);

        // Reject a bad tag pattern before touching git
        let generator = ChangelogGenerator::new(&config)?;
        let generator = match format {
            OutputFormat::Text => generator,
            OutputFormat::Json => {
                generator.with_formatter(JsonFormatter::new(config.release_pattern()?))
            }
        };

        let raw = match &self.input {
            Some(path) => read_log_file(path)?,
            None => decorated_log(cwd)?,
        };

        let changelog = generator.generate(&raw)?;
        let destination = self.file.clone().or(config.file).map(|f| cwd.join(f));
        Ok((changelog, destination))
    }

    /// Command-line flags take precedence over the config file
    fn apply_overrides(&self, mut config: ChangelogConfig) -> ChangelogConfig {
        if let Some(tag) = &self.tag {
            config.tag_pattern = tag.clone();
        }
        if self.nodate {
            config.include_dates = false;
        }
        config
    }
}

/// Print the changelog; a reader that stops early (`| head`) is not an error
fn print_changelog(out: &mut impl Write, changelog: &str) -> Result<(), ChangelogError> {
    match out.write_all(changelog.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
            Ok(())
        }
        result => result.map_err(ChangelogError::StdoutFailed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use tempfile::TempDir;

    const LOGS: &str = "commit 44be5d95e4a919f229b7867a464437eb259396e3 (HEAD -> master, tag: v1.3.7)
Author: Test <test@example.com>
Date:   Thu Dec 5 21:34:21 2019 +0100

    Added completion on templates and themes

commit f2922957684f9c27bf710e99be374c7394843990 (tag: release-1)
Author: Test <test@example.com>
Date:   Sun May 12 20:01:19 2019 +0200

    First release
";

    fn command(temp: &TempDir) -> ChangelogCommand {
        let input = temp.path().join("log.txt");
        std::fs::write(&input, LOGS).unwrap();
        ChangelogCommand {
            file: None,
            tag: None,
            nodate: false,
            input: Some(input),
        }
    }

    #[test]
    fn test_render_from_input_file() {
        let temp = TempDir::new().unwrap();
        let (changelog, destination) = command(&temp)
            .render(temp.path(), OutputFormat::Text)
            .unwrap();

        assert!(destination.is_none());
        assert_eq!(
            changelog,
            "# Changelog\n\
             \n## Release v1.3.7 (2019-12-05)\n\n\
             - Added completion on templates and themes\n\
             - First release\n"
        );
    }

    #[test]
    fn test_flags_override_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("taglog.toml"),
            "[changelog]\ninclude_dates = true\nfile = \"HISTORY.md\"\n",
        )
        .unwrap();

        let mut cmd = command(&temp);
        cmd.tag = Some("^release-".to_string());
        cmd.nodate = true;
        let (changelog, destination) = cmd.render(temp.path(), OutputFormat::Text).unwrap();

        assert_eq!(destination, Some(temp.path().join("HISTORY.md")));
        assert!(changelog.starts_with("# Changelog\n\n- Added completion"));
        assert!(changelog.contains("\n## Release release-1\n\n- First release\n"));
    }

    #[test]
    fn test_render_json() {
        let temp = TempDir::new().unwrap();
        let (output, _) = command(&temp)
            .render(temp.path(), OutputFormat::Json)
            .unwrap();

        assert!(output.starts_with('['));
        assert!(output.contains("\"version\": \"v1.3.7\""));
    }

    #[test]
    fn test_invalid_tag_pattern_is_config_error() {
        let temp = TempDir::new().unwrap();
        let mut cmd = command(&temp);
        cmd.tag = Some("(".to_string());

        let err = cmd.render(temp.path(), OutputFormat::Text).unwrap_err();
        assert_eq!(exit_codes::for_error(&err), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn test_malformed_log_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp);
        std::fs::write(
            cmd.input.as_ref().unwrap(),
            LOGS.replace("Sun May 12 20:01:19 2019 +0200", "2019-05-12"),
        )
        .unwrap();

        let err = cmd.render(temp.path(), OutputFormat::Text).unwrap_err();
        assert_eq!(exit_codes::for_error(&err), exit_codes::PARSE_ERROR);
    }

    struct FailingWriter(std::io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(self.0.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_print_changelog() {
        let mut out = Vec::new();
        print_changelog(&mut out, "# Changelog\n").unwrap();
        assert_eq!(out, b"# Changelog\n");
    }

    #[test]
    fn test_print_changelog_ignores_broken_pipe() {
        let mut out = FailingWriter(std::io::ErrorKind::BrokenPipe);
        assert!(print_changelog(&mut out, "# Changelog\n").is_ok());
    }

    #[test]
    fn test_print_changelog_failure_is_io_error() {
        let mut out = FailingWriter(std::io::ErrorKind::Other);
        let err = print_changelog(&mut out, "# Changelog\n").unwrap_err();
        assert_eq!(exit_codes::for_error(&err.into()), exit_codes::IO_ERROR);
    }

    #[test]
    fn test_outside_repository_surfaces_git_output() {
        let temp = TempDir::new().unwrap();
        if std::process::Command::new("git").arg("--version").output().is_err()
            || std::process::Command::new("git")
                .args(["rev-parse", "--git-dir"])
                .current_dir(temp.path())
                .output()
                .is_ok_and(|o| o.status.success())
        {
            return;
        }
        let mut cmd = command(&temp);
        cmd.input = None;

        let err = cmd.render(temp.path(), OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("not a git repository"));
        assert_eq!(exit_codes::for_error(&err), exit_codes::ERROR);
    }
}
