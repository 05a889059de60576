//! CLI definition and command handling

pub mod commands;
pub mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};

use commands::{ChangelogCommand, CompletionsCommand, InitCommand};

/// Print a markdown changelog from git logs, grouped by release tag
#[derive(Debug, Parser)]
#[command(name = "git-changelog")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub changelog: ChangelogCommand,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown changelog
    #[default]
    Text,
    /// Parsed commits with their release versions, as JSON
    Json,
}

/// Available commands; without one, the changelog is generated
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a default taglog.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)
                .with_context(|| format!("Failed to change directory to {}", dir.display()))?;
        }

        match self.command {
            Some(Commands::Init(ref cmd)) => cmd.execute(&self),
            Some(Commands::Completions(ref cmd)) => cmd.execute(&self),
            None => self.changelog.execute(&self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_changelog_flags() {
        let cli = Cli::try_parse_from([
            "git-changelog",
            "--file",
            "CHANGELOG.md",
            "--tag",
            "^release-",
            "--nodate",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        assert_eq!(
            cli.changelog.file,
            Some(std::path::PathBuf::from("CHANGELOG.md"))
        );
        assert_eq!(cli.changelog.tag.as_deref(), Some("^release-"));
        assert!(cli.changelog.nodate);
    }

    #[test]
    fn test_parse_subcommand() {
        let cli = Cli::try_parse_from(["git-changelog", "completions", "bash"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Completions(_))));
    }

    #[test]
    fn test_missing_directory_is_general_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let cli = Cli::try_parse_from([
            OsStr::new("git-changelog"),
            OsStr::new("-C"),
            missing.as_os_str(),
        ])
        .unwrap();

        let err = cli.execute().unwrap_err();
        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::ERROR);
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_parse_json_format() {
        let cli = Cli::try_parse_from(["git-changelog", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
