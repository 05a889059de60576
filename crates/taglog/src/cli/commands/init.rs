//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use taglog_core::config::defaults::{default_config_toml, DEFAULT_CONFIG_TOML};

use crate::cli::{output, Cli};

/// Write a default taglog configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(long)]
    pub force: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self.write_config(&cwd)?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                output::path(&config_path)
            ));
        }

        Ok(())
    }

    fn write_config(&self, cwd: &Path) -> anyhow::Result<PathBuf> {
        let config_path = cwd.join(
            self.output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_TOML)),
        );

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, default_config_toml())?;
        Ok(config_path)
    }
}
