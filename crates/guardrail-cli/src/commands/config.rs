//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use guardrail_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (file + environment)
    Show,
    /// Validate the configuration
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<bool, AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = guardrail_core::config::AppConfig::load(config_path)?;
            output::print_settings(&config, format);
        }
        ConfigCommand::Validate => {
            super::load_config(config_path)?;
            output::print_success(&format!("Configuration '{}' is valid", config_path));
        }
    }
    Ok(true)
}
