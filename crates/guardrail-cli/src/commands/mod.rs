//! CLI command definitions and dispatch.

pub mod classify;
pub mod config;
pub mod handle;

use std::io::Read;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::output::OutputFormat;
use guardrail_core::error::AppError;
use guardrail_core::events::AuditEnvelope;

/// IAM guardrail: detects and reverses users adding themselves to groups
#[derive(Debug, Parser)]
#[command(name = "guardrail", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify events without calling IAM
    Classify(classify::ClassifyArgs),
    /// Classify events and revoke self-escalations against IAM
    Handle(handle::HandleArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command. `Ok(false)` means the command ran but
    /// at least one remediation did not succeed.
    pub async fn execute(&self) -> Result<bool, AppError> {
        match &self.command {
            Commands::Classify(args) => classify::execute(args, self.format).await,
            Commands::Handle(args) => handle::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<guardrail_core::config::AppConfig, AppError> {
    let config = guardrail_core::config::AppConfig::load(config_path)?;
    config.validate()?;
    Ok(config)
}

/// Helper: read envelopes from a file, or stdin when `path` is `-`.
///
/// A top-level JSON array is a batch of envelopes; anything else is one.
pub async fn read_envelopes(path: &str) -> Result<Vec<AuditEnvelope>, AppError> {
    let raw = if path == "-" {
        tokio::task::spawn_blocking(|| {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map(|_| buf)
        })
        .await
        .map_err(|e| AppError::internal(format!("stdin reader failed: {e}")))??
    } else {
        tokio::fs::read_to_string(path).await?
    };

    Ok(parse_envelopes(&raw)?)
}

fn parse_envelopes(raw: &str) -> Result<Vec<AuditEnvelope>, serde_json::Error> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().map(AuditEnvelope::from_value).collect(),
        other => vec![AuditEnvelope::from_value(other)],
    })
}
