//! Replay audit events through the full classify-and-revoke pipeline.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use guardrail_core::error::AppError;
use guardrail_iam::AwsIamClient;
use guardrail_service::{GuardrailHandler, InvocationReport};

/// Arguments for the handle command
#[derive(Debug, Args)]
pub struct HandleArgs {
    /// Event file (`-` for stdin); one envelope or a JSON array of envelopes
    #[arg(short, long)]
    pub event: String,
}

/// One handled envelope
#[derive(Debug, Serialize, Tabled)]
pub struct ReportRow {
    /// Invocation id
    #[tabled(rename = "Invocation")]
    pub invocation_id: String,
    /// Audited event name
    #[tabled(rename = "Event")]
    pub event_name: String,
    /// Decision
    #[tabled(rename = "Decision")]
    pub decision: String,
    /// Result
    #[tabled(rename = "Result")]
    pub result: String,
}

impl From<&InvocationReport> for ReportRow {
    fn from(report: &InvocationReport) -> Self {
        Self {
            invocation_id: report.invocation_id.to_string(),
            event_name: report.event_name.clone().unwrap_or_else(|| "-".to_string()),
            decision: report.decision.to_string(),
            result: report.result.to_string(),
        }
    }
}

/// Execute the handle command against IAM.
pub async fn execute(
    args: &HandleArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<bool, AppError> {
    let config = super::load_config(config_path)?;
    let envelopes = super::read_envelopes(&args.event).await?;

    let client = AwsIamClient::new(&config.iam).await?;
    let handler = GuardrailHandler::new(Arc::new(client));

    let mut reports = Vec::with_capacity(envelopes.len());
    for envelope in &envelopes {
        reports.push(handler.handle(envelope).await);
    }

    let rows: Vec<ReportRow> = reports.iter().map(ReportRow::from).collect();
    output::print_list(&rows, format);

    if let Some(summary) = failure_summary(&reports) {
        output::print_warning(&summary);
        return Ok(false);
    }
    output::print_success(&format!("Handled {} event(s)", reports.len()));
    Ok(true)
}

fn failure_summary(reports: &[InvocationReport]) -> Option<String> {
    let failures = reports.iter().filter(|r| !r.result.is_success()).count();
    (failures > 0).then(|| {
        format!(
            "{failures} of {} revocation(s) did not succeed",
            reports.len()
        )
    })
}
