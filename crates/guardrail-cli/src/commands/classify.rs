//! Offline classification of audit events.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use guardrail_core::error::AppError;
use guardrail_core::events::AuditEnvelope;
use guardrail_service::classify_envelope;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Event file (`-` for stdin); one envelope or a JSON array of envelopes
    #[arg(short, long)]
    pub event: String,
}

/// One classified envelope
#[derive(Debug, Serialize, Tabled)]
pub struct ClassificationRow {
    /// Delivery id
    #[tabled(rename = "Envelope")]
    pub envelope_id: String,
    /// Audited event name
    #[tabled(rename = "Event")]
    pub event_name: String,
    /// Decision
    #[tabled(rename = "Decision")]
    pub decision: String,
}

impl ClassificationRow {
    fn from_envelope(envelope: &AuditEnvelope) -> Self {
        Self {
            envelope_id: envelope.id.clone().unwrap_or_else(|| "-".to_string()),
            event_name: envelope.event_name().unwrap_or("-").to_string(),
            decision: classify_envelope(envelope).to_string(),
        }
    }
}

/// Execute the classify command. Never calls IAM.
pub async fn execute(args: &ClassifyArgs, format: OutputFormat) -> Result<bool, AppError> {
    let envelopes = super::read_envelopes(&args.event).await?;
    let rows: Vec<ClassificationRow> = envelopes
        .iter()
        .map(ClassificationRow::from_envelope)
        .collect();
    output::print_list(&rows, format);
    Ok(true)
}
