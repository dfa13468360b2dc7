//! Per-invocation report handed back to the invoking environment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use guardrail_core::types::{Decision, RevocationResult};

/// What one invocation saw, decided, and did.
///
/// Advisory output only. Nothing reads it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationReport {
    /// Unique id of this invocation.
    pub invocation_id: Uuid,
    /// When the envelope was received.
    pub received_at: DateTime<Utc>,
    /// Delivery id from the envelope, if any.
    pub envelope_id: Option<String>,
    /// Audited event name, if any.
    pub event_name: Option<String>,
    /// Classification outcome.
    pub decision: Decision,
    /// Remediation outcome.
    pub result: RevocationResult,
}

impl InvocationReport {
    /// Emit the report at a level matching its severity.
    ///
    /// Permanent failures go out at `error` so they reach operator alerting.
    pub fn emit(&self) {
        let decision = self.decision.to_string();
        match &self.result {
            RevocationResult::Success => tracing::info!(
                invocation_id = %self.invocation_id,
                envelope_id = self.envelope_id.as_deref().unwrap_or("-"),
                event_name = self.event_name.as_deref().unwrap_or("-"),
                decision = %decision,
                "Invocation completed"
            ),
            RevocationResult::RetryableFailure { cause } => tracing::warn!(
                invocation_id = %self.invocation_id,
                envelope_id = self.envelope_id.as_deref().unwrap_or("-"),
                decision = %decision,
                code = %cause.code,
                cause = %cause.message,
                "Revocation failed, event should be redelivered"
            ),
            RevocationResult::PermanentFailure { cause } => tracing::error!(
                invocation_id = %self.invocation_id,
                envelope_id = self.envelope_id.as_deref().unwrap_or("-"),
                decision = %decision,
                code = %cause.code,
                cause = %cause.message,
                "Revocation failed permanently, unauthorized membership may remain"
            ),
        }
    }
}
