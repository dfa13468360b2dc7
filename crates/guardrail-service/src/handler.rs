//! One invocation: classify, revoke, report.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use guardrail_core::events::AuditEnvelope;
use guardrail_core::traits::IdentityClient;
use guardrail_core::types::Decision;

use crate::classifier::classify_envelope;
use crate::report::InvocationReport;
use crate::revoker::MembershipRevoker;

/// Runs the classifier and revoker for each delivered envelope.
///
/// Invocations share nothing but the injected client, so any number may
/// run concurrently.
#[derive(Debug, Clone)]
pub struct GuardrailHandler {
    revoker: MembershipRevoker,
}

impl GuardrailHandler {
    /// Creates a handler over the given identity client.
    pub fn new(client: Arc<dyn IdentityClient>) -> Self {
        Self {
            revoker: MembershipRevoker::new(client),
        }
    }

    /// Name of the underlying identity provider.
    pub fn provider_type(&self) -> &str {
        self.revoker.provider_type()
    }

    /// Handle one envelope and emit its report.
    pub async fn handle(&self, envelope: &AuditEnvelope) -> InvocationReport {
        let invocation_id = Uuid::new_v4();
        let received_at = Utc::now();

        if tracing::enabled!(tracing::Level::DEBUG) {
            let rendered = serde_json::to_string_pretty(envelope)
                .unwrap_or_else(|e| format!("<unrenderable envelope: {e}>"));
            tracing::debug!(%invocation_id, "Received event: {}", rendered);
        }

        let decision = classify_envelope(envelope);
        if let Decision::Revoke {
            user_name,
            group_name,
        } = &decision
        {
            tracing::warn!(
                %invocation_id,
                user = %user_name,
                group = %group_name,
                "User adding self to group detected"
            );
        }

        let result = self.revoker.revoke(&decision).await;

        let report = InvocationReport {
            invocation_id,
            received_at,
            envelope_id: envelope.id.clone(),
            event_name: envelope.event_name().map(str::to_string),
            decision,
            result,
        };
        report.emit();
        report
    }
}
