//! Group-membership revocation.

use std::sync::Arc;

use guardrail_core::traits::{IdentityClient, IdentityServiceError};
use guardrail_core::types::{Decision, FailureCause, RevocationResult};

/// Reverses a self-escalation with one identity-service call.
///
/// Holds no state besides the injected client; it never retries. Retry
/// policy belongs to whatever redelivers the event.
#[derive(Debug, Clone)]
pub struct MembershipRevoker {
    /// Identity-service client owned by the invoking environment.
    client: Arc<dyn IdentityClient>,
}

impl MembershipRevoker {
    /// Creates a revoker over the given client.
    pub fn new(client: Arc<dyn IdentityClient>) -> Self {
        Self { client }
    }

    /// Name of the underlying identity provider.
    pub fn provider_type(&self) -> &str {
        self.client.provider_type()
    }

    /// Apply a decision. `NoAction` succeeds without touching the service.
    pub async fn revoke(&self, decision: &Decision) -> RevocationResult {
        let Decision::Revoke {
            user_name,
            group_name,
        } = decision
        else {
            return RevocationResult::Success;
        };

        tracing::info!(
            user = %user_name,
            group = %group_name,
            provider = self.client.provider_type(),
            "Removing user from group"
        );

        match self
            .client
            .remove_user_from_group(group_name, user_name)
            .await
        {
            Ok(()) => RevocationResult::Success,
            Err(err) => map_failure(err),
        }
    }
}

/// Normalize an identity-service failure.
///
/// An already-absent membership is the desired end state, so it counts as
/// success. Anything unclassified is treated as retryable.
pub fn map_failure(err: IdentityServiceError) -> RevocationResult {
    let cause = FailureCause::new(err.code(), err.message());
    match err {
        IdentityServiceError::NotAMember(_) => {
            tracing::info!(detail = %cause.message, "Membership already removed");
            RevocationResult::Success
        }
        IdentityServiceError::Throttled(_)
        | IdentityServiceError::Unavailable(_)
        | IdentityServiceError::Transport(_)
        | IdentityServiceError::Unknown { .. } => RevocationResult::RetryableFailure { cause },
        IdentityServiceError::EntityNotFound(_)
        | IdentityServiceError::AccessDenied(_)
        | IdentityServiceError::InvalidRequest(_) => RevocationResult::PermanentFailure { cause },
    }
}
