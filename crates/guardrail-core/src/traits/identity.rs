//! Identity-service client trait.

use async_trait::async_trait;
use thiserror::Error;

/// Failure taxonomy of the identity service, independent of any SDK.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityServiceError {
    /// The user was already absent from the group.
    #[error("user is not a member of the group: {0}")]
    NotAMember(String),

    /// The user or the group does not exist.
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// The request was rate limited.
    #[error("throttled: {0}")]
    Throttled(String),

    /// The service reported an internal or temporary failure.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The request never got a usable response (timeout, connection, parse).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The guardrail's own credentials lack permission for the call.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// The service rejected the request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Anything the client could not classify.
    #[error("unknown error {code}: {message}")]
    Unknown {
        /// Service error code, if one was returned.
        code: String,
        /// Service error message.
        message: String,
    },
}

impl IdentityServiceError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &str {
        match self {
            Self::NotAMember(_) => "NOT_A_MEMBER",
            Self::EntityNotFound(_) => "ENTITY_NOT_FOUND",
            Self::Throttled(_) => "THROTTLED",
            Self::Unavailable(_) => "UNAVAILABLE",
            Self::Transport(_) => "TRANSPORT",
            Self::AccessDenied(_) => "ACCESS_DENIED",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Unknown { .. } => "UNKNOWN",
        }
    }

    /// The service-provided detail.
    pub fn message(&self) -> &str {
        match self {
            Self::NotAMember(m)
            | Self::EntityNotFound(m)
            | Self::Throttled(m)
            | Self::Unavailable(m)
            | Self::Transport(m)
            | Self::AccessDenied(m)
            | Self::InvalidRequest(m) => m,
            Self::Unknown { message, .. } => message,
        }
    }
}

/// Client for the identity-management service.
///
/// Constructed by the invoking environment and handed to the revoker,
/// so tests can substitute an in-memory implementation.
#[async_trait]
pub trait IdentityClient: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider name (e.g., "aws-iam").
    fn provider_type(&self) -> &str;

    /// Remove `user_name` from `group_name`. Issues exactly one request.
    async fn remove_user_from_group(
        &self,
        group_name: &str,
        user_name: &str,
    ) -> Result<(), IdentityServiceError>;
}
