//! Classification decisions and remediation results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What to do about one audit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Decision {
    /// The event is not a self-escalation.
    NoAction,
    /// Remove `user_name` from `group_name`.
    Revoke {
        /// The user that added themself.
        user_name: String,
        /// The group they added themself to.
        group_name: String,
    },
}

impl Decision {
    /// Whether this decision requires a call to the identity service.
    pub fn is_revoke(&self) -> bool {
        matches!(self, Self::Revoke { .. })
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAction => write!(f, "no_action"),
            Self::Revoke {
                user_name,
                group_name,
            } => write!(f, "revoke {user_name} from {group_name}"),
        }
    }
}

/// Why a revocation did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureCause {
    /// Machine-readable code, e.g. `"THROTTLED"`.
    pub code: String,
    /// Human-readable detail from the identity service.
    pub message: String,
}

impl FailureCause {
    /// Create a new failure cause.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Normalized outcome of one revocation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RevocationResult {
    /// The membership is gone, or there was nothing to do.
    Success,
    /// Failed for a transient reason; redelivering the same event may succeed.
    RetryableFailure {
        /// Underlying cause.
        cause: FailureCause,
    },
    /// Failed for a reason redelivery cannot fix. Needs an operator.
    PermanentFailure {
        /// Underlying cause.
        cause: FailureCause,
    },
}

impl RevocationResult {
    /// Whether the invocation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether the invoking environment should redeliver the event.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RetryableFailure { .. })
    }

    /// The failure cause, if any.
    pub fn cause(&self) -> Option<&FailureCause> {
        match self {
            Self::Success => None,
            Self::RetryableFailure { cause } | Self::PermanentFailure { cause } => Some(cause),
        }
    }
}

impl fmt::Display for RevocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::RetryableFailure { cause } => write!(f, "retryable_failure ({cause})"),
            Self::PermanentFailure { cause } => write!(f, "permanent_failure ({cause})"),
        }
    }
}
