//! Mapping of IAM SDK errors onto [`IdentityServiceError`].

use aws_sdk_iam::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_iam::operation::remove_user_from_group::RemoveUserFromGroupError;

use guardrail_core::traits::IdentityServiceError;

/// Map a failed `RemoveUserFromGroup` call.
pub fn map_sdk_error(err: SdkError<RemoveUserFromGroupError>) -> IdentityServiceError {
    match &err {
        SdkError::ServiceError(context) => map_service_error(context.err()),
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
            IdentityServiceError::Transport(DisplayErrorContext(&err).to_string())
        }
        SdkError::ConstructionFailure(_) => {
            IdentityServiceError::InvalidRequest(DisplayErrorContext(&err).to_string())
        }
        _ => IdentityServiceError::Unknown {
            code: "SdkError".to_string(),
            message: DisplayErrorContext(&err).to_string(),
        },
    }
}

fn map_service_error(err: &RemoveUserFromGroupError) -> IdentityServiceError {
    // Modeled exceptions carry their own message; metadata is the fallback.
    let message = match err {
        RemoveUserFromGroupError::NoSuchEntityException(e) => e.message(),
        RemoveUserFromGroupError::LimitExceededException(e) => e.message(),
        RemoveUserFromGroupError::ServiceFailureException(e) => e.message(),
        _ => None,
    }
    .or_else(|| err.message())
    .unwrap_or_default();

    match err {
        RemoveUserFromGroupError::NoSuchEntityException(_) => {
            map_error_code(Some("NoSuchEntity"), message)
        }
        RemoveUserFromGroupError::LimitExceededException(_) => {
            IdentityServiceError::Throttled(message.to_string())
        }
        RemoveUserFromGroupError::ServiceFailureException(_) => {
            IdentityServiceError::Unavailable(message.to_string())
        }
        _ => map_error_code(err.code(), message),
    }
}

/// Map an IAM/AWS error code and message.
///
/// IAM has no dedicated "not a member" error. `NoSuchEntity` is only
/// treated as permanent when its message says the user or group itself
/// cannot be found; any other `NoSuchEntity` is left unclassified.
pub fn map_error_code(code: Option<&str>, message: &str) -> IdentityServiceError {
    let message_owned = message.to_string();
    match code {
        Some("NoSuchEntity") | Some("NoSuchEntityException") => {
            if message.contains("cannot be found") {
                IdentityServiceError::EntityNotFound(message_owned)
            } else {
                IdentityServiceError::Unknown {
                    code: "NoSuchEntity".to_string(),
                    message: message_owned,
                }
            }
        }
        Some(
            "Throttling"
            | "ThrottlingException"
            | "RequestLimitExceeded"
            | "LimitExceeded"
            | "TooManyRequestsException",
        ) => IdentityServiceError::Throttled(message_owned),
        Some(
            "ServiceFailure"
            | "ServiceUnavailable"
            | "ServiceUnavailableException"
            | "InternalFailure"
            | "InternalError",
        ) => IdentityServiceError::Unavailable(message_owned),
        Some(
            "AccessDenied"
            | "AccessDeniedException"
            | "UnauthorizedOperation"
            | "InvalidClientTokenId"
            | "SignatureDoesNotMatch",
        ) => IdentityServiceError::AccessDenied(message_owned),
        Some("ValidationError" | "InvalidInput" | "MalformedInput") => {
            IdentityServiceError::InvalidRequest(message_owned)
        }
        other => IdentityServiceError::Unknown {
            code: other.unwrap_or("Unspecified").to_string(),
            message: message_owned,
        },
    }
}
