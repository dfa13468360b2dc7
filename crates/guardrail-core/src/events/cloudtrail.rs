//! CloudTrail audit record model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lenient;

/// One audited API action against the identity service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    /// The audited API action, e.g. `"AddUserToGroup"`.
    #[serde(default, deserialize_with = "lenient")]
    pub event_name: Option<String>,
    /// Service that recorded the action, e.g. `"iam.amazonaws.com"`.
    #[serde(default, deserialize_with = "lenient")]
    pub event_source: Option<String>,
    /// CloudTrail record id.
    #[serde(rename = "eventID", default, deserialize_with = "lenient")]
    pub event_id: Option<String>,
    /// The principal that performed the action.
    #[serde(default, deserialize_with = "lenient")]
    pub user_identity: Option<UserIdentity>,
    /// Parameters of the audited call.
    #[serde(default, deserialize_with = "lenient")]
    pub request_parameters: Option<RequestParameters>,
}

/// The principal that performed an audited action.
///
/// `user_name` is only meaningful when `identity_type` is
/// [`IdentityType::IamUser`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    /// Kind of principal.
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub identity_type: Option<IdentityType>,
    /// IAM user name of the principal.
    #[serde(default, deserialize_with = "lenient")]
    pub user_name: Option<String>,
    /// Principal ARN.
    #[serde(default, deserialize_with = "lenient")]
    pub arn: Option<String>,
    /// Account the principal belongs to.
    #[serde(default, deserialize_with = "lenient")]
    pub account_id: Option<String>,
}

/// Request parameters of a group-membership call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParameters {
    /// The user the call was performed on.
    #[serde(default, deserialize_with = "lenient")]
    pub user_name: Option<String>,
    /// The group the call referenced.
    #[serde(default, deserialize_with = "lenient")]
    pub group_name: Option<String>,
}

/// Kind of principal recorded in `userIdentity.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityType {
    /// A long-lived IAM user.
    #[serde(rename = "IAMUser")]
    IamUser,
    /// Temporary credentials from an assumed role.
    AssumedRole,
    /// The account root user.
    Root,
    /// An AWS service acting on its own behalf.
    #[serde(rename = "AWSService")]
    AwsService,
    /// Another AWS account.
    #[serde(rename = "AWSAccount")]
    AwsAccount,
    /// A federated user from `GetFederationToken`.
    FederatedUser,
    /// Any principal kind this crate does not know.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for IdentityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IamUser => write!(f, "IAMUser"),
            Self::AssumedRole => write!(f, "AssumedRole"),
            Self::Root => write!(f, "Root"),
            Self::AwsService => write!(f, "AWSService"),
            Self::AwsAccount => write!(f, "AWSAccount"),
            Self::FederatedUser => write!(f, "FederatedUser"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
