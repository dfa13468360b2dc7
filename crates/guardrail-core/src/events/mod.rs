//! Audit events delivered to the guardrail.
//!
//! The event bus wraps each CloudTrail record in a delivery envelope.
//! Only `detail` feeds classification; the rest of the envelope is kept
//! for diagnostics.
//!
//! Parsing is lenient. A field of the wrong JSON type, or a missing
//! object, becomes `None` instead of failing the whole envelope, so an
//! incomplete record is simply "not a match" downstream.

pub mod cloudtrail;

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use cloudtrail::{AuditEvent, IdentityType, RequestParameters, UserIdentity};

/// One delivery from the event bus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditEnvelope {
    /// Delivery id assigned by the event bus.
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    /// Event category, e.g. `"AWS API Call via CloudTrail"`.
    #[serde(rename = "detail-type", default, deserialize_with = "lenient")]
    pub detail_type: Option<String>,
    /// Emitting service, e.g. `"aws.iam"`.
    #[serde(default, deserialize_with = "lenient")]
    pub source: Option<String>,
    /// Account the event was recorded in.
    #[serde(default, deserialize_with = "lenient")]
    pub account: Option<String>,
    /// Delivery timestamp as sent by the bus.
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<String>,
    /// Region the event was recorded in.
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<String>,
    /// The audit record itself.
    #[serde(default, deserialize_with = "lenient")]
    pub detail: Option<AuditEvent>,
}

impl AuditEnvelope {
    /// Build an envelope from arbitrary JSON.
    ///
    /// Never fails: a value that is not an object yields an empty envelope.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Wrap a bare audit record in an otherwise empty envelope.
    pub fn wrap(detail: AuditEvent) -> Self {
        Self {
            detail: Some(detail),
            ..Self::default()
        }
    }

    /// The audited API action, if present.
    pub fn event_name(&self) -> Option<&str> {
        self.detail.as_ref().and_then(|d| d.event_name.as_deref())
    }
}

/// Deserialize a field, mapping any shape mismatch to `None`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
