//! Identity-service client configuration.

use serde::{Deserialize, Serialize};

/// Settings used to construct the IAM client.
///
/// Credentials are never configured here; they come from the standard
/// AWS provider chain of the invoking environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IamConfig {
    /// AWS region used for signing. IAM is a global service, so this
    /// only selects the endpoint partition.
    #[serde(default = "default_region")]
    pub region: String,
    /// Endpoint override (for local emulators).
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl Default for IamConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint_url: None,
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}
