//! AWS IAM identity client.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_iam::Client;
use aws_sdk_iam::config::Region;

use guardrail_core::config::iam::IamConfig;
use guardrail_core::error::AppError;
use guardrail_core::result::AppResult;
use guardrail_core::traits::{IdentityClient, IdentityServiceError};

use crate::errors::map_sdk_error;

/// IAM client built once by the invoking environment and shared by reference.
#[derive(Debug, Clone)]
pub struct AwsIamClient {
    client: Client,
}

impl AwsIamClient {
    /// Build a client from configuration and the default credential chain.
    pub async fn new(config: &IamConfig) -> AppResult<Self> {
        if config.region.trim().is_empty() {
            return Err(AppError::configuration("IAM region must not be empty"));
        }

        tracing::info!(
            region = %config.region,
            endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
            "Initializing IAM client"
        );

        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_iam::config::Builder::from(&shared);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
        })
    }

    /// Wrap an already-configured SDK client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityClient for AwsIamClient {
    fn provider_type(&self) -> &str {
        "aws-iam"
    }

    async fn remove_user_from_group(
        &self,
        group_name: &str,
        user_name: &str,
    ) -> Result<(), IdentityServiceError> {
        match self
            .client
            .remove_user_from_group()
            .group_name(group_name)
            .user_name(user_name)
            .send()
            .await
        {
            Ok(output) => {
                tracing::debug!(?output, "RemoveUserFromGroup succeeded");
                Ok(())
            }
            Err(err) => {
                let mapped = map_sdk_error(err);
                tracing::debug!(code = mapped.code(), error = %mapped, "RemoveUserFromGroup failed");
                Err(mapped)
            }
        }
    }
}
