//! Per-invocation AWS SDK configuration and service clients.

use aws_config::Region;
use aws_sdk_rds::config::Credentials;

use crate::core::config::ConnectionSettings;
use crate::errors::BlockError;

/// SDK configuration resolved once per invocation and shared by every
/// service client built from it.
#[derive(Debug)]
pub struct AwsClients {
    config: aws_config::SdkConfig,
}

impl AwsClients {
    /// Resolve SDK configuration for this invocation's connection settings.
    ///
    /// Explicit region, static credentials and endpoint overrides win; any
    /// field left unset falls back to the ambient provider chain.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when only half of a static credential pair is
    /// set; a lone key id or secret would otherwise silently fall through to
    /// the ambient chain.
    pub async fn new(settings: &ConnectionSettings) -> Result<Self, BlockError> {
        if settings.access_key_id.is_some() != settings.secret_access_key.is_some() {
            return Err(BlockError::ConfigError(
                "access_key_id and secret_access_key must be set together".to_string(),
            ));
        }

        let mut loader = aws_config::from_env();
        if let Some(region) = settings.region.clone() {
            loader = loader.region(Region::new(region));
        }
        if let (Some(access_key_id), Some(secret_access_key)) = (
            settings.access_key_id.clone(),
            settings.secret_access_key.clone(),
        ) {
            loader = loader.credentials_provider(Credentials::new(
                access_key_id,
                secret_access_key,
                settings.session_token.clone(),
                None,
                "connection-settings",
            ));
        }
        if let Some(endpoint_url) = settings.endpoint_url.as_deref() {
            loader = loader.endpoint_url(endpoint_url);
        }
        Ok(Self {
            config: loader.load().await,
        })
    }

    #[must_use]
    pub fn rds(&self) -> aws_sdk_rds::Client {
        aws_sdk_rds::Client::new(&self.config)
    }

    #[must_use]
    pub fn redshift_data(&self) -> aws_sdk_redshiftdata::Client {
        aws_sdk_redshiftdata::Client::new(&self.config)
    }

    #[must_use]
    pub fn secrets_manager(&self) -> aws_sdk_secretsmanager::Client {
        aws_sdk_secretsmanager::Client::new(&self.config)
    }

    #[must_use]
    pub fn ssm(&self) -> aws_sdk_ssm::Client {
        aws_sdk_ssm::Client::new(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_half_a_credential_pair() {
        let settings = ConnectionSettings {
            access_key_id: Some("AKIA123".to_string()),
            ..ConnectionSettings::default()
        };
        let err = AwsClients::new(&settings).await.unwrap_err();
        assert!(matches!(err, BlockError::ConfigError(_)));
    }
}
