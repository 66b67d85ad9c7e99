use serde::{Deserialize, Serialize};
use std::env;

/// Connection settings carried by a block invocation.
///
/// Every field is optional. Anything left unset falls back to the ambient
/// AWS configuration chain (environment, shared profile, instance metadata),
/// so an empty settings object is valid and common.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    pub endpoint_url: Option<String>,
}

impl ConnectionSettings {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            region: env::var("AWS_REGION").ok(),
            access_key_id: env::var("AWS_ACCESS_KEY_ID").ok(),
            secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").ok(),
            session_token: env::var("AWS_SESSION_TOKEN").ok(),
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
        }
    }

    /// Fill any unset field from the environment, keeping explicit values.
    #[must_use]
    pub fn or_env(mut self) -> Self {
        let env = Self::from_env();
        self.region = self.region.or(env.region);
        self.access_key_id = self.access_key_id.or(env.access_key_id);
        self.secret_access_key = self.secret_access_key.or(env.secret_access_key);
        self.session_token = self.session_token.or(env.session_token);
        self.endpoint_url = self.endpoint_url.or(env.endpoint_url);
        self
    }

    /// Whether the settings carry a complete static credential pair.
    #[must_use]
    pub fn has_static_credentials(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_partial_settings() {
        let settings: ConnectionSettings =
            serde_json::from_str(r#"{"region": "eu-west-1"}"#).unwrap();
        assert_eq!(settings.region.as_deref(), Some("eu-west-1"));
        assert_eq!(settings.access_key_id, None);
        assert!(!settings.has_static_credentials());
    }

    #[test]
    fn static_credentials_require_both_halves() {
        let settings = ConnectionSettings {
            access_key_id: Some("AKIA123".to_string()),
            ..ConnectionSettings::default()
        };
        assert!(!settings.has_static_credentials());

        let settings = ConnectionSettings {
            secret_access_key: Some("secret".to_string()),
            ..settings
        };
        assert!(settings.has_static_credentials());
    }
}
