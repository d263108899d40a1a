//! Configuration types for the audit feed client.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Authentication configuration.
///
/// The audit service expects a pre-issued access token; obtaining and
/// renewing that token is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Access token presented in the `Authorization` header.
    #[serde(with = "secret_string")]
    pub token: SecretString,
}

/// Connection configuration for the audit service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the audit service (e.g., https://audit.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// One-shot request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a configuration from a base URL and an access token,
    /// with default connection settings.
    pub fn with_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig { token },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_with_token_defaults() {
        let config = Config::with_token(
            "https://audit.example.com".to_string(),
            SecretString::new("tok".to_string().into()),
        );
        assert_eq!(config.connection.base_url, "https://audit.example.com");
        assert!(!config.connection.skip_verify);
        assert_eq!(
            config.connection.timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
        assert_eq!(config.auth.token.expose_secret(), "tok");
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config::with_token(
            "https://audit.example.com".to_string(),
            SecretString::new("tok".to_string().into()),
        );
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.connection.base_url, config.connection.base_url);
        assert_eq!(parsed.connection.timeout, config.connection.timeout);
        assert_eq!(parsed.auth.token.expose_secret(), "tok");
    }

    #[test]
    fn test_timeout_serialized_as_seconds() {
        let config = Config::with_token(
            "https://audit.example.com".to_string(),
            SecretString::new("tok".to_string().into()),
        );
        let value: serde_json::Value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["connection"]["timeout"], serde_json::json!(30));
    }
}
