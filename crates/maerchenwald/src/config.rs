//! Application configuration loaded from environment variables.
//!
//! Parsing goes through an explicit [`EnvVars`] snapshot so every
//! resolution path can be exercised in tests without mutating the process
//! environment.

use std::env;

use thiserror::Error;

/// Default name of the table holding feedback records.
pub const DEFAULT_TABLE_NAME: &str = "WeihnachtsFeedback";

/// Default trigger endpoint of the ESP32 music controller.
pub const DEFAULT_TRIGGER_URL: &str = "http://91.9.253.126:80/trigger";

/// Errors that can occur while resolving configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "missing config: set TABLES_CONNECTION_STRING or STORAGE_ACCOUNT_NAME + STORAGE_ACCOUNT_KEY"
    )]
    MissingCredentials,
}

/// Credentials for the table store.
///
/// The two supported configuration shapes form a tagged variant that is
/// resolved once at startup. A connection string takes precedence over an
/// account/key pair when both are configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCredentials {
    /// A single opaque connection descriptor: the endpoint URL of the table
    /// service (local DynamoDB or a compatible gateway).
    ConnectionString(String),
    /// Static account credentials: access key id and secret access key.
    AccountKey { account: String, key: String },
}

impl TableCredentials {
    /// Resolves credentials from an environment snapshot.
    ///
    /// Fails fast when neither shape is fully present, naming the variables
    /// in the error. No network call is made.
    pub fn resolve(vars: &EnvVars) -> Result<Self, ConfigError> {
        if let Some(conn) = non_empty(vars.connection_string.as_deref()) {
            return Ok(Self::ConnectionString(conn.to_string()));
        }

        match (
            non_empty(vars.account_name.as_deref()),
            non_empty(vars.account_key.as_deref()),
        ) {
            (Some(account), Some(key)) => Ok(Self::AccountKey {
                account: account.to_string(),
                key: key.to_string(),
            }),
            _ => Err(ConfigError::MissingCredentials),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Raw environment values feeding configuration resolution.
#[derive(Debug, Clone, Default)]
pub struct EnvVars {
    pub connection_string: Option<String>,
    pub account_name: Option<String>,
    pub account_key: Option<String>,
    pub table_name: Option<String>,
    pub trigger_url: Option<String>,
}

impl EnvVars {
    /// Captures the relevant process environment variables.
    ///
    /// Environment variables:
    /// - `TABLES_CONNECTION_STRING` - table service endpoint (shape 1)
    /// - `STORAGE_ACCOUNT_NAME` / `STORAGE_ACCOUNT_KEY` - static credentials (shape 2)
    /// - `TABLE_NAME` - table name override (default: "WeihnachtsFeedback")
    /// - `ESP32_TRIGGER_URL` - music controller trigger endpoint
    pub fn from_env() -> Self {
        Self {
            connection_string: env::var("TABLES_CONNECTION_STRING").ok(),
            account_name: env::var("STORAGE_ACCOUNT_NAME").ok(),
            account_key: env::var("STORAGE_ACCOUNT_KEY").ok(),
            table_name: env::var("TABLE_NAME").ok(),
            trigger_url: env::var("ESP32_TRIGGER_URL").ok(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the table holding feedback records.
    pub table_name: String,
    /// Trigger endpoint of the ESP32 music controller.
    pub trigger_url: String,
    /// Table store credentials. `None` when neither configuration shape is
    /// present; backends that need credentials reject this at startup.
    pub credentials: Option<TableCredentials>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(&EnvVars::from_env())
    }

    /// Builds a configuration from an explicit environment snapshot.
    pub fn from_vars(vars: &EnvVars) -> Self {
        Self {
            table_name: non_empty(vars.table_name.as_deref())
                .unwrap_or(DEFAULT_TABLE_NAME)
                .to_string(),
            trigger_url: non_empty(vars.trigger_url.as_deref())
                .unwrap_or(DEFAULT_TRIGGER_URL)
                .to_string(),
            credentials: TableCredentials::resolve(vars).ok(),
        }
    }

    /// Returns the resolved credentials, failing when neither configuration
    /// shape was present.
    pub fn require_credentials(&self) -> Result<&TableCredentials, ConfigError> {
        self.credentials
            .as_ref()
            .ok_or(ConfigError::MissingCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_string_preferred_over_account_pair() {
        let vars = EnvVars {
            connection_string: Some("http://localhost:8000".to_string()),
            account_name: Some("acct".to_string()),
            account_key: Some("key".to_string()),
            ..EnvVars::default()
        };

        assert_eq!(
            TableCredentials::resolve(&vars),
            Ok(TableCredentials::ConnectionString(
                "http://localhost:8000".to_string()
            ))
        );
    }

    #[test]
    fn test_account_pair_requires_both_values() {
        let name_only = EnvVars {
            account_name: Some("acct".to_string()),
            ..EnvVars::default()
        };
        let key_only = EnvVars {
            account_key: Some("key".to_string()),
            ..EnvVars::default()
        };

        assert_eq!(
            TableCredentials::resolve(&name_only),
            Err(ConfigError::MissingCredentials)
        );
        assert_eq!(
            TableCredentials::resolve(&key_only),
            Err(ConfigError::MissingCredentials)
        );
    }

    #[test]
    fn test_account_pair_resolves() {
        let vars = EnvVars {
            account_name: Some("acct".to_string()),
            account_key: Some("key".to_string()),
            ..EnvVars::default()
        };

        assert_eq!(
            TableCredentials::resolve(&vars),
            Ok(TableCredentials::AccountKey {
                account: "acct".to_string(),
                key: "key".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let vars = EnvVars {
            connection_string: Some(String::new()),
            account_name: Some(String::new()),
            account_key: Some("key".to_string()),
            ..EnvVars::default()
        };

        assert_eq!(
            TableCredentials::resolve(&vars),
            Err(ConfigError::MissingCredentials)
        );
    }

    #[test]
    fn test_missing_credentials_message_names_the_variables() {
        assert_eq!(
            ConfigError::MissingCredentials.to_string(),
            "missing config: set TABLES_CONNECTION_STRING or STORAGE_ACCOUNT_NAME + STORAGE_ACCOUNT_KEY"
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_vars(&EnvVars::default());

        assert_eq!(config.table_name, DEFAULT_TABLE_NAME);
        assert_eq!(config.trigger_url, DEFAULT_TRIGGER_URL);
        assert!(config.credentials.is_none());
        assert_eq!(
            config.require_credentials(),
            Err(ConfigError::MissingCredentials)
        );
    }

    #[test]
    fn test_config_overrides() {
        let vars = EnvVars {
            table_name: Some("FeedbackTest".to_string()),
            trigger_url: Some("http://10.0.0.7/trigger".to_string()),
            connection_string: Some("http://localhost:8000".to_string()),
            ..EnvVars::default()
        };

        let config = Config::from_vars(&vars);

        assert_eq!(config.table_name, "FeedbackTest");
        assert_eq!(config.trigger_url, "http://10.0.0.7/trigger");
        assert!(config.require_credentials().is_ok());
    }
}
