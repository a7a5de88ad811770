//! Shared application state.
//!
//! The state is cloned into every request handler and holds the feedback
//! repository as a trait object plus the device client. The storage backend
//! is selected at compile time via feature flags.

use std::sync::Arc;

use maerchenwald_core::storage::FeedbackRepository;

use crate::config::Config;
use crate::device::Esp32Client;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!("Cannot enable both 'inmemory' and 'dynamodb' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Feedback repository backing the feedback endpoints.
    pub feedback_repo: Arc<dyn FeedbackRepository>,
    /// Client for the ESP32 music controller.
    pub esp32: Esp32Client,
}

impl AppState {
    /// Creates state over an explicit repository and device client.
    pub fn new(feedback_repo: Arc<dyn FeedbackRepository>, esp32: Esp32Client) -> Self {
        Self {
            feedback_repo,
            esp32,
        }
    }

    /// Creates state from configuration using the in-memory backend.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        use crate::storage::inmemory::InMemoryFeedbackRepository;

        Ok(Self::new(
            Arc::new(InMemoryFeedbackRepository::new()),
            Esp32Client::new(config.trigger_url.clone()),
        ))
    }

    /// Creates state from configuration using the DynamoDB backend.
    ///
    /// Credentials are resolved here, once, before the server starts
    /// accepting traffic; a missing configuration fails startup.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        use crate::storage::dynamodb::DynamoDbFeedbackRepository;

        let credentials = config.require_credentials()?;
        let repo =
            DynamoDbFeedbackRepository::connect(credentials, config.table_name.clone()).await;

        Ok(Self::new(
            Arc::new(repo),
            Esp32Client::new(config.trigger_url.clone()),
        ))
    }
}
