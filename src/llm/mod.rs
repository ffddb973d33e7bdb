//! LLM — remote text-completion adapter for the chat widget.
//!
//! DESIGN
//! ======
//! Uses environment variables instead of config files. `LlmClient` dispatches
//! to the HTTP endpoint, or to an offline stub that always fails so every
//! prompt takes the local fallback path.

pub mod config;
pub mod http;
pub mod types;

use config::LlmConfig;
pub use types::LlmCompletion;
use types::LlmError;

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete completion client.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: LlmProvider,
}

enum LlmProvider {
    Http(http::HttpCompletionClient),
    Offline,
}

impl LlmClient {
    /// Build a completion client from `CHAT_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(&config)
    }

    /// Build a completion client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        if config.offline {
            return Ok(Self::offline());
        }
        Ok(Self { inner: LlmProvider::Http(http::HttpCompletionClient::new(config)?) })
    }

    #[must_use]
    pub fn offline() -> Self {
        Self { inner: LlmProvider::Offline }
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        matches!(self.inner, LlmProvider::Offline)
    }
}

#[async_trait::async_trait]
impl LlmCompletion for LlmClient {
    async fn complete(&self, text: &str) -> Result<String, LlmError> {
        match &self.inner {
            LlmProvider::Http(c) => c.complete(text).await,
            LlmProvider::Offline => Err(LlmError::Disabled),
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
