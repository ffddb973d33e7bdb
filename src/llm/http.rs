//! HTTP completion client.
//!
//! Issues `GET {endpoint}?{param}={text}` with the message percent-encoded and
//! hands the body to [`parse_completion_body`].

use std::time::Duration;

use super::config::LlmConfig;
use super::types::{LlmCompletion, LlmError, parse_completion_body};

pub struct HttpCompletionClient {
    http: reqwest::Client,
    endpoint: String,
    query_param: String,
}

impl HttpCompletionClient {
    /// Build a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if reqwest cannot build its client.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.endpoint.clone(), query_param: config.query_param.clone() })
    }

    /// Full request URL for `text`.
    #[must_use]
    pub fn request_url(&self, text: &str) -> String {
        build_request_url(&self.endpoint, &self.query_param, text)
    }
}

#[async_trait::async_trait]
impl LlmCompletion for HttpCompletionClient {
    async fn complete(&self, text: &str) -> Result<String, LlmError> {
        let response = self
            .http
            .get(self.request_url(text))
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(LlmError::Status { status: status.as_u16(), body });
        }
        parse_completion_body(&body)
    }
}

fn build_request_url(endpoint: &str, param: &str, text: &str) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{separator}{}={}", urlencoding::encode(param), urlencoding::encode(text))
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
