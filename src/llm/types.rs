//! LLM types — completion trait, response envelope, and errors.
//!
//! The remote endpoint answers every prompt with a small JSON envelope:
//!
//! ```json
//! { "success": true, "result": { "prompt": "reply text" } }
//! ```
//!
//! Anything that does not match that shape is a [`LlmError::Malformed`].

use serde::Deserialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by completion client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The HTTP request never produced a response (DNS, connect, TLS, reset).
    #[error("completion request failed: {0}")]
    Transport(String),

    /// The endpoint returned a non-success HTTP status.
    #[error("completion response error: status {status}")]
    Status { status: u16, body: String },

    /// A 2xx response whose body lacks `success` / `result.prompt`.
    #[error("completion response malformed: {0}")]
    Malformed(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// Remote completion is switched off; every prompt goes to the fallback.
    #[error("remote completion disabled")]
    Disabled,
}

impl LlmError {
    /// Grepable code for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::Transport(_) => "E_TRANSPORT",
            Self::Status { .. } => "E_STATUS",
            Self::Malformed(_) => "E_MALFORMED",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Disabled => "E_DISABLED",
        }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
struct CompletionEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    result: Option<CompletionResult>,
}

#[derive(Debug, Deserialize)]
struct CompletionResult {
    #[serde(default)]
    prompt: Option<String>,
}

/// Extract the reply text from a 2xx response body.
///
/// # Errors
///
/// Returns [`LlmError::Malformed`] when the body is not JSON, the success flag
/// is false or absent, or `result.prompt` is missing or empty.
pub fn parse_completion_body(body: &str) -> Result<String, LlmError> {
    let envelope: CompletionEnvelope =
        serde_json::from_str(body).map_err(|e| LlmError::Malformed(e.to_string()))?;
    if !envelope.success {
        return Err(LlmError::Malformed("success flag not set".into()));
    }
    envelope
        .result
        .and_then(|r| r.prompt)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| LlmError::Malformed("missing result.prompt".into()))
}

// =============================================================================
// COMPLETION TRAIT
// =============================================================================

/// Provider-neutral async trait for one-shot text completion. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LlmCompletion: Send + Sync {
    /// Ask the remote service to reply to `text`.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] on transport failure, non-success status, or a
    /// response body without a usable reply.
    async fn complete(&self, text: &str) -> Result<String, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
