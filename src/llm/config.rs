//! Completion endpoint configuration parsed from environment variables.

use super::types::LlmError;

pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.dreaded.site/api/chatgpt";
pub const DEFAULT_QUERY_PARAM: &str = "text";

/// Optional HTTP timeouts. `None` leaves the reqwest default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: Option<u64>,
    pub connect_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub endpoint: String,
    pub query_param: String,
    pub offline: bool,
    pub timeouts: LlmTimeouts,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            offline: false,
            timeouts: LlmTimeouts::default(),
        }
    }
}

impl LlmConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `CHAT_ENDPOINT`: completion URL (default `https://api.dreaded.site/api/chatgpt`)
    /// - `CHAT_QUERY_PARAM`: query parameter carrying the message (default `text`)
    /// - `CHAT_OFFLINE`: `1`/`true`/`yes`/`on` to skip the network entirely
    /// - `CHAT_REQUEST_TIMEOUT_SECS`: unset by default
    /// - `CHAT_CONNECT_TIMEOUT_SECS`: unset by default
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigParse`] for an unusable endpoint, parameter,
    /// boolean, or timeout.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LlmConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`LlmConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = parse_endpoint(lookup("CHAT_ENDPOINT").as_deref())?;
        let query_param = lookup("CHAT_QUERY_PARAM").unwrap_or_else(|| DEFAULT_QUERY_PARAM.to_string());
        if query_param.trim().is_empty() {
            return Err(LlmError::ConfigParse("CHAT_QUERY_PARAM must not be empty".into()));
        }
        let offline = parse_bool("CHAT_OFFLINE", lookup("CHAT_OFFLINE").as_deref())?;
        let timeouts = LlmTimeouts {
            request_secs: parse_opt_u64("CHAT_REQUEST_TIMEOUT_SECS", lookup("CHAT_REQUEST_TIMEOUT_SECS").as_deref())?,
            connect_secs: parse_opt_u64("CHAT_CONNECT_TIMEOUT_SECS", lookup("CHAT_CONNECT_TIMEOUT_SECS").as_deref())?,
        };

        Ok(Self { endpoint, query_param, offline, timeouts })
    }

    /// Apply command-line overrides on top of the parsed config.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigParse`] if `endpoint` is not an http(s) URL.
    pub fn with_overrides(mut self, endpoint: Option<&str>, offline: bool) -> Result<Self, LlmError> {
        if let Some(endpoint) = endpoint {
            self.endpoint = parse_endpoint(Some(endpoint))?;
        }
        self.offline |= offline;
        Ok(self)
    }
}

/// Parse an env value as `T`, falling back to `default` when absent or invalid.
pub(crate) fn env_parse<T>(raw: Option<&str>, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    raw.and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_opt_u64(key: &str, raw: Option<&str>) -> Result<Option<u64>, LlmError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<u64>()
            .map(Some)
            .map_err(|_| LlmError::ConfigParse(format!("{key}: expected whole seconds, got '{v}'"))),
    }
}

fn parse_endpoint(raw: Option<&str>) -> Result<String, LlmError> {
    let endpoint = raw.unwrap_or(DEFAULT_CHAT_ENDPOINT).trim();
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        return Err(LlmError::ConfigParse(format!(
            "CHAT_ENDPOINT must be an http(s) URL, got '{endpoint}'"
        )));
    }
    Ok(endpoint.to_string())
}

fn parse_bool(key: &str, raw: Option<&str>) -> Result<bool, LlmError> {
    match raw.map(str::trim) {
        None | Some("" | "0" | "false" | "no" | "off") => Ok(false),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some(other) => Err(LlmError::ConfigParse(format!("{key}: expected true/false, got '{other}'"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
