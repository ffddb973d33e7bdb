//! Artificial reply latency.
//!
//! Remote replies land after a uniform random delay in `[remote_min, remote_max)`
//! so the bot never answers instantly; fallback replies land after a fixed
//! delay. The delay is measured from when the remote call settles.

use std::time::Duration;

use rand::Rng;
use tracing::warn;

use crate::llm::config::env_parse;

pub const DEFAULT_REPLY_MIN_DELAY_MS: u64 = 800;
pub const DEFAULT_REPLY_MAX_DELAY_MS: u64 = 2000;
pub const DEFAULT_FALLBACK_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTiming {
    pub remote_min_ms: u64,
    pub remote_max_ms: u64,
    pub fallback_ms: u64,
}

impl Default for ReplyTiming {
    fn default() -> Self {
        Self {
            remote_min_ms: DEFAULT_REPLY_MIN_DELAY_MS,
            remote_max_ms: DEFAULT_REPLY_MAX_DELAY_MS,
            fallback_ms: DEFAULT_FALLBACK_DELAY_MS,
        }
    }
}

impl ReplyTiming {
    /// No artificial latency at all.
    #[must_use]
    pub fn immediate() -> Self {
        Self { remote_min_ms: 0, remote_max_ms: 0, fallback_ms: 0 }
    }

    /// Read `CHAT_REPLY_MIN_DELAY_MS`, `CHAT_REPLY_MAX_DELAY_MS` and
    /// `CHAT_FALLBACK_DELAY_MS`, keeping defaults for absent or invalid values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let remote_min_ms = env_parse(lookup("CHAT_REPLY_MIN_DELAY_MS").as_deref(), DEFAULT_REPLY_MIN_DELAY_MS);
        let mut remote_max_ms = env_parse(lookup("CHAT_REPLY_MAX_DELAY_MS").as_deref(), DEFAULT_REPLY_MAX_DELAY_MS);
        if remote_max_ms < remote_min_ms {
            warn!(remote_min_ms, remote_max_ms, "timing: max reply delay below min, clamping");
            remote_max_ms = remote_min_ms;
        }
        let fallback_ms = env_parse(lookup("CHAT_FALLBACK_DELAY_MS").as_deref(), DEFAULT_FALLBACK_DELAY_MS);

        Self { remote_min_ms, remote_max_ms, fallback_ms }
    }

    /// Sample the delay before a remote reply lands.
    #[must_use]
    pub fn remote_delay(&self) -> Duration {
        if self.remote_max_ms <= self.remote_min_ms {
            return Duration::from_millis(self.remote_min_ms);
        }
        let ms = rand::rng().random_range(self.remote_min_ms..self.remote_max_ms);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_ms)
    }
}

#[cfg(test)]
#[path = "timing_test.rs"]
mod tests;
