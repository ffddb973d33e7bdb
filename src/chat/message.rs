//! Transcript entries.

use time::OffsetDateTime;
use uuid::Uuid;

/// Footnote shown under replies produced by the local fallback responder.
pub const OFFLINE_ANNOTATION: &str = "• Offline response";

/// Stable identifier for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(pub Uuid);

impl MessageId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// Where a message's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    /// Typed by the user, or built into the widget (welcome message).
    Local,
    /// Returned by the remote completion endpoint.
    Remote,
    /// Produced by the fallback responder after a remote failure.
    Offline,
}

/// One immutable transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub source: MessageSource,
    pub timestamp: OffsetDateTime,
}

impl Message {
    fn new(text: impl Into<String>, sender: Sender, source: MessageSource) -> Self {
        Self { id: MessageId::new(), text: text.into(), sender, source, timestamp: now_local() }
    }

    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User, MessageSource::Local)
    }

    #[must_use]
    pub fn bot(text: impl Into<String>, source: MessageSource) -> Self {
        Self::new(text, Sender::Bot, source)
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.source == MessageSource::Offline
    }

    /// Footnote the renderer should attach, if any.
    #[must_use]
    pub fn annotation(&self) -> Option<&'static str> {
        self.is_offline().then_some(OFFLINE_ANNOTATION)
    }

    /// Capture time as zero-padded `HH:MM`.
    #[must_use]
    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}", self.timestamp.hour(), self.timestamp.minute())
    }
}

// The local offset is unavailable on some platforms once threads are running.
fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
