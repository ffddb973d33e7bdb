//! Ordered, append-only message history.

use super::message::{Message, MessageId, Sender};

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Drop every user message and every bot message after the first one.
    ///
    /// Returns the ids removed, in transcript order.
    pub fn clear_conversation(&mut self) -> Vec<MessageId> {
        let mut kept_bot = false;
        let mut removed = Vec::new();
        self.messages.retain(|m| {
            let keep = match m.sender {
                Sender::User => false,
                Sender::Bot => !std::mem::replace(&mut kept_bot, true),
            };
            if !keep {
                removed.push(m.id);
            }
            keep
        });
        removed
    }
}

#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;
