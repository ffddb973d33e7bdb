//! Render collaborator interface.
//!
//! The controller calls these while holding its state lock, so `append`
//! arrives exactly once per message in creation order. Implementations must
//! not call back into the controller.

use super::message::{Message, MessageId};

pub trait TranscriptView: Send + Sync {
    /// A message was added to the end of the transcript.
    fn append(&self, message: &Message);

    /// Show or hide the "bot is typing" indicator.
    fn set_typing(&self, _visible: bool) {}

    /// Send-button eligibility changed (or was recomputed).
    fn set_send_enabled(&self, _enabled: bool) {}

    /// Messages were evicted by a clear.
    fn remove(&self, _ids: &[MessageId]) {}
}
