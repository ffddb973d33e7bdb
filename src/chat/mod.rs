//! Chat widget controller — input gating, reply resolution, transcript.
//!
//! DESIGN
//! ======
//! One `ChatController` per widget. It owns the widget state (phase, input
//! buffer, transcript) behind a single mutex and reports every visible change
//! to a [`TranscriptView`]. The state machine has two phases:
//!
//! ```text
//! Idle --submit(non-blank)--> AwaitingReply --reply lands--> Idle
//! ```
//!
//! While awaiting, submissions are ignored but typing is not. Each accepted
//! submission spawns one task that asks the remote endpoint, falls back to
//! the local keyword responder on any failure, waits out the configured
//! latency, then lands the reply.
//!
//! ERROR HANDLING
//! ==============
//! Remote failures never reach the user. They are logged with their kind and
//! turned into an offline-annotated fallback reply.

pub mod fallback;
pub mod message;
pub mod timing;
pub mod transcript;
pub mod view;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::llm::LlmCompletion;
use message::{Message, MessageSource};
use timing::ReplyTiming;
use transcript::Transcript;
use view::TranscriptView;

/// First bot message; survives every clear.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI assistant. Ask me anything about artificial intelligence, machine learning, neural networks, or the future of technology.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingReply,
}

/// Outcome of one reply resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Remote(String),
    Fallback(String),
}

impl Reply {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Remote(text) | Self::Fallback(text) => text,
        }
    }

    #[must_use]
    pub fn source(&self) -> MessageSource {
        match self {
            Self::Remote(_) => MessageSource::Remote,
            Self::Fallback(_) => MessageSource::Offline,
        }
    }

    fn to_message(&self) -> Message {
        Message::bot(self.text(), self.source())
    }
}

/// Keys the input collaborator forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

struct WidgetState {
    phase: Phase,
    input_buffer: String,
    transcript: Transcript,
}

impl WidgetState {
    fn can_send(&self) -> bool {
        self.phase == Phase::Idle && !self.input_buffer.trim().is_empty()
    }
}

struct Shared {
    state: Mutex<WidgetState>,
    llm: Arc<dyn LlmCompletion>,
    view: Arc<dyn TranscriptView>,
    timing: ReplyTiming,
}

// =============================================================================
// REPLY RESOLUTION
// =============================================================================

/// Ask `llm` for a reply to `text`, substituting the fallback responder on
/// any failure.
pub async fn resolve_reply(llm: &dyn LlmCompletion, text: &str) -> Reply {
    match llm.complete(text).await {
        Ok(reply) => {
            debug!(reply_len = reply.len(), "chat: remote reply received");
            Reply::Remote(reply)
        }
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "chat: remote completion unavailable, using fallback");
            Reply::Fallback(fallback::fallback_reply(text).to_string())
        }
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, WidgetState> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    async fn resolve_and_land(self: Arc<Self>, text: String) -> Reply {
        let reply = resolve_reply(self.llm.as_ref(), &text).await;
        let delay = match reply {
            Reply::Remote(_) => self.timing.remote_delay(),
            Reply::Fallback(_) => self.timing.fallback_delay(),
        };
        tokio::time::sleep(delay).await;
        self.land(&reply);
        reply
    }

    fn land(&self, reply: &Reply) {
        let mut state = self.lock();
        self.view.set_typing(false);
        let message = reply.to_message();
        self.view.append(&message);
        state.transcript.push(message);
        state.phase = Phase::Idle;
        self.view.set_send_enabled(state.can_send());
        info!(source = ?reply.source(), "chat: reply landed");
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Handle to one chat widget. Clones share the same widget.
#[derive(Clone)]
pub struct ChatController {
    shared: Arc<Shared>,
}

impl ChatController {
    /// Create a widget and append the welcome message.
    pub fn new(llm: Arc<dyn LlmCompletion>, view: Arc<dyn TranscriptView>, timing: ReplyTiming) -> Self {
        let welcome = Message::bot(WELCOME_MESSAGE, MessageSource::Local);
        view.append(&welcome);
        view.set_send_enabled(false);
        let mut transcript = Transcript::new();
        transcript.push(welcome);

        let state = WidgetState { phase: Phase::Idle, input_buffer: String::new(), transcript };
        Self { shared: Arc::new(Shared { state: Mutex::new(state), llm, view, timing }) }
    }

    /// Submit `raw` as a user message.
    ///
    /// Blank text or a pending reply makes this a no-op returning `None`.
    /// Otherwise the spawned reply task is returned; it resolves once the
    /// reply has landed in the transcript. Must be called inside a Tokio
    /// runtime.
    pub fn submit(&self, raw: &str) -> Option<JoinHandle<Reply>> {
        let text = raw.trim();
        let mut state = self.shared.lock();
        if text.is_empty() {
            return None;
        }
        if state.phase != Phase::Idle {
            debug!("chat: submit ignored, reply pending");
            return None;
        }

        let message = Message::user(text);
        self.shared.view.append(&message);
        state.transcript.push(message);
        state.input_buffer.clear();
        state.phase = Phase::AwaitingReply;
        self.shared.view.set_typing(true);
        self.shared.view.set_send_enabled(false);
        drop(state);

        info!(text_len = text.len(), "chat: message submitted");
        let shared = Arc::clone(&self.shared);
        Some(tokio::spawn(shared.resolve_and_land(text.to_string())))
    }

    /// Submit whatever is in the input buffer (the send button).
    pub fn send(&self) -> Option<JoinHandle<Reply>> {
        let buffer = self.shared.lock().input_buffer.clone();
        self.submit(&buffer)
    }

    /// Enter without shift sends; everything else is ordinary typing.
    pub fn key_press(&self, key: Key, shift: bool) -> Option<JoinHandle<Reply>> {
        match key {
            Key::Enter if !shift => self.send(),
            _ => None,
        }
    }

    /// Replace the input buffer and republish send eligibility.
    pub fn set_input(&self, text: &str) {
        let mut state = self.shared.lock();
        state.input_buffer.clear();
        state.input_buffer.push_str(text);
        self.shared.view.set_send_enabled(state.can_send());
    }

    /// Remove user messages and all bot messages but the welcome message.
    ///
    /// A pending reply is left alone and still lands afterwards.
    pub fn clear(&self) {
        let mut state = self.shared.lock();
        let removed = state.transcript.clear_conversation();
        if !removed.is_empty() {
            self.shared.view.remove(&removed);
        }
        info!(removed = removed.len(), "chat: transcript cleared");
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.shared.lock().phase
    }

    #[must_use]
    pub fn is_awaiting_reply(&self) -> bool {
        self.phase() == Phase::AwaitingReply
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        self.shared.lock().can_send()
    }

    #[must_use]
    pub fn input(&self) -> String {
        self.shared.lock().input_buffer.clone()
    }

    /// Snapshot of the transcript.
    #[must_use]
    pub fn transcript(&self) -> Vec<Message> {
        self.shared.lock().transcript.messages().to_vec()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
