//! Site chat — the stateful core of a marketing site's AI chat widget.
//!
//! ARCHITECTURE
//! ============
//! - [`chat`] owns the widget: input gating, single-flight reply resolution,
//!   the fallback responder, and the transcript.
//! - [`llm`] talks to the remote text-completion endpoint.
//!
//! Rendering is delegated to a [`chat::view::TranscriptView`] supplied by the
//! embedding UI; the `site-chat` binary supplies a terminal one.

pub mod chat;
pub mod llm;
