//! Local fallback responder.
//!
//! DESIGN
//! ======
//! An ordered `(keyword, response)` table scanned front to back; the first
//! keyword found as a substring of the lower-cased message wins. Multi-word
//! phrases sit ahead of the short keywords because `hi` and `ai` occur inside
//! ordinary words ("mac*hi*ne").

/// Reply used when no keyword matches.
pub const DEFAULT_RESPONSE: &str = "That's an interesting question! AI technology continues to evolve rapidly, opening new possibilities for innovation and problem-solving across countless industries.";

/// Keyword table in match order.
pub const RESPONSES: &[(&str, &str)] = &[
    (
        "hello",
        "Hello! I'm your AI assistant. How can I help you explore the fascinating world of artificial intelligence?",
    ),
    (
        "machine learning",
        "Machine Learning is a subset of AI that allows systems to learn and improve from experience without being explicitly programmed. It powers everything from recommendation systems to autonomous vehicles.",
    ),
    (
        "neural networks",
        "Neural networks are computing systems inspired by biological neural networks. They're the foundation of deep learning and power applications like image recognition and natural language processing.",
    ),
    ("hi", "Hi there! I'm here to help you understand AI and its applications. What would you like to know?"),
    (
        "ai",
        "Artificial Intelligence is revolutionizing our world by enabling machines to learn, reason, and make decisions. It's transforming industries from healthcare to transportation.",
    ),
    (
        "future",
        "The future of AI is incredibly exciting! We're moving towards more intelligent automation, personalized experiences, and AI-human collaboration that will solve complex global challenges.",
    ),
    (
        "help",
        "I'm here to help you understand AI and its applications! Feel free to ask me about artificial intelligence, machine learning, neural networks, or any technology topics.",
    ),
    (
        "robots",
        "AI-powered robots are becoming increasingly sophisticated, from industrial automation to personal assistants. They're designed to work alongside humans to enhance productivity and safety.",
    ),
    (
        "technology",
        "AI technology is advancing rapidly, with breakthroughs in areas like natural language processing, computer vision, and reinforcement learning creating new possibilities every day.",
    ),
];

fn lookup(message: &str) -> Option<&'static (&'static str, &'static str)> {
    let lower = message.to_lowercase();
    RESPONSES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
}

/// Keyword that `message` matches, if any.
#[must_use]
pub fn matched_keyword(message: &str) -> Option<&'static str> {
    lookup(message).map(|(keyword, _)| *keyword)
}

/// Canned reply for `message`.
#[must_use]
pub fn fallback_reply(message: &str) -> &'static str {
    lookup(message).map_or(DEFAULT_RESPONSE, |(_, response)| *response)
}

#[cfg(test)]
#[path = "fallback_test.rs"]
mod tests;
