//! Conversation state machine.
//!
//! A conversation is an append-only sequence of messages plus a two-valued
//! phase: `Idle` or `AwaitingReply`. Submission transitions `Idle ->
//! AwaitingReply`; the arrival of the reply transitions back. While a reply
//! is pending, further submissions are rejected.

use crate::message::Message;

/// Default seed greeting shown when a conversation starts.
pub const DEFAULT_GREETING: &str = "\u{a1}Hola! \u{bf}En qu\u{e9} puedo ayudarte hoy?";

/// Conversation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Ready to accept a new user message.
    #[default]
    Idle,
    /// A user message was submitted and the reply has not arrived yet.
    AwaitingReply,
}

/// In-memory conversation state, scoped to one screen instance.
///
/// The message sequence always contains at least the seed greeting and only
/// ever grows: messages are appended, never mutated or deleted.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    phase: Phase,
}

impl Conversation {
    /// Create a conversation seeded with the default assistant greeting.
    pub fn new() -> Self {
        Self::with_greeting(DEFAULT_GREETING)
    }

    /// Create a conversation seeded with a custom assistant greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::assistant(greeting)],
            phase: Phase::Idle,
        }
    }

    /// All messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: the seed greeting is never removed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message.
    pub fn last(&self) -> &Message {
        // Invariant: messages is never empty (seeded at construction).
        self.messages.last().expect("conversation is never empty")
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check whether a reply is pending.
    pub fn is_awaiting_reply(&self) -> bool {
        self.phase == Phase::AwaitingReply
    }

    /// Submit user input.
    ///
    /// The text is trimmed first. Returns `None` without changing any state
    /// if the trimmed text is empty or a reply is already pending. Otherwise
    /// appends a user message, transitions to [`Phase::AwaitingReply`], and
    /// returns the appended message.
    pub fn submit(&mut self, text: &str) -> Option<&Message> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("rejected submission: empty input");
            return None;
        }
        if self.phase == Phase::AwaitingReply {
            tracing::debug!("rejected submission: reply pending");
            return None;
        }

        self.messages.push(Message::user(trimmed));
        self.phase = Phase::AwaitingReply;
        tracing::debug!(len = self.messages.len(), "user message appended");
        self.messages.last()
    }

    /// Deliver the assistant reply for the pending submission.
    ///
    /// Appends the message and transitions back to [`Phase::Idle`]. Ignored
    /// if no reply is pending (a stale delivery after state was discarded).
    pub fn deliver_reply(&mut self, reply: Message) {
        if self.phase != Phase::AwaitingReply {
            tracing::debug!("dropped reply delivered while idle");
            return;
        }
        self.messages.push(reply);
        self.phase = Phase::Idle;
        tracing::debug!(len = self.messages.len(), "assistant reply appended");
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
