//! Reply generation.
//!
//! The only implementation today is [`CannedReplier`], which simulates a
//! model by sleeping for a fixed delay and returning a fixed string. The
//! [`Replier`] trait is the seam where a real backend would plug in without
//! touching the conversation state machine.

use crate::message::Message;
use std::time::Duration;

/// Fixed reply returned by the simulated model.
pub const CANNED_REPLY: &str = "Esta es una respuesta de ejemplo. Aqu\u{ed} deber\u{ed}as conectar con tu modelo LLM.";

/// Delay before the simulated reply arrives.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Produces assistant replies for a conversation.
///
/// A real backend implementation would return a `Result` here; the canned
/// replier never fails, so the seam stays infallible for now.
#[allow(async_fn_in_trait)]
pub trait Replier {
    /// Produce the assistant reply to the given history.
    async fn reply(&self, history: &[Message]) -> Message;
}

/// Simulated model: fixed delay, fixed reply text.
#[derive(Debug, Clone)]
pub struct CannedReplier {
    delay: Duration,
    reply: String,
}

impl CannedReplier {
    /// Create a replier with a custom delay and reply text.
    pub fn new(delay: Duration, reply: impl Into<String>) -> Self {
        Self {
            delay,
            reply: reply.into(),
        }
    }

    /// Create a replier with a custom delay and the canned reply text.
    pub fn with_delay(delay: Duration) -> Self {
        Self::new(delay, CANNED_REPLY)
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for CannedReplier {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY, CANNED_REPLY)
    }
}

impl Replier for CannedReplier {
    async fn reply(&self, _history: &[Message]) -> Message {
        tokio::time::sleep(self.delay).await;
        Message::assistant(self.reply.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;

    #[test]
    fn test_default_replier() {
        let replier = CannedReplier::default();
        assert_eq!(replier.delay(), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_canned_reply_content() {
        let replier = CannedReplier::default();
        let reply = replier.reply(&[]).await;
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, CANNED_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay_and_text() {
        let replier = CannedReplier::new(Duration::from_millis(50), "hola");
        let start = tokio::time::Instant::now();
        let reply = replier.reply(&[]).await;
        assert_eq!(start.elapsed(), Duration::from_millis(50));
        assert_eq!(reply.content, "hola");
    }
}
