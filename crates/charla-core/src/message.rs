//! Message types for a conversation.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Assistant (model) response.
    Assistant,
    /// User message.
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assistant => write!(f, "assistant"),
            Self::User => write!(f, "user"),
        }
    }
}

/// One turn in the conversation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message author.
    pub role: Role,
    /// Message content.
    pub content: String,
    /// When the message was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Check whether this message is from the user.
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Get the timestamp formatted for display (HH:MM in local time).
    pub fn time_str(&self) -> String {
        let local: DateTime<Local> = self.timestamp.into();
        local.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let msg = Message::user("hola");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hola");
        assert!(msg.is_user());
    }

    #[test]
    fn test_assistant_message() {
        let msg = Message::assistant("respuesta");
        assert_eq!(msg.role, Role::Assistant);
        assert!(!msg.is_user());
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_time_str_format() {
        let msg = Message::user("x");
        let time_str = msg.time_str();
        assert_eq!(time_str.len(), 5);
        assert!(time_str.contains(':'));
    }
}
