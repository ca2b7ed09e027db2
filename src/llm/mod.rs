//! LLM integration module.
//!
//! Defines the chat message types, the [`ChatModel`] abstraction the
//! pipeline is written against, and an OpenAI-compatible HTTP client
//! implementation.

mod client;

pub use client::LlmClient;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Message role in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Abstraction over a chat-completion model.
///
/// The pipeline only needs a single request/response exchange: hand over
/// the conversation, get back the raw text of the first choice. Keeping
/// the seam this narrow lets tests substitute a scripted model.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send the conversation and return the raw text reply.
    async fn chat(&self, messages: Vec<Message>) -> Result<String>;

    /// Model identifier string.
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let sys = Message::system("You are helpful.");
        let user = Message::user("Hello!");

        assert!(matches!(sys.role, Role::System));
        assert!(matches!(user.role, Role::User));
        assert_eq!(user.content, "Hello!");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::system("hi")).unwrap();
        assert!(json.contains(r#""role":"system""#));
    }
}
