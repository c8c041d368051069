//! Prompt exchanges - role/text messages and standalone prompt records

use serde::{Deserialize, Serialize};

use crate::codec::Record;
use crate::identity::Identity;

/// One role/text message in an LLM exchange.
///
/// The schema imposes no constraint on the role vocabulary; whatever the
/// prompting collaborator supplies is stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Speaker role, e.g. "system", "user", "assistant".
    pub role: String,
    /// Message text.
    pub content: String,
}

impl Message {
    /// Create a message.
    #[must_use]
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// A prompt exchange persisted independently of any work artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prompt {
    /// Identity base.
    #[serde(flatten)]
    pub identity: Identity,
    /// Ordered messages of one LLM exchange.
    pub messages: Vec<Message>,
}

impl Prompt {
    /// Create a prompt record from its messages.
    #[must_use]
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            identity: Identity::new(),
            messages,
        }
    }
}

impl Record for Prompt {
    const KIND: &'static str = "prompt";

    fn identity(&self) -> &Identity {
        &self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn test_prompt_new() {
        let prompt = Prompt::new(vec![
            Message::new("system", "You are a reviewer."),
            Message::new("user", "Review this proposal."),
        ]);
        assert!(!prompt.identity.pk.is_empty());
        assert_eq!(prompt.messages.len(), 2);
        assert_eq!(prompt.messages[0].role, "system");
    }

    #[test]
    fn test_prompt_requires_messages() {
        let err = codec::from_json::<Prompt>("{}").unwrap_err();
        assert!(err.to_string().contains("messages"));
    }

    #[test]
    fn test_prompt_roundtrip() {
        let prompt = Prompt::new(vec![Message::new("user", "hello")]);
        let json = codec::to_json(&prompt).unwrap();
        let back: Prompt = codec::from_json(&json).unwrap();
        assert_eq!(prompt, back);
    }
}
