//! Core domain types
//!
//! Credential, chat request/response shapes, and the typed completion error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Model used when neither config, environment, nor CLI names one
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI-compatible API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Credential value used when the credentials file lacks the key
pub const MISSING_CREDENTIAL: &str = "no value";

/// Secret used to authenticate against the completion service.
///
/// `Debug` is masked so the value never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The placeholder credential for a missing `api_key` entry
    pub fn missing() -> Self {
        Self(MISSING_CREDENTIAL.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_empty() || self.0 == MISSING_CREDENTIAL
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_missing() {
            write!(f, "Credential({:?})", self.0)
        } else {
            f.write_str("Credential(***)")
        }
    }
}

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// A single role-tagged message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Body of a `/chat/completions` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Request carrying `text` as the sole user message
    pub fn single_user(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self { model: model.into(), messages: vec![ChatMessage::user(text)] }
    }
}

/// Subset of the `/chat/completions` response we consume
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice
    pub fn into_first_text(self) -> Result<String, CompletionError> {
        let first = self.choices.into_iter().next().ok_or(CompletionError::NoChoices)?;
        first
            .message
            .content
            .ok_or_else(|| CompletionError::Malformed("first choice has no text content".into()))
    }
}

/// Why a completion call failed
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("authentication failed ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("response contained no choices")]
    NoChoices,
}
