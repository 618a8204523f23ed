//! Chat-completion clients
//!
//! [`CompletionClient`] is the seam between request construction and the wire.
//! The HTTP implementation lives in [`openai`]; tests substitute their own.

pub mod openai;

pub use openai::OpenAiClient;

use crate::domain::{ChatRequest, CompletionError};

/// Sends one chat request and returns the first choice's text.
pub trait CompletionClient {
    fn complete(&self, request: &ChatRequest) -> Result<String, CompletionError>;
}

impl<C: CompletionClient + ?Sized> CompletionClient for &C {
    fn complete(&self, request: &ChatRequest) -> Result<String, CompletionError> {
        (**self).complete(request)
    }
}
