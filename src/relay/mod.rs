//! Request construction for the two entry points
//!
//! A [`RelayContext`] owns the client (and through it the credential) plus the
//! model id. Both operations build exactly one request and return a typed
//! result; printing is left to the CLI.

mod filename;

pub use filename::{filename_prompt, FILENAME_TEMPLATE};

use tracing::debug;

use crate::client::CompletionClient;
use crate::domain::{ChatRequest, CompletionError};

pub struct RelayContext<C> {
    client: C,
    model: String,
}

impl<C: CompletionClient> RelayContext<C> {
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self { client, model: model.into() }
    }

    /// Forward `prompt` verbatim as the sole user message.
    pub fn relay(&self, prompt: &str) -> Result<String, CompletionError> {
        self.send(prompt.to_string())
    }

    /// Ask the model for a filename describing `content`.
    pub fn suggest_filename(&self, content: &str) -> Result<String, CompletionError> {
        self.send(filename_prompt(content))
    }

    fn send(&self, text: String) -> Result<String, CompletionError> {
        debug!(chars = text.len(), model = %self.model, "built request");
        let request = ChatRequest::single_user(&self.model, text);
        self.client.complete(&request)
    }
}
