//! Prompt-Relay: send a prompt to a chat-completion endpoint and print the reply
//!
//! Two entry points share one shape: [`relay::RelayContext::relay`] forwards a
//! prompt verbatim, [`relay::RelayContext::suggest_filename`] wraps note
//! content in a fixed instruction asking for a filename.

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod relay;
