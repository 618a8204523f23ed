//! OpenAI-compatible `/chat/completions` client (blocking).

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use super::CompletionClient;
use crate::domain::{ChatRequest, ChatResponse, CompletionError, Credential};

pub struct OpenAiClient {
    http: Client,
    base_url: String,
    credential: Credential,
}

impl OpenAiClient {
    pub fn new(base_url: &str, credential: Credential) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
        }
    }

    pub fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, request: &ChatRequest) -> Result<String, CompletionError> {
        let url = self.url();
        debug!(%url, model = %request.model, "sending chat completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.credential.as_str())
            .json(request)
            .send()
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| CompletionError::Transport(format!("failed to read response: {e}")))?;
        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            let message = one_line(&api_error_message(&body).unwrap_or(body));
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    CompletionError::Unauthorized { status: status.as_u16(), message }
                }
                _ => CompletionError::Api { status: status.as_u16(), message },
            });
        }

        parse_response(&body)
    }
}

/// Decode a success body into the first choice's text.
pub fn parse_response(body: &str) -> Result<String, CompletionError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| CompletionError::Malformed(e.to_string()))?;
    parsed.into_first_text()
}

/// `error.message` from an OpenAI-style error body, if present.
fn api_error_message(body: &str) -> Option<String> {
    let v: Value = serde_json::from_str(body).ok()?;
    v["error"]["message"].as_str().map(str::to_string)
}

/// Upper bound on characters of an error body kept in a diagnostic
const MAX_ERROR_CHARS: usize = 200;

/// Collapse whitespace runs (newlines included) and truncate to [`MAX_ERROR_CHARS`].
fn one_line(text: &str) -> String {
    let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match joined.char_indices().nth(MAX_ERROR_CHARS) {
        Some((idx, _)) => format!("{}...", &joined[..idx]),
        None => joined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_is_collapsed_to_one_line() {
        let body = "<html>\n<head><title>502 Bad Gateway</title></head>\n<body>nginx</body>\n</html>\n";
        assert_eq!(
            one_line(body),
            "<html> <head><title>502 Bad Gateway</title></head> <body>nginx</body> </html>"
        );
    }

    #[test]
    fn long_error_text_is_truncated() {
        let body = "é".repeat(500);
        let line = one_line(&body);
        assert_eq!(line.chars().count(), MAX_ERROR_CHARS + 3);
        assert!(line.ends_with("..."));
        assert_eq!(one_line("short"), "short");
    }

    #[test]
    fn url_trims_trailing_slashes() {
        let client = OpenAiClient::new("http://localhost:8080/v1//", Credential::new("k"));
        assert_eq!(client.url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn error_body_message_is_extracted() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(api_error_message(body).as_deref(), Some("Incorrect API key provided"));
        assert_eq!(api_error_message("<html>bad gateway</html>"), None);
    }

    #[test]
    fn non_json_success_body_is_malformed() {
        assert!(matches!(parse_response("not json"), Err(CompletionError::Malformed(_))));
    }

    #[test]
    fn unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) is not served on loopback in test environments.
        let client = OpenAiClient::new("http://127.0.0.1:9", Credential::new("k"));
        let req = ChatRequest::single_user("m", "hi");
        assert!(matches!(client.complete(&req), Err(CompletionError::Transport(_))));
    }
}
