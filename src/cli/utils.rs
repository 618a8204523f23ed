//! Shared CLI helpers

use crate::domain::CompletionError;

/// Printed to stderr when no prompt argument was given
pub const NO_PROMPT: &str = "No prompt provided.";

/// `None` for a missing or empty positional argument
pub fn non_empty(arg: Option<String>) -> Option<String> {
    arg.filter(|s| !s.is_empty())
}

/// Print a completion outcome: reply text to stdout, `Error: ...` to stderr.
pub fn report(result: Result<String, CompletionError>) {
    match result {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("Error: {err}"),
    }
}
