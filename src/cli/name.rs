//! Name command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::utils::{non_empty, report, NO_PROMPT};
use super::SharedArgs;
use crate::client::OpenAiClient;
use crate::config::{credentials_path, load_credential};
use crate::relay::RelayContext;

#[derive(Args)]
pub struct NameArgs {
    /// Note content to name
    #[arg(value_name = "CONTENT", conflicts_with = "file")]
    pub content: Option<String>,

    /// Read the note content from a file instead
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Credentials file (default: ~/.prompt-relay/credentials)
    #[arg(long, value_name = "FILE")]
    pub credentials: Option<PathBuf>,
}

pub fn run(args: NameArgs, shared: &SharedArgs) -> Result<()> {
    // The credential is loaded up front; a missing file is fatal even without content.
    let cred_path = args.credentials.unwrap_or_else(credentials_path);
    let credential = load_credential(&cred_path)?;

    let content = match args.file {
        Some(path) => Some(
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        None => args.content,
    };
    let Some(content) = non_empty(content) else {
        eprintln!("{NO_PROMPT}");
        return Ok(());
    };

    let settings = shared.settings()?;
    debug!(?credential, base_url = %settings.base_url, "name settings");

    let ctx = RelayContext::new(OpenAiClient::new(&settings.base_url, credential), settings.model);
    report(ctx.suggest_filename(&content));
    Ok(())
}
