//! Ask command implementation

use anyhow::Result;
use clap::Args;
use tracing::debug;

use super::utils::{non_empty, report, NO_PROMPT};
use super::SharedArgs;
use crate::client::OpenAiClient;
use crate::relay::RelayContext;

#[derive(Args)]
pub struct AskArgs {
    /// Prompt text, sent as the sole user message
    #[arg(value_name = "PROMPT")]
    pub prompt: Option<String>,
}

pub fn run(args: AskArgs, shared: &SharedArgs) -> Result<()> {
    let Some(prompt) = non_empty(args.prompt) else {
        eprintln!("{NO_PROMPT}");
        return Ok(());
    };

    let settings = shared.settings()?;
    let credential = settings.relay_credential();
    debug!(?credential, base_url = %settings.base_url, "relay settings");

    let ctx = RelayContext::new(OpenAiClient::new(&settings.base_url, credential), settings.model);
    report(ctx.relay(&prompt));
    Ok(())
}
