//! prompt-relay: send a prompt to a chat-completion endpoint and print the reply

use anyhow::Result;

fn main() -> Result<()> {
    prompt_relay::cli::run()
}
