//! Configuration loading
//!
//! Settings are layered: built-in defaults, then `~/.prompt-relay/config.toml`
//! (or an explicit file), then `PROMPT_RELAY_*` environment variables. CLI
//! flags are applied last through [`merge_cli_with_settings`].

mod credentials;
mod merge;

pub use credentials::{load_credential, parse_credentials, CREDENTIAL_KEY};
pub use merge::{merge_cli_with_settings, CliOverrides};

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::{Credential, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Prefix for environment overrides, e.g. `PROMPT_RELAY_MODEL`
pub const ENV_PREFIX: &str = "PROMPT_RELAY_";

/// Fallback credential source for `ask`
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Model identifier sent with every request
    pub model: String,

    /// API root; `/chat/completions` is appended
    pub base_url: String,

    /// Credential for `ask`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl Settings {
    /// Credential for the prompt relay: `api_key`, else `$OPENAI_API_KEY`,
    /// else empty (the call then fails authentication).
    pub fn relay_credential(&self) -> Credential {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(OPENAI_KEY_VAR).ok())
            .map(Credential::new)
            .unwrap_or_else(|| Credential::new(""))
    }
}

/// User-level directory: `~/.prompt-relay/`
pub fn relay_home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".prompt-relay")
}

/// Optional settings file: `~/.prompt-relay/config.toml`
pub fn config_path() -> PathBuf {
    relay_home().join("config.toml")
}

/// Credentials file read by `name`: `~/.prompt-relay/credentials`
pub fn credentials_path() -> PathBuf {
    relay_home().join("credentials")
}

/// Load layered settings. An explicit `config_file` must exist; the default
/// one is optional.
pub fn load_settings(config_file: Option<&Path>) -> Result<Settings> {
    let path = match config_file {
        Some(p) => {
            if !p.is_file() {
                anyhow::bail!("Config file not found: {}", p.display());
            }
            p.to_path_buf()
        }
        None => config_path(),
    };
    debug!(path = %path.display(), "loading settings");

    Figment::from(Serialized::defaults(Settings::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .with_context(|| format!("Invalid settings (file: {})", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_file_or_env() {
        Jail::expect_with(|jail| {
            let settings = load_settings(Some(Path::new("missing.toml")));
            assert!(settings.is_err());

            jail.create_file("empty.toml", "")?;
            let settings = load_settings(Some(Path::new("empty.toml"))).expect("load");
            assert_eq!(settings, Settings::default());
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "relay.toml",
                r#"
                model = "gpt-4o-mini"
                base_url = "http://localhost:1234/v1"
                "#,
            )?;
            jail.set_env("PROMPT_RELAY_MODEL", "llama3");

            let settings = load_settings(Some(Path::new("relay.toml"))).expect("load");
            assert_eq!(settings.model, "llama3");
            assert_eq!(settings.base_url, "http://localhost:1234/v1");
            assert_eq!(settings.api_key, None);
            Ok(())
        });
    }

    #[test]
    fn relay_credential_prefers_settings_key() {
        Jail::expect_with(|jail| {
            jail.set_env(OPENAI_KEY_VAR, "from-env");
            let settings = Settings { api_key: Some("from-config".into()), ..Settings::default() };
            assert_eq!(settings.relay_credential().as_str(), "from-config");

            let settings = Settings::default();
            assert_eq!(settings.relay_credential().as_str(), "from-env");
            Ok(())
        });
    }
}
