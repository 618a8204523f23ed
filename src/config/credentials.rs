//! Credentials file: `key=value` lines under an implicit default section.
//!
//! ```text
//! # ~/.prompt-relay/credentials
//! api_key = sk-...
//!
//! [other]
//! api_key = ignored
//! ```

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::domain::Credential;

/// Key holding the API credential
pub const CREDENTIAL_KEY: &str = "api_key";

const DEFAULT_SECTION: &str = "DEFAULT";

/// Entries of the default section. Keys are lowercased, keys and values
/// trimmed; `#` and `;` start comment lines; `:` works as a separator too.
/// Later duplicates win.
pub fn parse_credentials(text: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    let mut in_default = true;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_default = name.trim() == DEFAULT_SECTION;
            continue;
        }
        if !in_default {
            continue;
        }
        let Some(idx) = line.find(['=', ':']) else {
            continue;
        };
        let (key, value) = line.split_at(idx);
        entries.insert(key.trim().to_lowercase(), value[1..].trim().to_string());
    }

    entries
}

/// Read the credential from `path`. An unreadable file is an error; a file
/// without [`CREDENTIAL_KEY`] yields [`Credential::missing`].
pub fn load_credential(path: &Path) -> Result<Credential> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read credentials file {}", path.display()))?;
    debug!(path = %path.display(), "read credentials file");

    match parse_credentials(&text).remove(CREDENTIAL_KEY) {
        Some(value) => Ok(Credential::new(value)),
        None => {
            warn!(
                path = %path.display(),
                "no `{CREDENTIAL_KEY}` entry in credentials file; request will not authenticate"
            );
            Ok(Credential::missing())
        }
    }
}
