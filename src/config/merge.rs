//! CLI argument merging with settings

use super::Settings;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub model: Option<String>,
    pub base_url: Option<String>,
}

pub fn merge_cli_with_settings(mut base: Settings, cli: CliOverrides) -> Settings {
    if let Some(model) = cli.model {
        base.model = model;
    }
    if let Some(base_url) = cli.base_url {
        base.base_url = base_url;
    }
    base
}
