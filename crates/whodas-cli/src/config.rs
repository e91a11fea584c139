use std::path::Path;

use serde::{Deserialize, Serialize};
use whodas_instruments::ScoreOptions;

/// Current config version. Bump this when adding fields or changing shape.
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhodasConfig {
    /// Schema version. Missing or 0 = written before versioning; read as current.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub include_work_items: bool,
}

impl WhodasConfig {
    /// Work items are scored when either the command line or the config
    /// file asks for them.
    pub fn score_options(&self, include_work_items_flag: bool) -> ScoreOptions {
        ScoreOptions {
            include_work_items: include_work_items_flag || self.include_work_items,
        }
    }
}

pub fn load_config(path: &Path) -> eyre::Result<WhodasConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

pub fn parse_config(contents: &str) -> eyre::Result<WhodasConfig> {
    let config: WhodasConfig = serde_json::from_str(contents)?;
    if config.config_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {} is newer than this build supports ({CURRENT_VERSION}). \
             Please update whodas.",
            config.config_version
        ));
    }
    Ok(WhodasConfig {
        config_version: CURRENT_VERSION,
        ..config
    })
}
