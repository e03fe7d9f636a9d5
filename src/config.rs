//! Start-up settings handed over from the host page as JSON.
//! Every field is optional; `{}` yields the defaults.

use log::LevelFilter;
use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;
use crate::locale::Locale;

/// Highest national dex number served upstream (through Scarlet / Violet).
pub const DEFAULT_MAX_SUBJECT_ID: u32 = 1025;
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2/";

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub api_base_url: Url,
    pub max_subject_id: u32,
    pub locale: Locale,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE).expect("hard-coded api base should be valid"),
            max_subject_id: DEFAULT_MAX_SUBJECT_ID,
            locale: Locale::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: GameConfig = serde_json::from_str(json)?;
        if config.max_subject_id == 0 {
            return Err(ConfigError::InvalidMaxId(config.max_subject_id));
        }
        // `Url::join` drops the last segment unless the base ends in '/'.
        if !config.api_base_url.path().ends_with('/') {
            let path = format!("{}/", config.api_base_url.path());
            config.api_base_url.set_path(&path);
        }
        Ok(config)
    }
}
