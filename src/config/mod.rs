use config::{Config, File};
use serde::Deserialize;

use crate::store::save::DEFAULT_SAVE_FILE;

pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const DEFAULT_PROMPT: &str = "paint> ";

#[derive(Debug, Default, Deserialize)]
pub struct StoreConfig {
    pub save_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConsoleConfig {
    pub prompt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
    pub log_filter: Option<String>,
}

// Unset keys stay `None`; the accessors below are the only place defaults apply.
impl AppConfig {
    pub fn save_path(&self) -> &str {
        self.store.save_path.as_deref().unwrap_or(DEFAULT_SAVE_FILE)
    }

    pub fn prompt(&self) -> &str {
        self.console.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

/// Loads `config.toml` from the working directory. A missing file means defaults.
pub fn load_config() -> Result<AppConfig, config::ConfigError> {
    load_config_from(CONFIG_FILE)
}

pub fn load_config_from(path: &str) -> Result<AppConfig, config::ConfigError> {
    Config::builder()
        .add_source(File::with_name(path).required(false))
        .build()?
        .try_deserialize()
}
