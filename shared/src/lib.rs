pub mod cnemc;

use crate::error::ConfigError;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

pub const ENV_VAR_PREFIX: &str = "AQI_WATCH_";
pub const SETTINGS_FILE: &str = "Settings.toml";

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub wechat_webhook_key: String,
    pub dingtalk_access_token: String,
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            wechat_webhook_key: String::new(),
            dingtalk_access_token: String::new(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn wechat_enabled(&self) -> bool {
        !self.wechat_webhook_key.trim().is_empty()
    }

    pub fn dingtalk_enabled(&self) -> bool {
        !self.dingtalk_access_token.trim().is_empty()
    }
}

/// Precedence, lowest to highest: defaults, `Settings.toml` in the working
/// directory, `Settings.toml` beside the executable, environment variables
/// prefixed with `AQI_WATCH_`.
pub fn load_config() -> Result<Config, ConfigError> {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(SETTINGS_FILE));

    if let Some(dir) = exe_dir() {
        figment = figment.merge(Toml::file(dir.join(SETTINGS_FILE)));
    }

    Ok(figment.merge(Env::prefixed(ENV_VAR_PREFIX)).extract::<Config>()?)
}

fn exe_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
}

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to load configuration: {0}")]
        Figment(#[from] figment::Error),
    }
}
