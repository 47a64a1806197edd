use log::Level as LogLevel;
use serde::Deserialize;

use super::identicon::IdenticonConfig;
use super::ConfigError;

fn default_log_level() -> LogLevel { LogLevel::Info }

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    // Properties auto-populated from the environment
    #[serde(skip)]
    pub config_path: String,

    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    #[serde(default)]
    pub identicon: IdenticonConfig,
}

impl Config {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        self.identicon.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: String::new(),
            log_level: default_log_level(),
            identicon: IdenticonConfig::default(),
        }
    }
}
