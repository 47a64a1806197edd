mod config;
mod identicon;
mod loader;

pub use config::Config;
pub use identicon::IdenticonConfig;
pub use loader::{parse_config, parse_config_str};

pub const SOFTWARE_NAME: &str = "Faceprint";
pub const SOFTWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    YamlError(#[from] serde_yaml::Error),

    #[error("{0}")]
    InvalidValue(&'static str),
}
