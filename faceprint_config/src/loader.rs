use super::config::Config;
use super::ConfigError;

struct EnvConfig {
    config_path: String,
}

#[cfg(feature = "production")]
const DEFAULT_CONFIG_PATH: &str = "/etc/faceprint/config.yaml";
#[cfg(not(feature = "production"))]
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

fn parse_env() -> EnvConfig {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    let config_path = std::env::var("CONFIG_PATH")
        .unwrap_or(DEFAULT_CONFIG_PATH.to_string());
    EnvConfig { config_path }
}

/// Parses YAML config and returns it together with warnings
pub fn parse_config_str(
    config_yaml: &str,
) -> Result<(Config, Vec<String>), ConfigError> {
    let mut warnings = vec![];
    let deserializer = serde_yaml::Deserializer::from_str(config_yaml);
    let config: Config = serde_ignored::deserialize(deserializer, |path| {
        warnings.push(format!("unknown configuration parameter: {path}"));
    })?;
    config.validate()?;
    Ok((config, warnings))
}

// Panics on errors
pub fn parse_config() -> (Config, Vec<String>) {
    let env = parse_env();
    let config_yaml = std::fs::read_to_string(&env.config_path)
        .expect("failed to load config file");
    let (mut config, warnings) = parse_config_str(&config_yaml)
        .expect("invalid config");
    config.config_path = env.config_path;
    (config, warnings)
}
