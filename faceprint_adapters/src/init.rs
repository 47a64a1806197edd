use log::Level;

use faceprint_config::{
    parse_config,
    Config,
    SOFTWARE_NAME,
    SOFTWARE_VERSION,
};

use crate::logger::configure_logger;

// Panics on errors
pub fn initialize_app(
    override_log_level: Option<Level>,
) -> Config {
    let (config, config_warnings) = parse_config();
    let log_level = override_log_level.unwrap_or(config.log_level);
    configure_logger(log_level);
    log::info!("{} v{}", SOFTWARE_NAME, SOFTWARE_VERSION);
    log::info!("config loaded from {}", config.config_path);
    log::info!(
        "identicon defaults: {}x{} px, {}x{} grid",
        config.identicon.image_size,
        config.identicon.image_size,
        config.identicon.grid_size,
        config.identicon.grid_size,
    );
    for warning in config_warnings {
        log::warn!("{}", warning);
    };
    config
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use super::*;

    #[test]
    #[serial]
    fn test_initialize_app() {
        let config_path = std::env::temp_dir()
            .join(format!("faceprint-init-{}.yaml", std::process::id()));
        std::fs::write(&config_path, "identicon:\n  grid_size: 5\n").unwrap();
        std::env::set_var("CONFIG_PATH", &config_path);
        let config = initialize_app(Some(Level::Debug));
        std::env::remove_var("CONFIG_PATH");
        std::fs::remove_file(&config_path).unwrap();
        assert_eq!(config.log_level, Level::Info);
        assert_eq!(config.identicon.grid_size, 5);
    }
}
