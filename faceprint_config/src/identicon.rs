use serde::Deserialize;

use faceprint_utils::limits::{
    DEFAULT_GRID_SIZE,
    DEFAULT_IMAGE_SIZE,
    IMAGE_SIZE_MAX,
    IMAGE_SIZE_MIN,
};

use super::ConfigError;

const fn default_image_size() -> u32 { DEFAULT_IMAGE_SIZE }
const fn default_grid_size() -> u32 { DEFAULT_GRID_SIZE }

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct IdenticonConfig {
    #[serde(default = "default_image_size")]
    pub image_size: u32,
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,
}

impl IdenticonConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if !(IMAGE_SIZE_MIN..=IMAGE_SIZE_MAX).contains(&self.image_size) {
            return Err(ConfigError::InvalidValue("identicon image size is out of range"));
        };
        if self.grid_size == 0 {
            return Err(ConfigError::InvalidValue("identicon grid size must be greater than zero"));
        };
        Ok(())
    }
}

impl Default for IdenticonConfig {
    fn default() -> Self {
        Self {
            image_size: default_image_size(),
            grid_size: default_grid_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identicon_config() {
        let config = IdenticonConfig::default();
        assert!(config.validate().is_ok());
        let config = IdenticonConfig { image_size: 1601, grid_size: 7 };
        let error = config.validate().unwrap_err();
        assert_eq!(error.to_string(), "identicon image size is out of range");
        let config = IdenticonConfig { image_size: 20, grid_size: 0 };
        let error = config.validate().unwrap_err();
        assert_eq!(
            error.to_string(),
            "identicon grid size must be greater than zero",
        );
    }
}
