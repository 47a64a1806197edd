pub mod errors;
pub mod layout;
pub mod pattern;
pub mod raster;

use image::{Rgb, RgbImage};

use faceprint_config::IdenticonConfig;
use faceprint_utils::limits::{DEFAULT_GRID_SIZE, DEFAULT_IMAGE_SIZE};

use errors::IdenticonError;
use pattern::generate_pattern;
use raster::paint_identicon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdenticonOptions {
    pub image_size: u32,
    pub grid_size: u32,
}

impl Default for IdenticonOptions {
    fn default() -> Self {
        Self {
            image_size: DEFAULT_IMAGE_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl From<&IdenticonConfig> for IdenticonOptions {
    fn from(config: &IdenticonConfig) -> Self {
        Self {
            image_size: config.image_size,
            grid_size: config.grid_size,
        }
    }
}

/// Generates a square, left-right symmetric avatar.
/// The same text always produces the same image.
pub fn generate_identicon(
    text: &str,
    image_size: u32,
    grid_size: u32,
) -> Result<RgbImage, IdenticonError> {
    let pattern = generate_pattern(text, image_size, grid_size)?;
    let raster = paint_identicon(&pattern);
    log::debug!("generated {image_size}x{image_size} identicon");
    Ok(raster)
}

pub fn generate_default_identicon(text: &str) -> Result<RgbImage, IdenticonError> {
    generate_identicon(text, DEFAULT_IMAGE_SIZE, DEFAULT_GRID_SIZE)
}

pub fn generate_identicon_with_options(
    text: &str,
    options: &IdenticonOptions,
) -> Result<RgbImage, IdenticonError> {
    generate_identicon(text, options.image_size, options.grid_size)
}

fn format_color(color: Rgb<u8>) -> String {
    let Rgb([red, green, blue]) = color;
    format!("#{red:02x}{green:02x}{blue:02x}")
}

/// One-line summary of the icon generated for `text`
pub fn describe_identicon(
    text: &str,
    options: &IdenticonOptions,
) -> Result<String, IdenticonError> {
    let pattern = generate_pattern(text, options.image_size, options.grid_size)?;
    let layout = pattern.layout();
    let palette = pattern.palette();
    let description = format!(
        "{}x{} px, {}x{} grid, background {}, primary {}, secondary {}",
        layout.image_size,
        layout.image_size,
        layout.grid_size,
        layout.grid_size,
        format_color(palette.background),
        format_color(palette.primary),
        format_color(palette.secondary),
    );
    Ok(description)
}
