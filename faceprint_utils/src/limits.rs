pub const IMAGE_SIZE_MIN: u32 = 20;
pub const IMAGE_SIZE_MAX: u32 = 1600;

pub const DEFAULT_IMAGE_SIZE: u32 = 1200;
pub const DEFAULT_GRID_SIZE: u32 = 7;
