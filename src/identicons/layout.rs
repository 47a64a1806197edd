use std::cmp::max;

use faceprint_utils::limits::{IMAGE_SIZE_MAX, IMAGE_SIZE_MIN};

use super::errors::IdenticonError;

pub fn validate_image_size(image_size: u32) -> Result<(), IdenticonError> {
    if image_size < IMAGE_SIZE_MIN {
        return Err(IdenticonError::ImageSizeTooSmall(IMAGE_SIZE_MIN));
    };
    if image_size > IMAGE_SIZE_MAX {
        return Err(IdenticonError::ImageSizeTooLarge(IMAGE_SIZE_MAX));
    };
    Ok(())
}

/// Placement of grid cells on a square canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub image_size: u32,
    pub grid_size: u32,
    pub padding: u32,
    pub square_size: u32,
}

impl Layout {
    pub fn new(image_size: u32, grid_size: u32) -> Result<Self, IdenticonError> {
        validate_image_size(image_size)?;
        if grid_size == 0 {
            return Err(IdenticonError::InvalidGridSize("grid size must be greater than zero"));
        };
        let padding = image_size / 20;
        // Zero when the grid is finer than the canvas, nothing is drawn then
        let square_size = (image_size - padding * 2) / grid_size;
        let layout = Self {
            image_size,
            grid_size,
            padding,
            square_size,
        };
        Ok(layout)
    }

    /// Number of columns driven by bits (includes center column)
    pub fn half_width(&self) -> u32 {
        self.grid_size / 2 + self.grid_size % 2
    }

    fn row_stride(&self) -> u32 {
        self.grid_size / 2 + 1
    }

    pub fn bit_index(&self, column: u32, row: u32) -> usize {
        (column + row * self.row_stride()) as usize
    }

    /// Width of each bit array, large enough for every half-grid index
    pub fn bit_width(&self) -> usize {
        if !self.is_drawable() {
            return self.image_size as usize;
        };
        let cells = self.grid_size * self.row_stride();
        max(self.image_size, cells) as usize
    }

    pub fn is_drawable(&self) -> bool {
        self.square_size > 0
    }

    pub fn mirrored_column(&self, column: u32) -> u32 {
        self.grid_size - 1 - column
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, column: u32, row: u32) -> (u32, u32) {
        (
            self.padding + column * self.square_size,
            self.padding + row * self.square_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_image_size() {
        assert_eq!(
            validate_image_size(19),
            Err(IdenticonError::ImageSizeTooSmall(20)),
        );
        assert_eq!(
            validate_image_size(1601),
            Err(IdenticonError::ImageSizeTooLarge(1600)),
        );
        assert!(validate_image_size(20).is_ok());
        assert!(validate_image_size(1600).is_ok());
    }

    #[test]
    fn test_layout_default() {
        let layout = Layout::new(1200, 7).unwrap();
        assert_eq!(layout.padding, 60);
        assert_eq!(layout.square_size, 154);
        assert_eq!(layout.half_width(), 4);
        assert_eq!(layout.bit_width(), 1200);
        assert_eq!(layout.cell_origin(3, 6), (522, 984));
        assert_eq!(layout.mirrored_column(0), 6);
        assert_eq!(layout.mirrored_column(3), 3);
    }

    #[test]
    fn test_layout_bit_index() {
        let layout = Layout::new(140, 7).unwrap();
        assert_eq!(layout.bit_index(0, 0), 0);
        assert_eq!(layout.bit_index(3, 0), 3);
        assert_eq!(layout.bit_index(0, 1), 4);
        assert_eq!(layout.bit_index(3, 6), 27);
        let layout = Layout::new(140, 6).unwrap();
        assert_eq!(layout.half_width(), 3);
        assert_eq!(layout.bit_index(2, 5), 22);
    }

    #[test]
    fn test_layout_bit_width_covers_grid() {
        let layout = Layout::new(40, 30).unwrap();
        assert_eq!(layout.square_size, 1);
        let last_index = layout.bit_index(layout.half_width() - 1, 29);
        assert!(last_index < layout.bit_width());
        assert_eq!(layout.bit_width(), 480);
    }

    #[test]
    fn test_layout_invalid_grid_size() {
        assert_eq!(
            Layout::new(100, 0),
            Err(IdenticonError::InvalidGridSize("grid size must be greater than zero")),
        );
        assert!(Layout::new(20, 18).unwrap().is_drawable());
    }

    #[test]
    fn test_layout_grid_finer_than_canvas() {
        let layout = Layout::new(20, 19).unwrap();
        assert_eq!(layout.square_size, 0);
        assert!(!layout.is_drawable());
        assert_eq!(layout.bit_width(), 20);
        let layout = Layout::new(20, u32::MAX).unwrap();
        assert_eq!(layout.half_width(), u32::MAX / 2 + 1);
        assert_eq!(layout.bit_width(), 20);
    }
}
