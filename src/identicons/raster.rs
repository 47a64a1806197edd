use image::{Rgb, RgbImage};

use super::layout::Layout;
use super::pattern::{FillLayer, Pattern};

pub fn new_canvas(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, color)
}

/// Fills the area `[x1, x2) x [y1, y2)`, clipped to the canvas
pub fn fill_rect(
    raster: &mut RgbImage,
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
    color: Rgb<u8>,
) -> () {
    let x2 = x2.min(raster.width());
    let y2 = y2.min(raster.height());
    for y in y1..y2 {
        for x in x1..x2 {
            raster.put_pixel(x, y, color);
        };
    };
}

fn fill_square(
    raster: &mut RgbImage,
    layout: &Layout,
    column: u32,
    row: u32,
    color: Rgb<u8>,
) -> () {
    let (x1, y1) = layout.cell_origin(column, row);
    fill_rect(
        raster,
        x1,
        y1,
        x1 + layout.square_size,
        y1 + layout.square_size,
        color,
    );
}

fn fill_grid(
    raster: &mut RgbImage,
    layout: &Layout,
    layers: &[FillLayer],
) -> () {
    if !layout.is_drawable() {
        return;
    };
    for layer in layers {
        for row in 0..layout.grid_size {
            // Only the left half is read, the right half is mirrored
            for column in 0..layout.half_width() {
                if !layer.bits.is_set(layout.bit_index(column, row)) {
                    continue;
                };
                fill_square(raster, layout, column, row, layer.color);
                fill_square(
                    raster,
                    layout,
                    layout.mirrored_column(column),
                    row,
                    layer.color,
                );
            };
        };
    };
}

pub fn paint_identicon(pattern: &Pattern) -> RgbImage {
    let layout = pattern.layout();
    let mut raster = new_canvas(
        layout.image_size,
        layout.image_size,
        pattern.palette().background,
    );
    fill_grid(&mut raster, layout, pattern.layers());
    raster
}
