use image::Rgb;

use faceprint_utils::{
    bits::BitArray,
    colors::{NamedColor, NAMED_COLORS},
    random::TextSeededRng,
};

use super::errors::IdenticonError;
use super::layout::Layout;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgb<u8>,
    pub primary: Rgb<u8>,
    pub secondary: Rgb<u8>,
}

impl Palette {
    /// Draws 3 distinct colors from the color table.
    /// Colors are assigned in draw order.
    fn sample(rng: &mut TextSeededRng) -> Self {
        let picked: Vec<&NamedColor> = rng.sample_distinct(NAMED_COLORS.as_slice(), 3)
            .expect("color table should contain at least 3 colors");
        Self {
            background: Rgb(picked[0].rgb),
            primary: Rgb(picked[1].rgb),
            secondary: Rgb(picked[2].rgb),
        }
    }

    pub fn colors(&self) -> [Rgb<u8>; 3] {
        [self.background, self.primary, self.secondary]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FillLayer {
    pub bits: BitArray,
    pub color: Rgb<u8>,
}

pub struct Pattern {
    pub(super) layout: Layout,
    pub(super) palette: Palette,
    // Later layers are drawn on top
    pub(super) layers: Vec<FillLayer>,
}

impl Pattern {
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn layers(&self) -> &[FillLayer] {
        &self.layers
    }
}

pub fn generate_pattern(
    text: &str,
    image_size: u32,
    grid_size: u32,
) -> Result<Pattern, IdenticonError> {
    let layout = Layout::new(image_size, grid_size)?;
    // Draw order matters: primary bits, secondary bits, palette
    let mut rng = TextSeededRng::new(text);
    let primary_bits = rng.random_bits(layout.bit_width());
    let secondary_bits = rng.random_bits(layout.bit_width());
    let palette = Palette::sample(&mut rng);
    log::debug!(
        "identicon pattern: grid {}x{}, square size {}, palette {:?}",
        layout.grid_size,
        layout.grid_size,
        layout.square_size,
        palette.colors(),
    );
    let layers = vec![
        FillLayer { bits: primary_bits, color: palette.primary },
        FillLayer { bits: secondary_bits, color: palette.secondary },
    ];
    let pattern = Pattern { layout, palette, layers };
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_pattern() {
        let pattern = generate_pattern("alice", 140, 7).unwrap();
        assert_eq!(pattern.layout().image_size, 140);
        assert_eq!(pattern.layers().len(), 2);
        for layer in pattern.layers() {
            assert_eq!(layer.bits.len(), 140);
        };
        let palette = pattern.palette();
        assert_eq!(pattern.layers()[0].color, palette.primary);
        assert_eq!(pattern.layers()[1].color, palette.secondary);
    }

    #[test]
    fn test_generate_pattern_deterministic() {
        let pattern_1 = generate_pattern("alice", 140, 7).unwrap();
        let pattern_2 = generate_pattern("alice", 140, 7).unwrap();
        assert_eq!(pattern_1.palette(), pattern_2.palette());
        assert_eq!(pattern_1.layers(), pattern_2.layers());
    }

    #[test]
    fn test_generate_pattern_layers_differ() {
        let pattern = generate_pattern("alice", 140, 7).unwrap();
        assert_ne!(pattern.layers()[0].bits, pattern.layers()[1].bits);
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        for text in ["", "alice", "bob", "carol", "dave"] {
            let pattern = generate_pattern(text, 100, 7).unwrap();
            let [background, primary, secondary] = pattern.palette().colors();
            assert_ne!(background, primary);
            assert_ne!(background, secondary);
            assert_ne!(primary, secondary);
        };
    }

    #[test]
    fn test_generate_pattern_wide_grid() {
        let pattern = generate_pattern("alice", 40, 30).unwrap();
        assert_eq!(pattern.layers()[0].bits.len(), 480);
    }

    #[test]
    fn test_generate_pattern_invalid_size() {
        let result = generate_pattern("alice", 19, 7);
        assert!(matches!(result, Err(IdenticonError::ImageSizeTooSmall(20))));
        let result = generate_pattern("alice", 1601, 7);
        assert!(matches!(result, Err(IdenticonError::ImageSizeTooLarge(1600))));
    }
}
