//! Packed colours and the iteration-count palette.
//!
//! Pixels are 32 bits in `[B, G, R, pad]` byte order; a packed colour is the
//! little-endian `u32` view of those bytes. The palette is a lookup table
//! from iteration count to packed colour, rebuilt whenever the palette mode
//! or the iteration limit changes.

/// Packs an RGB triple into the `[B, G, R, 0]` pixel format.
#[must_use]
pub const fn pack_bgrx(r: u8, g: u8, b: u8) -> u32 {
    (b as u32) | ((g as u32) << 8) | ((r as u32) << 16)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteMode {
    /// Green ramps up with the iteration count.
    #[default]
    Gradient,
    /// Full green for any escaped pixel, black for immediate escapes.
    Binary,
}

/// Lookup table mapping iteration counts `0..=limit` to packed colours.
///
/// The table has `limit + 1` entries so the never-escaped count (the limit
/// itself) indexes the brightest gradient step.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    mode: PaletteMode,
    limit: u32,
    table: Vec<u32>,
}

impl Palette {
    #[must_use]
    pub fn new(mode: PaletteMode, limit: u32) -> Self {
        let table = (0..=limit)
            .map(|count| match mode {
                PaletteMode::Gradient => {
                    let green = (count as f32 / limit as f32 * 255.0).round() as u8;
                    pack_bgrx(0, green, 0)
                }
                PaletteMode::Binary => pack_bgrx(0, if count > 0 { 255 } else { 0 }, 0),
            })
            .collect();

        Self { mode, limit, table }
    }

    #[must_use]
    pub fn mode(&self) -> PaletteMode {
        self.mode
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// True when the table already matches the requested configuration.
    #[must_use]
    pub fn matches(&self, mode: PaletteMode, limit: u32) -> bool {
        self.mode == mode && self.limit == limit
    }

    #[must_use]
    pub fn colour_for(&self, count: u32) -> u32 {
        self.table[count.min(self.limit) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_bgrx_byte_order() {
        let packed = pack_bgrx(1, 2, 3);

        assert_eq!(packed.to_le_bytes(), [3, 2, 1, 0]);
    }

    #[test]
    fn test_pack_bgrx_pad_byte_is_zero() {
        assert_eq!(pack_bgrx(255, 255, 255).to_le_bytes()[3], 0);
    }

    #[test]
    fn test_gradient_endpoints() {
        let palette = Palette::new(PaletteMode::Gradient, 100);

        assert_eq!(palette.colour_for(0), pack_bgrx(0, 0, 0));
        assert_eq!(palette.colour_for(100), pack_bgrx(0, 255, 0));
    }

    #[test]
    fn test_gradient_midpoint_rounds() {
        let palette = Palette::new(PaletteMode::Gradient, 100);

        // 50/100 * 255 = 127.5, rounds to 128
        assert_eq!(palette.colour_for(50), pack_bgrx(0, 128, 0));
    }

    #[test]
    fn test_gradient_is_monotonic() {
        let palette = Palette::new(PaletteMode::Gradient, 200);

        let mut previous = 0;
        for count in 0..=200 {
            let green = (palette.colour_for(count) >> 8) & 0xff;
            assert!(green >= previous, "green dipped at count {count}");
            previous = green;
        }
    }

    #[test]
    fn test_binary_mode_is_two_valued() {
        let palette = Palette::new(PaletteMode::Binary, 50);

        assert_eq!(palette.colour_for(0), pack_bgrx(0, 0, 0));
        for count in 1..=50 {
            assert_eq!(palette.colour_for(count), pack_bgrx(0, 255, 0));
        }
    }

    #[test]
    fn test_colour_for_clamps_out_of_range_count() {
        let palette = Palette::new(PaletteMode::Gradient, 10);

        assert_eq!(palette.colour_for(10_000), palette.colour_for(10));
    }

    #[test]
    fn test_matches() {
        let palette = Palette::new(PaletteMode::Gradient, 100);

        assert!(palette.matches(PaletteMode::Gradient, 100));
        assert!(!palette.matches(PaletteMode::Gradient, 101));
        assert!(!palette.matches(PaletteMode::Binary, 100));
    }
}
