//! Filter/channel colours derived from a stable hash

use std::fmt;

use crate::color::hash::{cyrb53, filter_channel_key};
use crate::io::configuration::{COLOR_LIGHTNESS, COLOR_SATURATION, PADDING_DIM_WEIGHT};

/// Neutral colour for input cells outside the footprint
pub const NEUTRAL: [u8; 4] = [236, 236, 236, 255];
/// Colour for output cells that are not highlighted
pub const OUTPUT_IDLE: [u8; 4] = [250, 250, 250, 255];
/// Background behind all grids
pub const BACKGROUND: [u8; 4] = [255, 255, 255, 255];
/// Grey that dimmed padding cells blend toward
pub const DIM_GREY: [u8; 4] = [150, 150, 150, 255];

/// Colour in hue/saturation/lightness form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees, `0..360`
    pub hue: u32,
    /// Saturation in percent
    pub saturation: u32,
    /// Lightness in percent
    pub lightness: u32,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl Hsl {
    /// CSS colour string, e.g. `hsl(212, 60%, 70%)`
    pub fn css(&self) -> String {
        self.to_string()
    }

    /// Convert to opaque 8-bit RGBA
    pub fn to_rgba(&self) -> [u8; 4] {
        let h = f64::from(self.hue % 360) / 60.0;
        let s = f64::from(self.saturation.min(100)) / 100.0;
        let l = f64::from(self.lightness.min(100)) / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        [channel(r), channel(g), channel(b), 255]
    }
}

/// Deterministic colour for one filter/channel pair
pub fn filter_channel_color(filter: usize, channel: usize) -> Hsl {
    let hash = cyrb53(&filter_channel_key(filter, channel), 0);
    Hsl {
        hue: (hash % 360) as u32,
        saturation: COLOR_SATURATION,
        lightness: COLOR_LIGHTNESS,
    }
}

/// Blend a colour toward grey to mark padding cells
pub fn dim(rgba: [u8; 4]) -> [u8; 4] {
    let weight = u16::from(PADDING_DIM_WEIGHT);
    let blend = |c: u8, g: u8| ((u16::from(c) * (255 - weight) + u16::from(g) * weight) / 255) as u8;
    [
        blend(rgba[0], DIM_GREY[0]),
        blend(rgba[1], DIM_GREY[1]),
        blend(rgba[2], DIM_GREY[2]),
        rgba[3],
    ]
}
