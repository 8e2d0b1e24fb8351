//! Tests for hue derivation and colour conversion

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use convviz::color::palette::{DIM_GREY, Hsl, dim, filter_channel_color};

    // Tests the same pair always yields the same CSS colour
    // Verified by hashing with a varying seed
    #[test]
    fn test_color_is_deterministic() {
        assert_eq!(filter_channel_color(2, 1).css(), filter_channel_color(2, 1).css());
        assert_eq!(filter_channel_color(0, 0).css(), "hsl(39, 60%, 70%)");
    }

    // Tests hues stay in range and spread across all control combinations
    // Verified by reducing the hash modulo 8
    #[test]
    fn test_hue_spread() {
        let mut hues = HashSet::new();
        for filter in 0..4 {
            for channel in 0..3 {
                let color = filter_channel_color(filter, channel);
                assert!(color.hue < 360);
                assert_eq!((color.saturation, color.lightness), (60, 70));
                hues.insert(color.hue);
            }
        }
        assert!(hues.len() >= 10, "only {} distinct hues", hues.len());
    }

    // Tests HSL to RGB conversion at the primaries
    // Verified by swapping the green and blue sectors
    #[test]
    fn test_to_rgba_primaries() {
        let hsl = |hue, saturation, lightness| Hsl {
            hue,
            saturation,
            lightness,
        };
        assert_eq!(hsl(0, 100, 50).to_rgba(), [255, 0, 0, 255]);
        assert_eq!(hsl(120, 100, 50).to_rgba(), [0, 255, 0, 255]);
        assert_eq!(hsl(240, 100, 50).to_rgba(), [0, 0, 255, 255]);
        assert_eq!(hsl(200, 0, 100).to_rgba(), [255, 255, 255, 255]);
        assert_eq!(hsl(200, 0, 0).to_rgba(), [0, 0, 0, 255]);
    }

    // Tests dimming moves colours toward grey and keeps alpha
    // Verified by blending toward black
    #[test]
    fn test_dim() {
        assert_eq!(dim(DIM_GREY), DIM_GREY);
        let dimmed = dim([255, 255, 255, 200]);
        assert!(dimmed[0] < 255 && dimmed[0] > DIM_GREY[0]);
        assert_eq!(dimmed[3], 200);
    }
}
