//! HSV to RGB conversion
//!
//! The hue circle is split into six 60° sectors. Inside a sector one channel
//! sits at `V`, one at `p = V(1-S)` and the third ramps between them, which
//! keeps the result continuous across sector edges.

use super::Color;

/// One of the six 60° slices of the hue circle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueSector {
    /// 0°-60°, red to yellow
    RedYellow,
    /// 60°-120°, yellow to green
    YellowGreen,
    /// 120°-180°, green to cyan
    GreenCyan,
    /// 180°-240°, cyan to blue
    CyanBlue,
    /// 240°-300°, blue to magenta
    BlueMagenta,
    /// 300°-360°, magenta to red
    MagentaRed,
}

impl HueSector {
    /// Sector containing `hue` (degrees, any value) and the fractional
    /// position inside it in 0.0-1.0
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn locate(hue: f32) -> (Self, f32) {
        let scaled = hue.rem_euclid(360.0) / 60.0;
        let whole = scaled.floor();
        let fraction = scaled - whole;

        // rem_euclid can round up to exactly 360.0 for tiny negative hues,
        // hence the modulo.
        let sector = match (whole as u32) % 6 {
            0 => Self::RedYellow,
            1 => Self::YellowGreen,
            2 => Self::GreenCyan,
            3 => Self::CyanBlue,
            4 => Self::BlueMagenta,
            _ => Self::MagentaRed,
        };
        (sector, fraction)
    }
}

/// Convert hue (degrees), saturation and value to an opaque RGB color
///
/// `hue` wraps, so 360° is exactly 0°. With zero saturation the result is
/// the gray `(value, value, value)` whatever the hue.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Color {
    if saturation == 0.0 {
        return Color::rgb(value, value, value);
    }

    let (sector, f) = HueSector::locate(hue);
    let v = value;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    match sector {
        HueSector::RedYellow => Color::rgb(v, t, p),
        HueSector::YellowGreen => Color::rgb(q, v, p),
        HueSector::GreenCyan => Color::rgb(p, v, t),
        HueSector::CyanBlue => Color::rgb(p, q, v),
        HueSector::BlueMagenta => Color::rgb(t, p, v),
        HueSector::MagentaRed => Color::rgb(v, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_rgb(color: Color, expected: [f32; 3]) {
        assert_abs_diff_eq!(color.r, expected[0], epsilon = 1e-6);
        assert_abs_diff_eq!(color.g, expected[1], epsilon = 1e-6);
        assert_abs_diff_eq!(color.b, expected[2], epsilon = 1e-6);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_primary_colors() {
        assert_rgb(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        assert_rgb(hsv_to_rgb(120.0, 1.0, 1.0), [0.0, 1.0, 0.0]);
        assert_rgb(hsv_to_rgb(240.0, 1.0, 1.0), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_secondary_colors() {
        assert_rgb(hsv_to_rgb(60.0, 1.0, 1.0), [1.0, 1.0, 0.0]);
        assert_rgb(hsv_to_rgb(180.0, 1.0, 1.0), [0.0, 1.0, 1.0]);
        assert_rgb(hsv_to_rgb(300.0, 1.0, 1.0), [1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_full_turn_wraps_exactly() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(720.0, 0.7, 0.9), hsv_to_rgb(0.0, 0.7, 0.9));
        assert_rgb(hsv_to_rgb(-120.0, 1.0, 1.0), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_zero_saturation_is_gray_for_any_hue() {
        for hue in [0.0, 37.5, 60.0, 180.0, 359.9, 360.0] {
            assert_eq!(hsv_to_rgb(hue, 0.0, 0.5), Color::rgb(0.5, 0.5, 0.5));
        }
    }

    #[test]
    fn test_continuous_across_sector_edges() {
        for edge in [60.0_f32, 120.0, 180.0, 240.0, 300.0, 360.0] {
            let before = hsv_to_rgb(edge - 0.001, 1.0, 1.0);
            let at = hsv_to_rgb(edge, 1.0, 1.0);
            assert_abs_diff_eq!(before.r, at.r, epsilon = 1e-3);
            assert_abs_diff_eq!(before.g, at.g, epsilon = 1e-3);
            assert_abs_diff_eq!(before.b, at.b, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(HueSector::locate(0.0).0, HueSector::RedYellow);
        assert_eq!(HueSector::locate(59.999).0, HueSector::RedYellow);
        assert_eq!(HueSector::locate(60.0), (HueSector::YellowGreen, 0.0));
        assert_eq!(HueSector::locate(299.99).0, HueSector::BlueMagenta);
        assert_eq!(HueSector::locate(300.0).0, HueSector::MagentaRed);
        assert_eq!(HueSector::locate(360.0), (HueSector::RedYellow, 0.0));
    }

    #[test]
    fn test_partial_saturation_and_value() {
        // 30° sits halfway through the first sector.
        assert_rgb(hsv_to_rgb(30.0, 0.5, 0.8), [0.8, 0.6, 0.4]);
    }
}
