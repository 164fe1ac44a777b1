//! Color types and color-space conversion

pub mod hsv;

pub use hsv::{hsv_to_rgb, HueSector};

use serde::{Deserialize, Serialize};

/// Linear RGBA color, every channel in 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    #[serde(default = "opaque")]
    pub a: f32,
}

const fn opaque() -> f32 {
    1.0
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque color from its RGB channels
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with explicit alpha
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as `[r, g, b, a]`, the layout shader uniforms expect
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Whether every channel lies in 0.0-1.0
    pub fn is_normalized(self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Color::from([0.1, 0.2, 0.3]), Color::rgba(0.1, 0.2, 0.3, 1.0));
        assert_eq!(Color::rgb(0.5, 0.25, 1.0).to_array(), [0.5, 0.25, 1.0, 1.0]);
    }

    #[test]
    fn test_normalized_range() {
        assert!(Color::rgb(0.0, 1.0, 0.5).is_normalized());
        assert!(!Color::rgb(1.5, 0.0, 0.0).is_normalized());
        assert!(!Color::rgba(0.0, 0.0, 0.0, -0.1).is_normalized());
    }

    #[test]
    fn test_alpha_defaults_to_opaque_when_deserialized() {
        let color: Color = toml::from_str("r = 0.2\ng = 0.4\nb = 0.6").unwrap();
        assert_eq!(color, Color::rgb(0.2, 0.4, 0.6));
    }
}
