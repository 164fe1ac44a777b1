//! Continuous hue cycling

use serde::{Deserialize, Serialize};

use crate::color::{hsv_to_rgb, Color};

/// How far the hue moves each frame
///
/// `PerFrame` ties the color speed to the frame rate; `PerSecond` scales the
/// step by the frame's delta time instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "degrees", rename_all = "snake_case")]
pub enum HueStep {
    /// Fixed number of degrees added every frame
    PerFrame(f32),
    /// Degrees per second of elapsed time
    PerSecond(f32),
}

impl Default for HueStep {
    fn default() -> Self {
        Self::PerFrame(HueCycle::DEFAULT_STEP)
    }
}

impl HueStep {
    /// Degrees to add for a frame that took `delta_time` seconds
    pub fn increment(self, delta_time: f32) -> f32 {
        match self {
            Self::PerFrame(degrees) => degrees,
            Self::PerSecond(rate) => rate * delta_time,
        }
    }
}

/// Hue angle that advances every frame and wraps at 360°
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueCycle {
    hue: f32,
    step: HueStep,
    saturation: f32,
    value: f32,
}

impl Default for HueCycle {
    fn default() -> Self {
        Self::new(HueStep::default(), 1.0, 1.0)
    }
}

impl HueCycle {
    /// Degrees per frame used by default
    pub const DEFAULT_STEP: f32 = 0.005;

    /// Create a cycle starting at hue 0
    pub fn new(step: HueStep, saturation: f32, value: f32) -> Self {
        Self {
            hue: 0.0,
            step,
            saturation,
            value,
        }
    }

    /// Start from a given hue instead of 0
    pub fn with_hue(mut self, hue: f32) -> Self {
        self.hue = hue.rem_euclid(360.0);
        self
    }

    /// Move the hue forward by one frame and return the new color
    pub fn advance(&mut self, delta_time: f32) -> Color {
        self.hue = (self.hue + self.step.increment(delta_time)).rem_euclid(360.0);
        self.color()
    }

    /// Color for the current hue
    pub fn color(&self) -> Color {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }

    /// Current hue in degrees, in 0.0..360.0
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Configured step
    pub fn step(&self) -> HueStep {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hue_after_k_frames() {
        let mut cycle = HueCycle::new(HueStep::PerFrame(0.5), 1.0, 1.0);
        for k in 1..=1000_u32 {
            cycle.advance(0.016);
            let expected = (k as f32 * 0.5).rem_euclid(360.0);
            assert_eq!(cycle.hue(), expected, "frame {k}");
        }
    }

    #[test]
    fn test_default_step_is_per_frame() {
        let mut cycle = HueCycle::default();
        assert_eq!(cycle.step(), HueStep::PerFrame(0.005));
        assert_eq!(cycle.hue(), 0.0);

        for _ in 0..100 {
            // Frame time is ignored in per-frame mode.
            cycle.advance(1.0);
        }
        assert_abs_diff_eq!(cycle.hue(), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_per_second_step_scales_with_delta_time() {
        let mut cycle = HueCycle::new(HueStep::PerSecond(90.0), 1.0, 1.0);
        cycle.advance(0.5);
        assert_abs_diff_eq!(cycle.hue(), 45.0, epsilon = 1e-5);
        cycle.advance(2.0);
        assert_abs_diff_eq!(cycle.hue(), 225.0, epsilon = 1e-4);
        cycle.advance(2.0);
        assert_abs_diff_eq!(cycle.hue(), 45.0, epsilon = 1e-4);
    }

    #[test]
    fn test_hue_stays_below_full_turn() {
        let mut cycle = HueCycle::new(HueStep::PerFrame(120.0), 1.0, 1.0);
        let hues: Vec<f32> = (0..4)
            .map(|_| {
                cycle.advance(0.0);
                cycle.hue()
            })
            .collect();
        assert_eq!(hues, vec![120.0, 240.0, 0.0, 120.0]);
    }

    #[test]
    fn test_advance_returns_color_of_new_hue() {
        let mut cycle = HueCycle::new(HueStep::PerFrame(120.0), 1.0, 1.0);
        assert_eq!(cycle.color(), Color::rgb(1.0, 0.0, 0.0));

        let color = cycle.advance(0.0);
        assert_abs_diff_eq!(color.g, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(color.r, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_start_hue_wraps() {
        let cycle = HueCycle::default().with_hue(400.0);
        assert_abs_diff_eq!(cycle.hue(), 40.0, epsilon = 1e-4);
    }
}
