//! Per-frame clear color

use crate::animation::HueCycle;
use crate::color::Color;
use crate::config::BackgroundConfig;

/// Source of the clear color
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    /// Constant color
    Fixed(Color),
    /// Hue that advances every frame
    HueCycle(HueCycle),
}

impl From<&BackgroundConfig> for Background {
    fn from(config: &BackgroundConfig) -> Self {
        match *config {
            BackgroundConfig::Fixed { color } => Self::Fixed(color),
            BackgroundConfig::HueCycle {
                saturation,
                value,
                step,
            } => Self::HueCycle(HueCycle::new(step, saturation, value)),
        }
    }
}

impl Background {
    /// Advance one frame and return the color to clear with
    pub fn next_color(&mut self, delta_time: f32) -> Color {
        match self {
            Self::Fixed(color) => *color,
            Self::HueCycle(cycle) => {
                let color = cycle.advance(delta_time);
                log::trace!("Hue {:.3} -> {:?}", cycle.hue(), color.to_array());
                color
            }
        }
    }

    /// Current hue, if this background cycles
    pub fn hue(&self) -> Option<f32> {
        match self {
            Self::Fixed(_) => None,
            Self::HueCycle(cycle) => Some(cycle.hue()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::HueStep;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_background_never_changes() {
        let color = Color::rgb(0.89, 0.89, 0.89);
        let mut background = Background::from(&BackgroundConfig::Fixed { color });
        for _ in 0..10 {
            assert_eq!(background.next_color(0.016), color);
        }
        assert_eq!(background.hue(), None);
    }

    #[test]
    fn test_hue_background_advances_before_returning() {
        let mut background = Background::from(&BackgroundConfig::HueCycle {
            saturation: 1.0,
            value: 1.0,
            step: HueStep::PerFrame(60.0),
        });

        let first = background.next_color(0.0);
        assert_relative_eq!(background.hue().unwrap(), 60.0);
        assert_relative_eq!(first.r, 1.0);
        assert_relative_eq!(first.g, 1.0);
        assert_relative_eq!(first.b, 0.0);
    }
}
