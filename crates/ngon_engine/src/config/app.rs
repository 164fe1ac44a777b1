//! Application configuration
//!
//! `AppConfig` bundles the window settings with the scene description. The
//! three presets match the bundled demo binaries.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::animation::{HueStep, PolygonCycle};
use crate::color::Color;
use crate::foundation::math::FRAC_PI_2;
use crate::geometry::{MIN_SIDES, REFERENCE_CIRCLE_SIDES};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window settings
    pub window: WindowConfig,
    /// What gets drawn
    pub scene: SceneConfig,
}

impl Config for AppConfig {}

impl AppConfig {
    /// Cycling polygon over a reference circle on a light gray background
    pub fn circle_approximation() -> Self {
        Self {
            window: WindowConfig {
                title: "Circle Approximation by n-gon".to_string(),
                ..WindowConfig::default()
            },
            scene: SceneConfig {
                background: BackgroundConfig::Fixed {
                    color: Color::rgb(0.89, 0.89, 0.89),
                },
                polygon: Some(PolygonConfig::default()),
            },
        }
    }

    /// Full-window color field cycling through the hue circle
    pub fn rainbow_window() -> Self {
        Self {
            window: WindowConfig {
                title: "Rainbow Window".to_string(),
                ..WindowConfig::default()
            },
            scene: SceneConfig {
                background: BackgroundConfig::default_hue_cycle(),
                polygon: None,
            },
        }
    }

    /// Both animations in one window
    pub fn hue_gon() -> Self {
        Self {
            window: WindowConfig {
                title: "Hue-gon".to_string(),
                ..WindowConfig::default()
            },
            scene: SceneConfig {
                background: BackgroundConfig::default_hue_cycle(),
                polygon: Some(PolygonConfig::default()),
            },
        }
    }

    /// Load and validate `path`, or fall back to `preset` when no path is given
    pub fn load_or_preset(
        path: Option<impl AsRef<Path>>,
        preset: fn() -> Self,
    ) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let path = path.as_ref();
                log::info!("Loading configuration from {}", path.display());
                Self::load_from_file(path)?
            }
            None => preset(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every value the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.scene.validate()
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Synchronize buffer swaps with the display refresh
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ngon".to_string(),
            width: 800,
            height: 800,
            vsync: true,
        }
    }
}

impl WindowConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid {
                field: "window.width/height",
                reason: format!("window must not be empty, got {}x{}", self.width, self.height),
            });
        }
        Ok(())
    }
}

/// Scene description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// How the window is cleared each frame
    pub background: BackgroundConfig,
    /// Cycling polygon track, `None` to disable it
    ///
    /// Absent from a `[scene]` table means disabled, since TOML has no null.
    #[serde(default)]
    pub polygon: Option<PolygonConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        AppConfig::circle_approximation().scene
    }
}

impl SceneConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.background.validate()?;
        match &self.polygon {
            Some(polygon) => polygon.validate(),
            None => Ok(()),
        }
    }
}

/// Background fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BackgroundConfig {
    /// Same clear color every frame
    Fixed {
        /// Clear color
        color: Color,
    },
    /// Clear color derived from a hue that advances every frame
    HueCycle {
        /// HSV saturation, 0.0-1.0
        saturation: f32,
        /// HSV value, 0.0-1.0
        value: f32,
        /// Hue advance per frame or per second
        step: HueStep,
    },
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self::default_hue_cycle()
    }
}

impl BackgroundConfig {
    /// Fully saturated, full brightness, 0.005° per frame
    pub fn default_hue_cycle() -> Self {
        Self::HueCycle {
            saturation: 1.0,
            value: 1.0,
            step: HueStep::default(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Fixed { color } => ensure_normalized("scene.background.color", color),
            Self::HueCycle { saturation, value, step } => {
                ensure_unit("scene.background.saturation", saturation)?;
                ensure_unit("scene.background.value", value)?;
                let degrees = match step {
                    HueStep::PerFrame(degrees) | HueStep::PerSecond(degrees) => degrees,
                };
                if !degrees.is_finite() {
                    return Err(ConfigError::Invalid {
                        field: "scene.background.step",
                        reason: format!("step must be finite, got {degrees}"),
                    });
                }
                Ok(())
            }
        }
    }
}

/// Cycling polygon settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonConfig {
    /// Circumradius in normalized device coordinates
    pub radius: f32,
    /// Angle of the first vertex in radians
    pub angular_offset: f32,
    /// First side count of the cycle
    pub min_sides: u32,
    /// Last side count before wrapping back to `min_sides`
    pub max_sides: u32,
    /// Seconds between side count changes
    pub interval_secs: f64,
    /// Side count of the reference circle, `None` to hide it
    pub reference_sides: Option<u32>,
    /// Fill color of the reference circle
    pub circle_color: Color,
    /// Fill color of the cycling polygon
    pub polygon_color: Color,
}

impl Default for PolygonConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            angular_offset: FRAC_PI_2,
            min_sides: PolygonCycle::DEFAULT_MIN_SIDES,
            max_sides: PolygonCycle::DEFAULT_MAX_SIDES,
            interval_secs: PolygonCycle::DEFAULT_INTERVAL,
            reference_sides: Some(REFERENCE_CIRCLE_SIDES),
            circle_color: Color::rgb(0.96, 0.76, 0.0),
            polygon_color: Color::rgb(0.22, 0.51, 0.81),
        }
    }
}

impl PolygonConfig {
    /// Smallest reference circle side count that still reads as a circle
    pub const SMOOTH_CIRCLE_SIDES: u32 = 32;

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::Invalid {
                field: "scene.polygon.radius",
                reason: format!("radius must be positive, got {}", self.radius),
            });
        }
        if !self.angular_offset.is_finite() {
            return Err(ConfigError::Invalid {
                field: "scene.polygon.angular_offset",
                reason: format!("offset must be finite, got {}", self.angular_offset),
            });
        }
        if self.min_sides < MIN_SIDES {
            return Err(ConfigError::Invalid {
                field: "scene.polygon.min_sides",
                reason: format!("need at least {MIN_SIDES} sides, got {}", self.min_sides),
            });
        }
        if self.max_sides < self.min_sides {
            return Err(ConfigError::Invalid {
                field: "scene.polygon.max_sides",
                reason: format!(
                    "max_sides ({}) is below min_sides ({})",
                    self.max_sides, self.min_sides
                ),
            });
        }
        if !(self.interval_secs.is_finite() && self.interval_secs > 0.0) {
            return Err(ConfigError::Invalid {
                field: "scene.polygon.interval_secs",
                reason: format!("interval must be positive, got {}", self.interval_secs),
            });
        }
        if let Some(sides) = self.reference_sides {
            if sides < MIN_SIDES {
                return Err(ConfigError::Invalid {
                    field: "scene.polygon.reference_sides",
                    reason: format!("need at least {MIN_SIDES} sides, got {sides}"),
                });
            }
            if sides < Self::SMOOTH_CIRCLE_SIDES {
                log::warn!(
                    "Reference circle with {sides} sides will look faceted (>= {} recommended)",
                    Self::SMOOTH_CIRCLE_SIDES
                );
            }
        }
        ensure_normalized("scene.polygon.circle_color", self.circle_color)?;
        ensure_normalized("scene.polygon.polygon_color", self.polygon_color)
    }
}

fn ensure_unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected 0.0-1.0, got {value}"),
        })
    }
}

fn ensure_normalized(field: &'static str, color: Color) -> Result<(), ConfigError> {
    if color.is_normalized() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("color channels must be 0.0-1.0, got {:?}", color.to_array()),
        })
    }
}
