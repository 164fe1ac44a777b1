//! # ngon engine
//!
//! Small OpenGL animations built around two ideas: a regular polygon whose
//! side count steps through a range until it approaches the circle it is
//! inscribed in, and a window whose clear color walks around the hue circle.
//!
//! ## Features
//!
//! - **Polygon generation**: vertex rings for any regular n-gon
//! - **HSV conversion**: hue/saturation/value to RGB
//! - **Animation state**: time-gated side-count cycling and hue cycling
//! - **Configuration**: TOML or RON files with validated presets
//! - **Backends**: OpenGL through GLFW and `glow`, plus a headless recorder
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ngon_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     ngon_engine::foundation::logging::init();
//!     let stats = run_windowed(&AppConfig::circle_approximation())?;
//!     log::info!("{} frames", stats.frames);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod animation;
pub mod color;
pub mod config;
pub mod foundation;
pub mod geometry;
pub mod render;
pub mod scene;

mod engine;

pub use engine::{run_windowed, Engine, EngineError, LoopState};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        animation::{HueCycle, HueStep, PolygonCycle},
        color::{hsv_to_rgb, Color},
        config::{AppConfig, Config, ConfigError},
        foundation::{
            math::Vertex,
            time::{Clock, FrameStats, ManualClock, MonotonicClock},
        },
        geometry::{regular_polygon, PolygonDescriptor},
        render::{GlRenderer, RecordingBackend, RenderBackend, RenderError},
        run_windowed, Engine, EngineError, LoopState,
    };
}

#[cfg(test)]
mod tests;
