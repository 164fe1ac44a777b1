//! Time-driven animation state
//!
//! Both animators are plain state machines fed with timestamps or frame
//! deltas; neither talks to a renderer.

pub mod hue;
pub mod polygon_cycle;

pub use hue::{HueCycle, HueStep};
pub use polygon_cycle::PolygonCycle;
