//! Procedural geometry

pub mod polygon;

pub use polygon::{regular_polygon, PolygonDescriptor, MIN_SIDES, REFERENCE_CIRCLE_SIDES};
