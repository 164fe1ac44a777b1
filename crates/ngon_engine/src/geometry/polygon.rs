//! Regular polygon generation
//!
//! Vertices are produced clockwise starting at `angular_offset`, so with the
//! default offset of π/2 the first vertex sits at the top of the circle and
//! stays there for every side count. The ordering is suitable for drawing
//! the polygon as a triangle fan from vertex 0.

use crate::foundation::math::{Vec3, Vertex, FRAC_PI_2, TAU};

/// Smallest side count that forms a polygon
pub const MIN_SIDES: u32 = 3;

/// Side count used for the smooth reference circle
pub const REFERENCE_CIRCLE_SIDES: u32 = 100;

/// Parameters of a regular polygon inscribed in a circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonDescriptor {
    /// Number of sides (and vertices), at least [`MIN_SIDES`]
    pub side_count: u32,
    /// Circumradius
    pub radius: f32,
    /// Angle of the first vertex in radians
    pub angular_offset: f32,
}

impl PolygonDescriptor {
    /// Create a descriptor starting at the top of the circle
    pub const fn new(side_count: u32, radius: f32) -> Self {
        Self {
            side_count,
            radius,
            angular_offset: FRAC_PI_2,
        }
    }

    /// Override the starting angle
    pub fn with_angular_offset(mut self, angular_offset: f32) -> Self {
        self.angular_offset = angular_offset;
        self
    }

    /// Same radius and offset with a different side count
    pub fn with_side_count(mut self, side_count: u32) -> Self {
        self.side_count = side_count;
        self
    }

    /// Fixed high side count descriptor used as a visual circle
    pub const fn reference_circle(radius: f32) -> Self {
        Self::new(REFERENCE_CIRCLE_SIDES, radius)
    }

    /// Generate the vertex ring for this descriptor
    pub fn vertices(&self) -> Vec<Vertex> {
        regular_polygon(self.side_count, self.radius, self.angular_offset)
    }
}

/// Generate the vertices of a regular polygon
///
/// Vertex `i` lies at angle `angular_offset - 2π·i/side_count` on the circle of
/// the given radius, with `z = 0`.
///
/// `side_count` must be at least [`MIN_SIDES`]; callers guarantee this, it is
/// only checked in debug builds.
pub fn regular_polygon(side_count: u32, radius: f32, angular_offset: f32) -> Vec<Vertex> {
    debug_assert!(
        side_count >= MIN_SIDES,
        "a polygon needs at least {MIN_SIDES} sides, got {side_count}"
    );

    let step = TAU / side_count as f32;
    (0..side_count)
        .map(|i| {
            let (sin, cos) = (angular_offset - step * i as f32).sin_cos();
            Vertex::from(Vec3::new(radius * cos, radius * sin, 0.0))
        })
        .collect()
}
