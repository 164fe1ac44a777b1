//! Math utilities and types
//!
//! Provides the vector aliases and the GPU vertex layout used by the
//! geometry generators and the render backends.

use bytemuck::{Pod, Zeroable};

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Full turn in radians
pub const TAU: f32 = std::f32::consts::TAU;

/// Quarter turn in radians (top of the unit circle)
pub const FRAC_PI_2: f32 = std::f32::consts::FRAC_PI_2;

/// Position-only vertex uploaded to vertex buffers
///
/// `#[repr(C)]` keeps the three floats tightly packed so a `&[Vertex]` can be
/// handed to the GPU as raw bytes through `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    /// Position in normalized device coordinates
    pub position: [f32; 3],
}

impl Vertex {
    /// Create a vertex from its coordinates
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }

    /// Size of one vertex in bytes, used as the attribute stride
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    /// Position as a nalgebra vector
    pub fn to_vec3(self) -> Vec3 {
        Vec3::from(self.position)
    }

    /// Euclidean distance from the origin
    pub fn distance_from_origin(self) -> f32 {
        self.to_vec3().norm()
    }
}

impl From<Vec3> for Vertex {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
