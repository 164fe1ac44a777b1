//! Backend abstraction traits for the rendering system
//!
//! This module defines the trait that rendering backends must implement so the
//! scene can draw without knowing whether it talks to OpenGL or to a recorder.

use crate::color::Color;
use crate::foundation::math::Vertex;
use crate::render::RenderError;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Handle to a vertex buffer stored in the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(pub u64);

impl std::fmt::Display for MeshHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mesh#{}", self.0)
    }
}

/// Main rendering backend trait
///
/// Calls arrive in frame order: `clear`, then any number of
/// `set_object_color` / `draw_triangle_fan` pairs, then `present` and
/// `poll_events`. Buffer uploads may happen at any point before a draw.
pub trait RenderBackend {
    /// Create a vertex buffer holding `vertices` (may be empty)
    fn create_vertex_buffer(&mut self, vertices: &[Vertex]) -> BackendResult<MeshHandle>;

    /// Replace the whole contents of a vertex buffer
    fn update_vertices(&mut self, mesh: MeshHandle, vertices: &[Vertex]) -> BackendResult<()>;

    /// Clear the frame to `color`
    fn clear(&mut self, color: Color) -> BackendResult<()>;

    /// Set the flat color used by subsequent draws
    fn set_object_color(&mut self, color: Color) -> BackendResult<()>;

    /// Draw the first `vertex_count` vertices of `mesh` as a triangle fan
    fn draw_triangle_fan(&mut self, mesh: MeshHandle, vertex_count: usize) -> BackendResult<()>;

    /// Present the finished frame
    fn present(&mut self) -> BackendResult<()>;

    /// Process pending window events
    fn poll_events(&mut self);

    /// Whether the window has been asked to close
    fn should_close(&self) -> bool;
}

impl<B: RenderBackend + ?Sized> RenderBackend for &mut B {
    fn create_vertex_buffer(&mut self, vertices: &[Vertex]) -> BackendResult<MeshHandle> {
        (**self).create_vertex_buffer(vertices)
    }

    fn update_vertices(&mut self, mesh: MeshHandle, vertices: &[Vertex]) -> BackendResult<()> {
        (**self).update_vertices(mesh, vertices)
    }

    fn clear(&mut self, color: Color) -> BackendResult<()> {
        (**self).clear(color)
    }

    fn set_object_color(&mut self, color: Color) -> BackendResult<()> {
        (**self).set_object_color(color)
    }

    fn draw_triangle_fan(&mut self, mesh: MeshHandle, vertex_count: usize) -> BackendResult<()> {
        (**self).draw_triangle_fan(mesh, vertex_count)
    }

    fn present(&mut self) -> BackendResult<()> {
        (**self).present()
    }

    fn poll_events(&mut self) {
        (**self).poll_events();
    }

    fn should_close(&self) -> bool {
        (**self).should_close()
    }
}
