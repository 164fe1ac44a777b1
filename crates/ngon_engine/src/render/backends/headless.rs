//! Headless backend that records commands instead of drawing
//!
//! `RecordingBackend` keeps every uploaded buffer and an ordered log of the
//! calls it received. It validates handles and vertex counts the same way the
//! OpenGL backend does, so a scene that runs cleanly here issues legal draws.

use std::collections::HashMap;

use crate::color::Color;
use crate::foundation::math::Vertex;
use crate::render::api::{BackendResult, MeshHandle, RenderBackend};
use crate::render::RenderError;

/// One recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// A buffer was created with this many vertices
    CreateBuffer {
        /// New handle
        mesh: MeshHandle,
        /// Vertices uploaded at creation
        vertex_count: usize,
    },
    /// A buffer's contents were replaced
    UpdateBuffer {
        /// Target buffer
        mesh: MeshHandle,
        /// Vertices after the update
        vertex_count: usize,
    },
    /// Frame cleared
    Clear(Color),
    /// Object color changed
    SetColor(Color),
    /// Triangle fan drawn
    DrawTriangleFan {
        /// Source buffer
        mesh: MeshHandle,
        /// Vertices drawn
        vertex_count: usize,
    },
    /// Frame presented
    Present,
}

/// Render backend with no GPU behind it
#[derive(Debug, Default)]
pub struct RecordingBackend {
    buffers: HashMap<MeshHandle, Vec<Vertex>>,
    commands: Vec<RenderCommand>,
    next_mesh_id: u64,
    frames_presented: u64,
    close_after: Option<u64>,
    close_requested: bool,
}

impl RecordingBackend {
    /// Backend that never asks to close on its own
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that reports `should_close` once `frames` frames were presented
    pub fn closing_after(frames: u64) -> Self {
        Self {
            close_after: Some(frames),
            ..Self::default()
        }
    }

    /// Every command recorded so far, oldest first
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Drain the command log
    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current contents of a buffer
    pub fn buffer(&self, mesh: MeshHandle) -> Option<&[Vertex]> {
        self.buffers.get(&mesh).map(Vec::as_slice)
    }

    /// Number of buffers created
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Number of `present` calls
    pub const fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Make `should_close` return true, like a window close button
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }
}

impl RenderBackend for RecordingBackend {
    fn create_vertex_buffer(&mut self, vertices: &[Vertex]) -> BackendResult<MeshHandle> {
        let mesh = MeshHandle(self.next_mesh_id);
        self.next_mesh_id += 1;
        self.buffers.insert(mesh, vertices.to_vec());
        self.commands.push(RenderCommand::CreateBuffer {
            mesh,
            vertex_count: vertices.len(),
        });
        Ok(mesh)
    }

    fn update_vertices(&mut self, mesh: MeshHandle, vertices: &[Vertex]) -> BackendResult<()> {
        let buffer = self.buffers.get_mut(&mesh).ok_or(RenderError::UnknownMesh(mesh))?;
        buffer.clear();
        buffer.extend_from_slice(vertices);
        self.commands.push(RenderCommand::UpdateBuffer {
            mesh,
            vertex_count: vertices.len(),
        });
        Ok(())
    }

    fn clear(&mut self, color: Color) -> BackendResult<()> {
        self.commands.push(RenderCommand::Clear(color));
        Ok(())
    }

    fn set_object_color(&mut self, color: Color) -> BackendResult<()> {
        self.commands.push(RenderCommand::SetColor(color));
        Ok(())
    }

    fn draw_triangle_fan(&mut self, mesh: MeshHandle, vertex_count: usize) -> BackendResult<()> {
        let available = self.buffers.get(&mesh).ok_or(RenderError::UnknownMesh(mesh))?.len();
        if vertex_count > available {
            return Err(RenderError::VertexCountOutOfRange {
                mesh,
                requested: vertex_count,
                available,
            });
        }
        self.commands.push(RenderCommand::DrawTriangleFan { mesh, vertex_count });
        Ok(())
    }

    fn present(&mut self) -> BackendResult<()> {
        self.frames_presented += 1;
        self.commands.push(RenderCommand::Present);
        Ok(())
    }

    fn poll_events(&mut self) {
        if self.close_after.is_some_and(|limit| self.frames_presented >= limit) {
            self.close_requested = true;
        }
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Vertex> {
        vec![
            Vertex::new(0.0, 0.5, 0.0),
            Vertex::new(-0.5, -0.5, 0.0),
            Vertex::new(0.5, -0.5, 0.0),
        ]
    }

    #[test]
    fn test_records_commands_in_order() {
        let mut backend = RecordingBackend::new();
        let mesh = backend.create_vertex_buffer(&triangle()).unwrap();
        backend.clear(Color::BLACK).unwrap();
        backend.set_object_color(Color::rgb(1.0, 0.0, 0.0)).unwrap();
        backend.draw_triangle_fan(mesh, 3).unwrap();
        backend.present().unwrap();

        assert_eq!(
            backend.commands(),
            &[
                RenderCommand::CreateBuffer { mesh, vertex_count: 3 },
                RenderCommand::Clear(Color::BLACK),
                RenderCommand::SetColor(Color::rgb(1.0, 0.0, 0.0)),
                RenderCommand::DrawTriangleFan { mesh, vertex_count: 3 },
                RenderCommand::Present,
            ]
        );
        assert_eq!(backend.frames_presented(), 1);
    }

    #[test]
    fn test_update_replaces_contents() {
        let mut backend = RecordingBackend::new();
        let mesh = backend.create_vertex_buffer(&[]).unwrap();
        assert_eq!(backend.buffer(mesh).map(<[Vertex]>::len), Some(0));

        backend.update_vertices(mesh, &triangle()).unwrap();
        assert_eq!(backend.buffer(mesh), Some(triangle().as_slice()));

        backend.update_vertices(mesh, &triangle()[..1]).unwrap();
        assert_eq!(backend.buffer(mesh).map(<[Vertex]>::len), Some(1));
    }

    #[test]
    fn test_handles_are_distinct() {
        let mut backend = RecordingBackend::new();
        let a = backend.create_vertex_buffer(&triangle()).unwrap();
        let b = backend.create_vertex_buffer(&triangle()).unwrap();
        assert_ne!(a, b);
        assert_eq!(backend.buffer_count(), 2);
    }

    #[test]
    fn test_rejects_unknown_mesh_and_overdraw() {
        let mut backend = RecordingBackend::new();
        let mesh = backend.create_vertex_buffer(&triangle()).unwrap();

        assert!(matches!(
            backend.draw_triangle_fan(MeshHandle(99), 3),
            Err(RenderError::UnknownMesh(MeshHandle(99)))
        ));
        assert!(matches!(
            backend.update_vertices(MeshHandle(99), &triangle()),
            Err(RenderError::UnknownMesh(_))
        ));
        assert!(matches!(
            backend.draw_triangle_fan(mesh, 4),
            Err(RenderError::VertexCountOutOfRange { requested: 4, available: 3, .. })
        ));
    }

    #[test]
    fn test_closing_after_frames() {
        let mut backend = RecordingBackend::closing_after(2);
        for _ in 0..2 {
            assert!(!backend.should_close());
            backend.present().unwrap();
            backend.poll_events();
        }
        assert!(backend.should_close());
    }

    #[test]
    fn test_request_close() {
        let mut backend = RecordingBackend::new();
        backend.poll_events();
        assert!(!backend.should_close());
        backend.request_close();
        assert!(backend.should_close());
    }

    #[test]
    fn test_take_commands_drains_log() {
        let mut backend = RecordingBackend::new();
        backend.present().unwrap();
        assert_eq!(backend.take_commands(), vec![RenderCommand::Present]);
        assert!(backend.commands().is_empty());
    }
}
