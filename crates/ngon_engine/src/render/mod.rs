//! Rendering system
//!
//! The scene talks to a [`RenderBackend`]. Two backends ship with the crate:
//! the OpenGL renderer that owns a GLFW window, and a recording backend that
//! keeps a command log for tests and headless runs.

pub mod api;
pub mod backends;
pub mod window;

pub use api::{BackendResult, MeshHandle, RenderBackend};
pub use backends::headless::{RecordingBackend, RenderCommand};
pub use backends::opengl::GlRenderer;
pub use window::{GlWindow, WindowError};

use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Window or context setup failed
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// A shader stage failed to compile
    #[error("{stage} shader compilation failed: {log}")]
    ShaderCompilation {
        /// Shader stage name
        stage: &'static str,
        /// Driver info log
        log: String,
    },

    /// The shader program failed to link
    #[error("Shader program link failed: {0}")]
    ProgramLink(String),

    /// A GPU object could not be allocated
    #[error("Resource creation failed: {0}")]
    ResourceCreation(String),

    /// The handle does not name a live buffer
    #[error("Unknown mesh handle {0}")]
    UnknownMesh(MeshHandle),

    /// A draw asked for more vertices than the buffer holds
    #[error("Draw of {requested} vertices from {mesh} exceeds its {available} vertices")]
    VertexCountOutOfRange {
        /// Buffer that was drawn
        mesh: MeshHandle,
        /// Vertices requested by the draw
        requested: usize,
        /// Vertices stored in the buffer
        available: usize,
    },
}
