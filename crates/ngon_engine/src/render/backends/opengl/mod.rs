//! OpenGL backend on top of `glow`

mod renderer;
mod shader;

pub use renderer::GlRenderer;
