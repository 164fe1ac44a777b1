//! Backend implementations for the render module
//!
//! OpenGL drives the real window; the headless recorder stands in for it in
//! tests.

/// Command-recording backend with no GPU
pub mod headless;

/// OpenGL 3.3 core backend
pub mod opengl;
