//! Public rendering API
//!
//! The backend trait and the handle types the scene works with.

pub mod render_backend;

pub use render_backend::{BackendResult, MeshHandle, RenderBackend};
