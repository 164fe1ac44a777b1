//! Scene description and per-frame drawing
//!
//! A scene is a background plus an optional polygon track. The engine owns
//! timing; the scene turns timestamps into backend calls.

pub mod background;
pub mod polygon_track;

pub use background::Background;
pub use polygon_track::PolygonTrack;

use crate::config::SceneConfig;
use crate::render::{BackendResult, RenderBackend};

/// Everything drawn in one window
#[derive(Debug)]
pub struct Scene {
    background: Background,
    polygon: Option<PolygonTrack>,
}

impl Scene {
    /// Build the scene and upload its static geometry
    pub fn new<B: RenderBackend>(
        config: &SceneConfig,
        backend: &mut B,
        now: f64,
    ) -> BackendResult<Self> {
        let polygon = config
            .polygon
            .as_ref()
            .map(|polygon| PolygonTrack::new(polygon, backend, now))
            .transpose()?;

        Ok(Self {
            background: Background::from(&config.background),
            polygon,
        })
    }

    /// Update animations and record one frame, up to but not including present
    pub fn frame<B: RenderBackend>(
        &mut self,
        backend: &mut B,
        now: f64,
        delta_time: f32,
    ) -> BackendResult<()> {
        if let Some(polygon) = self.polygon.as_mut() {
            polygon.update(backend, now)?;
        }

        let clear_color = self.background.next_color(delta_time);
        backend.clear(clear_color)?;

        if let Some(polygon) = &self.polygon {
            polygon.draw(backend)?;
        }
        Ok(())
    }

    /// The clear color source
    pub const fn background(&self) -> &Background {
        &self.background
    }

    /// The polygon track, if enabled
    pub const fn polygon(&self) -> Option<&PolygonTrack> {
        self.polygon.as_ref()
    }
}
