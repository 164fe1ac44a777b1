//! Cycling polygon over an optional reference circle

use crate::animation::PolygonCycle;
use crate::color::Color;
use crate::config::PolygonConfig;
use crate::geometry::PolygonDescriptor;
use crate::render::{BackendResult, MeshHandle, RenderBackend};

/// A GPU buffer and the number of vertices it currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FanMesh {
    mesh: MeshHandle,
    vertex_count: usize,
}

/// Polygon whose side count steps through a range, drawn over a circle
///
/// The circle buffer is uploaded once. The polygon buffer starts empty and is
/// refilled only when the cycle advances, so it is not drawn before the first
/// advance.
#[derive(Debug)]
pub struct PolygonTrack {
    descriptor: PolygonDescriptor,
    cycle: PolygonCycle,
    circle: Option<FanMesh>,
    polygon: FanMesh,
    circle_color: Color,
    polygon_color: Color,
}

impl PolygonTrack {
    /// Upload the buffers for `config`; the first interval starts at `now`
    pub fn new<B: RenderBackend>(
        config: &PolygonConfig,
        backend: &mut B,
        now: f64,
    ) -> BackendResult<Self> {
        let descriptor = PolygonDescriptor::new(config.min_sides, config.radius)
            .with_angular_offset(config.angular_offset);

        let circle = match config.reference_sides {
            Some(sides) => {
                let vertices = descriptor.with_side_count(sides).vertices();
                let mesh = backend.create_vertex_buffer(&vertices)?;
                Some(FanMesh {
                    mesh,
                    vertex_count: vertices.len(),
                })
            }
            None => None,
        };

        let polygon = FanMesh {
            mesh: backend.create_vertex_buffer(&[])?,
            vertex_count: 0,
        };

        log::debug!(
            "Polygon track: {}..={} sides every {}s, reference circle {:?}",
            config.min_sides,
            config.max_sides,
            config.interval_secs,
            config.reference_sides
        );

        Ok(Self {
            descriptor,
            cycle: PolygonCycle::new(config.min_sides, config.max_sides, config.interval_secs, now),
            circle,
            polygon,
            circle_color: config.circle_color,
            polygon_color: config.polygon_color,
        })
    }

    /// Advance the cycle if its interval elapsed and re-upload the polygon
    ///
    /// Returns the new side count when the polygon changed.
    pub fn update<B: RenderBackend>(
        &mut self,
        backend: &mut B,
        now: f64,
    ) -> BackendResult<Option<u32>> {
        let Some(side_count) = self.cycle.poll(now) else {
            return Ok(None);
        };

        let vertices = self.descriptor.with_side_count(side_count).vertices();
        backend.update_vertices(self.polygon.mesh, &vertices)?;
        self.polygon.vertex_count = vertices.len();

        log::debug!("Polygon now has {side_count} sides");
        Ok(Some(side_count))
    }

    /// Draw the circle, then the polygon on top of it
    pub fn draw<B: RenderBackend>(&self, backend: &mut B) -> BackendResult<()> {
        if let Some(circle) = self.circle {
            backend.set_object_color(self.circle_color)?;
            backend.draw_triangle_fan(circle.mesh, circle.vertex_count)?;
        }

        if self.polygon.vertex_count > 0 {
            backend.set_object_color(self.polygon_color)?;
            backend.draw_triangle_fan(self.polygon.mesh, self.polygon.vertex_count)?;
        }
        Ok(())
    }

    /// Current side count, below the minimum before the first advance
    pub fn side_count(&self) -> u32 {
        self.cycle.side_count()
    }

    /// Buffer holding the cycling polygon
    pub const fn polygon_mesh(&self) -> MeshHandle {
        self.polygon.mesh
    }

    /// Buffer holding the reference circle, if enabled
    pub fn circle_mesh(&self) -> Option<MeshHandle> {
        self.circle.map(|circle| circle.mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vertex;
    use crate::render::{RecordingBackend, RenderCommand};
    use approx::assert_relative_eq;

    fn track(backend: &mut RecordingBackend) -> PolygonTrack {
        PolygonTrack::new(&PolygonConfig::default(), backend, 0.0).unwrap()
    }

    #[test]
    fn test_uploads_circle_and_empty_polygon() {
        let mut backend = RecordingBackend::new();
        let track = track(&mut backend);

        let circle = track.circle_mesh().unwrap();
        assert_eq!(backend.buffer(circle).map(<[Vertex]>::len), Some(100));
        assert_eq!(backend.buffer(track.polygon_mesh()).map(<[Vertex]>::len), Some(0));
        for vertex in backend.buffer(circle).unwrap() {
            assert_relative_eq!(vertex.distance_from_origin(), 0.5, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_polygon_hidden_until_first_advance() {
        let mut backend = RecordingBackend::new();
        let mut track = track(&mut backend);
        backend.take_commands();

        assert_eq!(track.update(&mut backend, 0.5).unwrap(), None);
        track.draw(&mut backend).unwrap();

        let draws: Vec<_> = backend
            .commands()
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawTriangleFan { .. }))
            .collect();
        assert_eq!(draws.len(), 1);
    }

    #[test]
    fn test_update_regenerates_polygon() {
        let mut backend = RecordingBackend::new();
        let mut track = track(&mut backend);

        assert_eq!(track.update(&mut backend, 1.0).unwrap(), Some(3));
        assert_eq!(backend.buffer(track.polygon_mesh()).map(<[Vertex]>::len), Some(3));

        assert_eq!(track.update(&mut backend, 1.5).unwrap(), None);
        assert_eq!(track.update(&mut backend, 2.0).unwrap(), Some(4));
        assert_eq!(backend.buffer(track.polygon_mesh()).map(<[Vertex]>::len), Some(4));
        assert_eq!(track.side_count(), 4);
    }

    #[test]
    fn test_draws_circle_before_polygon_in_their_colors() {
        let mut backend = RecordingBackend::new();
        let mut track = track(&mut backend);
        track.update(&mut backend, 1.0).unwrap();
        backend.take_commands();

        track.draw(&mut backend).unwrap();

        let config = PolygonConfig::default();
        assert_eq!(
            backend.commands(),
            &[
                RenderCommand::SetColor(config.circle_color),
                RenderCommand::DrawTriangleFan {
                    mesh: track.circle_mesh().unwrap(),
                    vertex_count: 100,
                },
                RenderCommand::SetColor(config.polygon_color),
                RenderCommand::DrawTriangleFan {
                    mesh: track.polygon_mesh(),
                    vertex_count: 3,
                },
            ]
        );
    }

    #[test]
    fn test_circle_can_be_disabled() {
        let mut backend = RecordingBackend::new();
        let config = PolygonConfig {
            reference_sides: None,
            ..PolygonConfig::default()
        };
        let track = PolygonTrack::new(&config, &mut backend, 0.0).unwrap();
        assert!(track.circle_mesh().is_none());
        assert_eq!(backend.buffer_count(), 1);
    }
}
