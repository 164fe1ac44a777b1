//! Render loop driver
//!
//! The engine owns the backend, the clock, the frame timer and the scene. Each
//! tick reads the clock once, lets the scene update and draw, then presents and
//! polls window events. The loop ends when the backend reports a close request
//! or a frame fails.

use thiserror::Error;

use crate::config::{AppConfig, ConfigError, SceneConfig};
use crate::foundation::time::{Clock, FrameStats, MonotonicClock, Timer};
use crate::render::{GlRenderer, RenderBackend, RenderError};
use crate::scene::Scene;

/// Whether the loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Frames are being produced
    Running,
    /// The window closed or a frame failed; no more frames will be drawn
    Terminated,
}

/// Main engine struct
pub struct Engine<B: RenderBackend, C: Clock> {
    backend: B,
    clock: C,
    scene: Scene,
    timer: Timer,
    state: LoopState,
}

impl<B: RenderBackend, C: Clock> Engine<B, C> {
    /// Build the scene on `backend`; timing starts at the clock's current time
    pub fn new(mut backend: B, clock: C, config: &SceneConfig) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");

        let now = clock.now();
        let scene = Scene::new(config, &mut backend, now)
            .map_err(|e| EngineError::InitializationFailed(format!("Scene: {e}")))?;

        Ok(Self {
            backend,
            clock,
            scene,
            timer: Timer::new(now),
            state: LoopState::Running,
        })
    }

    /// Produce one frame, or report that the loop has ended
    ///
    /// A failed frame terminates the loop and returns the error.
    pub fn tick(&mut self) -> Result<LoopState, EngineError> {
        if self.state == LoopState::Terminated {
            return Ok(LoopState::Terminated);
        }
        if self.backend.should_close() {
            log::info!("Close requested, stopping render loop");
            self.state = LoopState::Terminated;
            return Ok(self.state);
        }

        if let Err(e) = self.render_frame() {
            log::error!("Frame {} failed: {e}", self.timer.frame_count());
            self.state = LoopState::Terminated;
            return Err(e.into());
        }
        Ok(self.state)
    }

    fn render_frame(&mut self) -> Result<(), RenderError> {
        let now = self.clock.now();
        self.timer.update(now);

        self.scene.frame(&mut self.backend, now, self.timer.delta_time())?;
        self.backend.present()?;
        self.backend.poll_events();
        Ok(())
    }

    /// Tick until the loop terminates and return the frame statistics
    pub fn run(&mut self) -> Result<FrameStats, EngineError> {
        log::info!("Starting render loop...");

        while self.tick()? == LoopState::Running {}

        let stats = self.timer.stats();
        log::info!(
            "Render loop finished: {} frames in {:.2}s ({:.1} fps)",
            stats.frames,
            stats.elapsed_secs,
            stats.average_fps
        );
        Ok(stats)
    }

    /// Current loop state
    pub const fn state(&self) -> LoopState {
        self.state
    }

    /// Frame counters so far
    pub fn stats(&self) -> FrameStats {
        self.timer.stats()
    }

    /// The scene being drawn
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Get the backend
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Get mutable access to the backend
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

/// Validate `config`, open an OpenGL window and run until it closes
pub fn run_windowed(config: &AppConfig) -> Result<FrameStats, EngineError> {
    config.validate()?;

    let renderer = GlRenderer::new(&config.window)
        .map_err(|e| EngineError::InitializationFailed(format!("Renderer: {e}")))?;
    let mut engine = Engine::new(renderer, MonotonicClock::new(), &config.scene)?;

    let stats = engine.run()?;
    log::info!("Engine shutdown complete");
    Ok(stats)
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Window, renderer or scene setup failed
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// A frame could not be rendered
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    /// The configuration was rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::time::ManualClock;
    use crate::render::RecordingBackend;

    #[test]
    fn test_tick_after_close_stays_terminated() {
        let clock = ManualClock::new(0.0);
        let mut engine = Engine::new(
            RecordingBackend::closing_after(1),
            &clock,
            &SceneConfig::default(),
        )
        .unwrap();

        assert_eq!(engine.tick().unwrap(), LoopState::Running);
        assert_eq!(engine.tick().unwrap(), LoopState::Terminated);
        assert_eq!(engine.tick().unwrap(), LoopState::Terminated);
        assert_eq!(engine.backend().frames_presented(), 1);
        assert_eq!(engine.state(), LoopState::Terminated);
    }

    #[test]
    fn test_closed_window_draws_nothing() {
        let mut backend = RecordingBackend::new();
        backend.request_close();
        let clock = ManualClock::new(0.0);
        let mut engine = Engine::new(backend, &clock, &SceneConfig::default()).unwrap();

        let stats = engine.run().unwrap();
        assert_eq!(stats.frames, 0);
        assert_eq!(engine.backend().frames_presented(), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_opening_a_window() {
        let mut config = AppConfig::circle_approximation();
        config.window.width = 0;
        assert!(matches!(run_windowed(&config), Err(EngineError::Config(_))));
    }
}
