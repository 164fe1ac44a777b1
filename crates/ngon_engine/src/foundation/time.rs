//! Time management utilities
//!
//! The render loop never reads the system time directly. It asks a [`Clock`]
//! for the number of seconds since the clock was created, which lets tests
//! drive the loop with a [`ManualClock`].

use std::cell::Cell;
use std::time::Instant;

/// Source of elapsed time for the render loop
pub trait Clock {
    /// Seconds elapsed since the clock was created; monotonic
    fn now(&self) -> f64;
}

/// Wall-clock time based on [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Create a clock that starts counting now
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to
///
/// Interior mutability lets the test keep a shared reference while the
/// engine owns another one.
#[derive(Debug, Default)]
pub struct ManualClock {
    seconds: Cell<f64>,
}

impl ManualClock {
    /// Create a clock stopped at `seconds`
    pub fn new(seconds: f64) -> Self {
        Self { seconds: Cell::new(seconds) }
    }

    /// Move the clock forward
    pub fn advance(&self, seconds: f64) {
        self.seconds.set(self.seconds.get() + seconds);
    }

    /// Jump to an absolute time
    pub fn set(&self, seconds: f64) {
        self.seconds.set(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.seconds.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Frame timer fed with clock timestamps
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start_time: f64,
    last_frame: f64,
    delta_time: f32,
    frame_count: u64,
}

impl Timer {
    /// Create a new timer starting at `now`
    pub fn new(now: f64) -> Self {
        Self {
            start_time: now,
            last_frame: now,
            delta_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    #[allow(clippy::cast_possible_truncation)]
    pub fn update(&mut self, now: f64) {
        self.delta_time = (now - self.last_frame).max(0.0) as f32;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f64 {
        self.last_frame - self.start_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f64 {
        let total = self.total_time();
        if total > 0.0 {
            self.frame_count as f64 / total
        } else {
            0.0
        }
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> FrameStats {
        FrameStats {
            frames: self.frame_count,
            elapsed_secs: self.total_time(),
            average_fps: self.average_fps(),
        }
    }
}

/// Summary of a finished render loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Number of frames rendered
    pub frames: u64,
    /// Seconds between the first and last frame
    pub elapsed_secs: f64,
    /// Frames per second over the whole run
    pub average_fps: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(1.5);
        assert_eq!(clock.now(), 1.5);

        clock.advance(0.25);
        assert_eq!(clock.now(), 1.75);

        clock.set(10.0);
        assert_eq!(clock.now(), 10.0);
    }

    #[test]
    fn test_clock_through_reference() {
        fn read<C: Clock>(clock: C) -> f64 {
            clock.now()
        }

        let clock = ManualClock::new(2.0);
        assert_eq!(read(&clock), 2.0);
        clock.advance(1.0);
        assert_eq!(read(&clock), 3.0);
    }

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_timer_delta_and_fps() {
        let mut timer = Timer::new(0.0);
        timer.update(0.5);
        assert_relative_eq!(timer.delta_time(), 0.5);
        timer.update(1.0);
        timer.update(2.0);

        assert_eq!(timer.frame_count(), 3);
        assert_relative_eq!(timer.delta_time(), 1.0);
        assert_relative_eq!(timer.average_fps(), 1.5);

        let stats = timer.stats();
        assert_eq!(stats.frames, 3);
        assert_relative_eq!(stats.elapsed_secs, 2.0);
    }

    #[test]
    fn test_timer_without_frames_reports_zero_fps() {
        let timer = Timer::new(3.0);
        assert_eq!(timer.average_fps(), 0.0);
    }
}
