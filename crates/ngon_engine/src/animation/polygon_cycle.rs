//! Periodic side-count cycling
//!
//! The counter starts one below the minimum, so the first advance produces the
//! minimum side count (a triangle with the default range).

use crate::geometry::MIN_SIDES;

/// Side-count counter gated by wall-clock time
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCycle {
    side_count: u32,
    min_sides: u32,
    max_sides: u32,
    interval: f64,
    last_advance: f64,
}

impl PolygonCycle {
    /// Default cycle range lower bound
    pub const DEFAULT_MIN_SIDES: u32 = MIN_SIDES;
    /// Default cycle range upper bound
    pub const DEFAULT_MAX_SIDES: u32 = 12;
    /// Default seconds between advances
    pub const DEFAULT_INTERVAL: f64 = 1.0;

    /// Create a cycle over `min_sides..=max_sides` whose interval starts at `now`
    ///
    /// `min_sides` must be at least 3 and not above `max_sides`; configuration
    /// validation guarantees both.
    pub fn new(min_sides: u32, max_sides: u32, interval: f64, now: f64) -> Self {
        debug_assert!(min_sides >= MIN_SIDES && min_sides <= max_sides);
        debug_assert!(interval > 0.0);

        Self {
            side_count: min_sides - 1,
            min_sides,
            max_sides,
            interval,
            last_advance: now,
        }
    }

    /// The 3..=12 cycle advancing once per second
    pub fn standard(now: f64) -> Self {
        Self::new(
            Self::DEFAULT_MIN_SIDES,
            Self::DEFAULT_MAX_SIDES,
            Self::DEFAULT_INTERVAL,
            now,
        )
    }

    /// Advance if a full interval has passed since the last advance
    ///
    /// Returns the new side count when it changed. Any number of calls within
    /// the same interval yields at most one advance.
    pub fn poll(&mut self, now: f64) -> Option<u32> {
        if now - self.last_advance < self.interval {
            return None;
        }

        self.last_advance = now;
        self.side_count = self.next_side_count();
        Some(self.side_count)
    }

    fn next_side_count(&self) -> u32 {
        if self.side_count >= self.max_sides {
            self.min_sides
        } else {
            self.side_count + 1
        }
    }

    /// Current side count; below the minimum until the first advance
    pub fn side_count(&self) -> u32 {
        self.side_count
    }

    /// Whether the first advance has happened
    pub fn has_started(&self) -> bool {
        self.side_count >= self.min_sides
    }

    /// Timestamp of the last advance (or of creation)
    pub fn last_advance(&self) -> f64 {
        self.last_advance
    }

    /// Seconds between advances
    pub fn interval(&self) -> f64 {
        self.interval
    }
}
