//! Simulation time management
//!
//! The simulation is driven by an externally supplied fixed step and never
//! reads the wall clock.

/// Tolerance for timer expiry comparisons
///
/// Summing a fixed step like 1/60 many times accumulates rounding error, so a
/// countdown that should hit exactly zero after ⌈d/dt⌉ ticks can be left a
/// hair above it. Anything within this tolerance counts as expired.
pub const TIME_EPSILON: f32 = 1e-4;

/// Fixed-step simulation clock
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl SimClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick of `delta_time` seconds
    pub fn advance(&mut self, delta_time: f32) {
        self.delta_time = delta_time;
        self.total_time += delta_time;
        self.frame_count += 1;
    }

    /// Length of the last tick in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Total simulated seconds
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Number of ticks advanced
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Whether a countdown has reached zero
pub fn countdown_expired(remaining: f32) -> bool {
    remaining <= TIME_EPSILON
}

/// Whether an elapsed age has reached its limit
pub fn age_expired(age: f32, max_age: f32) -> bool {
    age >= max_age - TIME_EPSILON
}
