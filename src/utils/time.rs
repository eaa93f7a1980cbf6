use std::time::{Duration, Instant};

/// Wall-clock frame timer for hosts that drive [`Engine::update`](crate::Engine::update)
/// themselves.
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
    /// Upper bound for a single delta, so a stalled frame does not jump the
    /// playhead across the whole timeline.
    pub max_delta: Duration,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            max_delta: Duration::from_millis(250),
        }
    }

    #[must_use]
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Samples the wall clock; returns the new delta in seconds.
    pub fn tick(&mut self) -> f32 {
        self.advance(Instant::now())
    }

    /// Same as [`tick`](Self::tick) with an explicit timestamp.
    pub fn advance(&mut self, now: Instant) -> f32 {
        let raw = now.saturating_duration_since(self.last_update);
        self.delta = raw.min(self.max_delta);
        self.elapsed = now.saturating_duration_since(self.start_time);
        self.last_update = now;
        self.frame_count += 1;
        self.dt_seconds()
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}
