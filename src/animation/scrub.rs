//! Timeline ruler geometry and pointer scrubbing.
//!
//! The ruler maps horizontal pointer positions to absolute times. Scrubbing
//! always pauses the clock: a drag never competes with automatic advancement.
//! Jumping to a keyframe marker only moves the playhead.

use crate::animation::clock::{PlaybackClock, PlaybackUpdate};

/// Horizontal extent of the timeline ruler in pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineRuler {
    pub left: f32,
    pub width: f32,
}

/// One tick mark of the ruler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerTick {
    pub time: f32,
    /// Major ticks carry a seconds label.
    pub major: bool,
}

impl TimelineRuler {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Pointer position as a fraction of the ruler width, clamped to `[0, 1]`.
    #[must_use]
    pub fn fraction_at(&self, pointer_x: f32) -> f32 {
        if self.width <= 0.0 {
            return 0.0;
        }
        ((pointer_x - self.left) / self.width).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn time_at(&self, pointer_x: f32, duration: f32) -> f32 {
        self.fraction_at(pointer_x) * duration.max(0.0)
    }

    /// Pointer x of `time` on this ruler.
    #[must_use]
    pub fn x_for_time(&self, time: f32, duration: f32) -> f32 {
        self.left + time_fraction(time, duration) * self.width
    }
}

/// Position of `time` along a timeline of `duration`, for the playhead and
/// keyframe markers. Zero for an empty timeline.
#[must_use]
pub fn time_fraction(time: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 0.0;
    }
    time / duration
}

/// Upper bound on the number of tick intervals [`ruler_ticks`] lays out.
pub const MAX_RULER_TICKS: u32 = 1000;

/// Tick layout for a timeline of `duration` seconds.
///
/// Major ticks every 5 s above 20 s, every 2 s above 5 s, otherwise every
/// second; 5 minor steps per major above 5 s, otherwise 2. Timelines that
/// would need more than [`MAX_RULER_TICKS`] steps get tenfold wider spacing.
#[must_use]
pub fn ruler_ticks(duration: f32) -> Vec<RulerTick> {
    if duration <= 0.0 || !duration.is_finite() {
        return Vec::new();
    }

    let mut major_interval: f32 = if duration > 20.0 {
        5.0
    } else if duration > 5.0 {
        2.0
    } else {
        1.0
    };
    let minor_per_major: u32 = if duration > 5.0 { 5 } else { 2 };

    // Very long timelines: widen the spacing tenfold until the ticks fit.
    while duration * minor_per_major as f32 / major_interval > MAX_RULER_TICKS as f32 {
        major_interval *= 10.0;
    }
    let step = major_interval / minor_per_major as f32;

    // Count steps instead of accumulating floats so major detection is exact.
    let count = (duration / step + 1e-4).floor() as u32;
    (0..=count)
        .map(|i| RulerTick {
            time: i as f32 * step,
            major: i % minor_per_major == 0,
        })
        .collect()
}

/// Pointer-driven scrubbing over a [`TimelineRuler`].
#[derive(Debug, Clone)]
pub struct ScrubController {
    ruler: TimelineRuler,
    scrubbing: bool,
}

impl ScrubController {
    #[must_use]
    pub fn new(ruler: TimelineRuler) -> Self {
        Self {
            ruler,
            scrubbing: false,
        }
    }

    #[must_use]
    pub fn ruler(&self) -> TimelineRuler {
        self.ruler
    }

    /// Layout changes (window resize) only update the geometry.
    pub fn set_ruler(&mut self, ruler: TimelineRuler) {
        self.ruler = ruler;
    }

    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    /// Pointer down on the ruler: starts a scrub and seeks immediately.
    pub fn press(&mut self, pointer_x: f32, clock: &mut PlaybackClock) -> f32 {
        self.scrubbing = true;
        self.seek_to_pointer(pointer_x, clock)
    }

    /// Pointer move. Ignored unless a scrub is in progress.
    pub fn drag(&mut self, pointer_x: f32, clock: &mut PlaybackClock) -> Option<f32> {
        self.scrubbing
            .then(|| self.seek_to_pointer(pointer_x, clock))
    }

    pub fn release(&mut self) {
        self.scrubbing = false;
    }

    /// Click on a keyframe marker: move the playhead onto that keyframe.
    ///
    /// Unlike dragging on the ruler, this keeps the play state as it is.
    pub fn jump_to(&self, time: f32, clock: &mut PlaybackClock) -> f32 {
        clock.apply(PlaybackUpdate::default().time(time)).time
    }

    fn seek_to_pointer(&self, pointer_x: f32, clock: &mut PlaybackClock) -> f32 {
        let time = self.ruler.time_at(pointer_x, clock.duration());
        clock.seek(time);
        clock.time()
    }
}
