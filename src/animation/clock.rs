//! Playback Clock
//!
//! A single process-wide clock drives every animated object. It is a small
//! state machine:
//!
//! | State     | `playing` | `time`        |
//! |-----------|-----------|---------------|
//! | `Stopped` | `false`   | `0`           |
//! | `Paused`  | `false`   | `t` (static)  |
//! | `Playing` | `true`    | `t` advancing |
//!
//! The clock only moves through [`PlaybackClock::tick`], which the host calls
//! once per rendered frame. While not playing, `time` never changes on its own;
//! scrubbing goes through [`PlaybackClock::seek`], which always pauses.

/// Snapshot of the clock, suitable for UI readouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub playing: bool,
    pub time: f32,
    pub duration: f32,
    pub looping: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            playing: false,
            time: 0.0,
            duration: 5.0,
            looping: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Stopped,
    Paused,
    Playing,
}

/// Partial update of the clock; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackUpdate {
    pub playing: Option<bool>,
    pub time: Option<f32>,
    pub duration: Option<f32>,
    pub looping: Option<bool>,
}

impl PlaybackUpdate {
    #[must_use]
    pub fn playing(mut self, playing: bool) -> Self {
        self.playing = Some(playing);
        self
    }

    #[must_use]
    pub fn time(mut self, time: f32) -> Self {
        self.time = Some(time);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = Some(looping);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlaybackClock {
    state: PlaybackState,
}

impl PlaybackClock {
    #[must_use]
    pub fn new(duration: f32, looping: bool) -> Self {
        Self {
            state: PlaybackState {
                duration: duration.max(0.0),
                looping,
                ..PlaybackState::default()
            },
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.state.time
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.state.duration
    }

    #[inline]
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    #[inline]
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.state.looping
    }

    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        if self.state.playing {
            PlaybackPhase::Playing
        } else if self.state.time == 0.0 {
            PlaybackPhase::Stopped
        } else {
            PlaybackPhase::Paused
        }
    }

    pub fn play(&mut self) {
        self.state.playing = true;
    }

    pub fn pause(&mut self) {
        self.state.playing = false;
    }

    pub fn toggle(&mut self) {
        self.state.playing = !self.state.playing;
    }

    pub fn stop(&mut self) {
        self.state.playing = false;
        self.state.time = 0.0;
    }

    /// Advances the clock by `dt` seconds. Only meaningful while playing.
    ///
    /// Crossing `duration` wraps with `time % duration` when looping, and
    /// otherwise clamps to `duration` and pauses. A non-positive duration
    /// freezes playback.
    pub fn tick(&mut self, dt: f32) {
        if !self.state.playing {
            return;
        }

        let duration = self.state.duration;
        if duration <= 0.0 {
            return;
        }

        // 1. Accumulate time
        let mut time = self.state.time + dt.max(0.0);

        // 2. Normalize against the (possibly just edited) duration
        if time > duration {
            if self.state.looping {
                time %= duration;
            } else {
                time = duration;
                self.state.playing = false;
                log::debug!("Playback reached end of timeline ({duration}s), pausing");
            }
        }

        self.state.time = time;
    }

    /// Moves the playhead to `time` clamped into `[0, duration]` and pauses.
    pub fn seek(&mut self, time: f32) {
        self.state.playing = false;
        self.state.time = self.clamp_time(time);
    }

    /// Does not touch `time`; the next `tick` re-applies the wrap/clamp rule.
    pub fn set_duration(&mut self, duration: f32) {
        if duration < 0.0 {
            log::warn!("Negative playback duration {duration} clamped to 0");
        }
        self.state.duration = duration.max(0.0);
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.state.looping = looping;
    }

    /// Applies a partial update in a fixed order: duration and looping first,
    /// then the time (clamped against the new duration), then the play flag.
    pub fn apply(&mut self, update: PlaybackUpdate) -> PlaybackState {
        if let Some(duration) = update.duration {
            self.set_duration(duration);
        }
        if let Some(looping) = update.looping {
            self.set_looping(looping);
        }
        if let Some(time) = update.time {
            self.state.time = self.clamp_time(time);
        }
        if let Some(playing) = update.playing {
            self.state.playing = playing;
        }
        self.state
    }

    /// Clamps `time` into the current `[0, duration]` range.
    #[must_use]
    pub fn clamp_time(&self, time: f32) -> f32 {
        time.clamp(0.0, self.state.duration)
    }
}
