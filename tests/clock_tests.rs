//! Playback Clock Tests
//!
//! Tests for:
//! - play / pause / stop transitions and PlaybackPhase
//! - tick(): advance, loop wrap, end clamp + auto-pause, degenerate duration
//! - seek(): clamping, always pausing
//! - duration / loop edits and partial PlaybackUpdate

use keyframe_studio::animation::{PlaybackClock, PlaybackPhase, PlaybackUpdate};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Clock playing from `time` on a timeline of `duration`.
fn playing_at(duration: f32, looping: bool, time: f32) -> PlaybackClock {
    let mut clock = PlaybackClock::new(duration, looping);
    clock.seek(time);
    clock.play();
    clock
}

// ============================================================================
// State Transitions
// ============================================================================

#[test]
fn new_clock_is_stopped() {
    let clock = PlaybackClock::new(5.0, true);
    assert_eq!(clock.phase(), PlaybackPhase::Stopped);
    assert_eq!(clock.time(), 0.0);
    assert_eq!(clock.duration(), 5.0);
    assert!(clock.is_looping());
}

#[test]
fn default_state_matches_editor_defaults() {
    let state = PlaybackClock::default().state();
    assert!(!state.playing);
    assert_eq!(state.time, 0.0);
    assert_eq!(state.duration, 5.0);
    assert!(state.looping);
}

#[test]
fn play_keeps_time() {
    let mut clock = PlaybackClock::new(5.0, true);
    clock.seek(2.0);
    clock.play();
    assert_eq!(clock.phase(), PlaybackPhase::Playing);
    assert_eq!(clock.time(), 2.0);
}

#[test]
fn pause_freezes_time() {
    let mut clock = playing_at(5.0, true, 1.0);
    clock.tick(0.5);
    clock.pause();
    assert_eq!(clock.phase(), PlaybackPhase::Paused);

    clock.tick(1.0);
    clock.tick(1.0);
    assert!(approx(clock.time(), 1.5));
}

#[test]
fn stop_resets_from_any_state() {
    let mut clock = playing_at(5.0, true, 3.0);
    clock.stop();
    assert_eq!(clock.phase(), PlaybackPhase::Stopped);
    assert_eq!(clock.time(), 0.0);

    clock.seek(4.0);
    clock.stop();
    assert_eq!(clock.phase(), PlaybackPhase::Stopped);
    assert_eq!(clock.time(), 0.0);
}

#[test]
fn toggle_flips_playing() {
    let mut clock = PlaybackClock::new(5.0, true);
    clock.toggle();
    assert!(clock.is_playing());
    clock.toggle();
    assert!(!clock.is_playing());
}

// ============================================================================
// tick()
// ============================================================================

#[test]
fn tick_advances_while_playing() {
    let mut clock = playing_at(5.0, true, 0.0);
    clock.tick(0.25);
    clock.tick(0.25);
    assert!(approx(clock.time(), 0.5));
    assert!(clock.is_playing());
}

#[test]
fn tick_loop_wraps_past_end() {
    let mut clock = playing_at(5.0, true, 4.5);
    clock.tick(1.0);
    assert_eq!(clock.time(), 0.5);
    assert_eq!(clock.phase(), PlaybackPhase::Playing);
}

#[test]
fn tick_without_loop_clamps_and_pauses() {
    let mut clock = playing_at(5.0, false, 4.5);
    clock.tick(1.0);
    assert_eq!(clock.time(), 5.0);
    assert_eq!(clock.phase(), PlaybackPhase::Paused);
}

#[test]
fn tick_landing_exactly_on_end_does_not_wrap() {
    let mut clock = playing_at(5.0, true, 4.5);
    clock.tick(0.5);
    assert_eq!(clock.time(), 5.0);
    assert!(clock.is_playing());
}

#[test]
fn tick_is_noop_when_not_playing() {
    let mut clock = PlaybackClock::new(5.0, true);
    clock.seek(1.0);
    clock.tick(2.0);
    assert_eq!(clock.time(), 1.0);
    assert_eq!(clock.phase(), PlaybackPhase::Paused);
}

#[test]
fn tick_freezes_on_zero_duration() {
    let mut clock = PlaybackClock::new(0.0, true);
    clock.play();
    clock.tick(1.0);
    assert_eq!(clock.time(), 0.0);
    assert!(clock.is_playing());
}

#[test]
fn tick_ignores_negative_delta() {
    let mut clock = playing_at(5.0, true, 2.0);
    clock.tick(-1.0);
    assert_eq!(clock.time(), 2.0);
}

#[test]
fn tick_loop_handles_multiple_wraps() {
    let mut clock = playing_at(2.0, true, 1.5);
    clock.tick(5.0);
    assert!(approx(clock.time(), 0.5), "got {}", clock.time());
}

// ============================================================================
// seek()
// ============================================================================

#[test]
fn seek_always_pauses() {
    let mut clock = playing_at(5.0, true, 1.0);
    clock.seek(3.0);
    assert!(!clock.is_playing());
    assert_eq!(clock.time(), 3.0);

    clock.seek(2.0);
    assert!(!clock.is_playing());
}

#[test]
fn seek_clamps_out_of_range_input() {
    let mut clock = playing_at(5.0, true, 1.0);
    clock.seek(-3.0);
    assert_eq!(clock.time(), 0.0);
    assert!(!clock.is_playing());

    clock.play();
    clock.seek(99.0);
    assert_eq!(clock.time(), 5.0);
    assert!(!clock.is_playing());
}

// ============================================================================
// Settings Edits
// ============================================================================

#[test]
fn duration_edit_keeps_time_until_next_tick() {
    let mut clock = PlaybackClock::new(5.0, true);
    clock.seek(4.0);
    clock.set_duration(2.0);
    assert_eq!(clock.time(), 4.0);

    clock.play();
    clock.tick(0.5);
    assert_eq!(clock.time(), 0.5);
}

#[test]
fn duration_shrink_without_loop_clamps_on_next_tick() {
    let mut clock = PlaybackClock::new(5.0, false);
    clock.seek(4.0);
    clock.set_duration(2.0);
    clock.play();
    clock.tick(0.1);
    assert_eq!(clock.time(), 2.0);
    assert_eq!(clock.phase(), PlaybackPhase::Paused);
}

#[test]
fn negative_duration_is_clamped_to_zero() {
    let mut clock = PlaybackClock::new(5.0, true);
    clock.set_duration(-1.0);
    assert_eq!(clock.duration(), 0.0);
}

#[test]
fn loop_toggle_takes_effect_on_next_tick() {
    let mut clock = playing_at(5.0, true, 4.5);
    clock.set_looping(false);
    clock.tick(1.0);
    assert_eq!(clock.time(), 5.0);
    assert!(!clock.is_playing());
}

#[test]
fn apply_partial_update_touches_only_given_fields() {
    let mut clock = PlaybackClock::new(5.0, true);
    let state = clock.apply(PlaybackUpdate::default().duration(8.0));
    assert_eq!(state.duration, 8.0);
    assert!(state.looping);
    assert_eq!(state.time, 0.0);
    assert!(!state.playing);

    let state = clock.apply(PlaybackUpdate::default().time(6.5).playing(true));
    assert_eq!(state.time, 6.5);
    assert!(state.playing);
    assert_eq!(state.duration, 8.0);
}

#[test]
fn apply_clamps_time_against_new_duration() {
    let mut clock = PlaybackClock::new(5.0, true);
    let state = clock.apply(PlaybackUpdate::default().duration(2.0).time(4.0));
    assert_eq!(state.time, 2.0);

    let state = clock.apply(PlaybackUpdate::default().time(-1.0));
    assert_eq!(state.time, 0.0);
}
