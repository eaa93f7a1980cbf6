use glam::Vec3;

use crate::animation::keyframe::{AnimatableProperty, Keyframe, KeyframeClip};
use crate::animation::values::{Interpolatable, slerp_euler};

/// Samples `clip` at time `t`.
///
/// Position and scale are interpolated componentwise, rotation (Euler triples)
/// through quaternion SLERP. Times before the first or after the last keyframe
/// clamp to the respective end value; there is no extrapolation.
#[must_use]
pub fn evaluate(clip: &KeyframeClip, t: f32, property: AnimatableProperty) -> Vec3 {
    try_evaluate(clip, t, property).unwrap_or_default()
}

/// Like [`evaluate`], but `None` instead of a value for an empty clip so the
/// caller can fall back to the base transform.
#[inline]
pub(crate) fn try_evaluate(
    clip: &KeyframeClip,
    t: f32,
    property: AnimatableProperty,
) -> Option<Vec3> {
    sample_keyframes(clip.keyframes(), t, property)
}

/// `None` only for an empty slice, which a [`KeyframeClip`] never is.
pub(crate) fn sample_keyframes(
    keyframes: &[Keyframe],
    t: f32,
    property: AnimatableProperty,
) -> Option<Vec3> {
    debug_assert!(!keyframes.is_empty(), "sampled an empty keyframe clip");

    let first = keyframes.first()?;
    let last = keyframes.last()?;

    // 1. Left clamp (also covers the single-keyframe case)
    if keyframes.len() == 1 || t <= first.time {
        return Some(first.value);
    }

    // 2. Right clamp
    if t >= last.time {
        return Some(last.value);
    }

    // 3. partition_point finds the first index where time > t, i.e. next_index.
    // Both clamps above guarantee 0 < next_idx < len.
    let next_idx = keyframes.partition_point(|kf| kf.time <= t);
    let prev = &keyframes[next_idx - 1];
    let next = &keyframes[next_idx];

    let progress = (t - prev.time) / (next.time - prev.time);

    // Exactly on a key: hand back the authored value untouched. Rotation would
    // otherwise come back re-canonicalized by the Euler round trip.
    if progress <= 0.0 {
        return Some(prev.value);
    }

    Some(interpolate(prev.value, next.value, progress, property))
}

#[inline]
fn interpolate(start: Vec3, end: Vec3, progress: f32, property: AnimatableProperty) -> Vec3 {
    match property {
        AnimatableProperty::Rotation => slerp_euler(start, end, progress),
        AnimatableProperty::Position | AnimatableProperty::Scale => {
            Vec3::interpolate_linear(start, end, progress)
        }
    }
}
