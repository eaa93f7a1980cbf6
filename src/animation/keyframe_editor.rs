use glam::Vec3;

use crate::animation::clock::PlaybackState;
use crate::animation::keyframe::{AnimatableProperty, AnimationClips, Keyframe, KeyframeClip};

/// Outcome of [`KeyframeEditor::set_keyframe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyframeWrite {
    /// A new keyframe was added at this index.
    Inserted(usize),
    /// An existing keyframe at the same time was overwritten; holds the old value.
    Replaced(Vec3),
}

/// Insert/replace/remove operations on an object's clips.
///
/// The editor upholds the clip invariants: times stay strictly increasing,
/// at most one keyframe exists per time, and a property whose last keyframe
/// is removed goes back to having no clip at all.
#[derive(Debug, Clone, Copy)]
pub struct KeyframeEditor {
    duration: f32,
}

impl KeyframeEditor {
    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
        }
    }

    #[must_use]
    pub fn for_playback(state: &PlaybackState) -> Self {
        Self::new(state.duration)
    }

    /// Writes `value` at `time`, replacing a keyframe at exactly the same time.
    ///
    /// `time` is clamped into `[0, duration]` first.
    pub fn set_keyframe(
        &self,
        clips: &mut AnimationClips,
        property: AnimatableProperty,
        time: f32,
        value: Vec3,
    ) -> KeyframeWrite {
        let clamped = time.clamp(0.0, self.duration);
        if clamped != time {
            log::warn!(
                "Keyframe time {time} outside [0, {}], clamped to {clamped}",
                self.duration
            );
        }
        let keyframe = Keyframe::new(clamped, value);

        let slot = clips.slot_mut(property);
        let Some(clip) = slot.as_mut() else {
            *slot = Some(KeyframeClip::single(keyframe));
            return KeyframeWrite::Inserted(0);
        };

        if let Some(idx) = clip.index_of(clamped) {
            let old = std::mem::replace(&mut clip.keyframes[idx].value, value);
            return KeyframeWrite::Replaced(old);
        }

        // Sorted insert: ties are impossible after the exact-match check above.
        let idx = clip.keyframes.partition_point(|kf| kf.time < clamped);
        clip.keyframes.insert(idx, keyframe);
        KeyframeWrite::Inserted(idx)
    }

    /// Removes the keyframe at exactly `time`, returning it.
    ///
    /// Removing the only keyframe drops the clip so the property falls back to
    /// the object's base transform.
    pub fn remove_keyframe(
        &self,
        clips: &mut AnimationClips,
        property: AnimatableProperty,
        time: f32,
    ) -> Option<Keyframe> {
        let slot = clips.slot_mut(property);
        let clip = slot.as_mut()?;

        let idx = clip.index_of(time)?;
        let removed = clip.keyframes.remove(idx);

        if clip.keyframes.is_empty() {
            *slot = None;
        }

        Some(removed)
    }

    /// Drops every keyframe of `property`.
    pub fn clear_property(
        &self,
        clips: &mut AnimationClips,
        property: AnimatableProperty,
    ) -> Option<KeyframeClip> {
        clips.slot_mut(property).take()
    }
}
