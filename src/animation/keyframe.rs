use glam::Vec3;

use crate::errors::{EditorError, Result};

/// The three transform channels an object can be animated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatableProperty {
    Position,
    /// Euler angles in radians, XYZ order.
    Rotation,
    Scale,
}

impl AnimatableProperty {
    pub const ALL: [AnimatableProperty; 3] = [Self::Position, Self::Rotation, Self::Scale];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Rotation => "rotation",
            Self::Scale => "scale",
        }
    }
}

/// A single authored `(time, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub value: Vec3,
}

impl Keyframe {
    #[must_use]
    pub fn new(time: f32, value: Vec3) -> Self {
        Self { time, value }
    }
}

/// Ordered keyframes of one property of one object.
///
/// A clip always holds at least one keyframe and its times are strictly
/// increasing. "Not animated" is expressed by the absence of a clip, never by
/// an empty one, so the only ways to build a clip from outside the crate are
/// [`KeyframeClip::single`] and the validating [`KeyframeClip::from_keyframes`].
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeClip {
    // Only transiently empty inside `KeyframeEditor::remove_keyframe`.
    pub(crate) keyframes: Vec<Keyframe>,
}

impl KeyframeClip {
    #[must_use]
    pub fn single(keyframe: Keyframe) -> Self {
        Self {
            keyframes: vec![keyframe],
        }
    }

    /// Builds a clip from pre-authored keyframes.
    ///
    /// The input must be non-empty, sorted by strictly increasing time, and
    /// every time must be finite and non-negative.
    pub fn from_keyframes(keyframes: Vec<Keyframe>) -> Result<Self> {
        if keyframes.is_empty() {
            return Err(EditorError::InvalidClip(
                "a clip needs at least one keyframe".to_string(),
            ));
        }

        if let Some(bad) = keyframes
            .iter()
            .find(|kf| !kf.time.is_finite() || kf.time < 0.0)
        {
            return Err(EditorError::InvalidClip(format!(
                "keyframe time {} is not a finite non-negative number",
                bad.time
            )));
        }

        if let Some(pair) = keyframes.windows(2).find(|w| w[0].time >= w[1].time) {
            return Err(EditorError::InvalidClip(format!(
                "keyframe times must strictly increase ({} is followed by {})",
                pair[0].time, pair[1].time
            )));
        }

        Ok(Self { keyframes })
    }

    #[inline]
    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Always `false` for a clip observed through the public API.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> &Keyframe {
        &self.keyframes[0]
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> &Keyframe {
        &self.keyframes[self.keyframes.len() - 1]
    }

    /// Keyframe authored at exactly `time`, if any.
    #[must_use]
    pub fn get(&self, time: f32) -> Option<&Keyframe> {
        self.index_of(time).map(|i| &self.keyframes[i])
    }

    pub fn times(&self) -> impl Iterator<Item = f32> + '_ {
        self.keyframes.iter().map(|kf| kf.time)
    }

    /// Exact (bitwise-equal value) time lookup. No tolerance window.
    pub(crate) fn index_of(&self, time: f32) -> Option<usize> {
        let idx = self.keyframes.partition_point(|kf| kf.time < time);
        (idx < self.keyframes.len() && self.keyframes[idx].time == time).then_some(idx)
    }
}

/// Per-property clip slots of one object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationClips {
    pub position: Option<KeyframeClip>,
    pub rotation: Option<KeyframeClip>,
    pub scale: Option<KeyframeClip>,
}

impl AnimationClips {
    #[must_use]
    pub fn get(&self, property: AnimatableProperty) -> Option<&KeyframeClip> {
        match property {
            AnimatableProperty::Position => self.position.as_ref(),
            AnimatableProperty::Rotation => self.rotation.as_ref(),
            AnimatableProperty::Scale => self.scale.as_ref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, property: AnimatableProperty) -> &mut Option<KeyframeClip> {
        match property {
            AnimatableProperty::Position => &mut self.position,
            AnimatableProperty::Rotation => &mut self.rotation,
            AnimatableProperty::Scale => &mut self.scale,
        }
    }

    #[must_use]
    pub fn is_animated(&self, property: AnimatableProperty) -> bool {
        self.get(property).is_some()
    }

    /// `true` when no property carries a clip.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        AnimatableProperty::ALL
            .iter()
            .all(|&property| !self.is_animated(property))
    }
}
