//! Animation Module
//!
//! Keyframe animation of object transforms:
//! - [`KeyframeClip`]: ordered keyframes of one property of one object
//! - [`evaluate`]: linear (position/scale) and SLERP (rotation) sampling
//! - [`KeyframeEditor`]: insert/replace/remove keeping clips well-formed
//! - [`PlaybackClock`]: global play/pause/stop/loop state machine
//! - [`ScrubController`]: pointer scrubbing over a [`TimelineRuler`]
//! - [`AnimationSystem`]: per-frame clock advance + transform resolution

pub mod clock;
pub mod interpolator;
pub mod keyframe;
pub mod keyframe_editor;
pub mod scrub;
pub mod system;
pub mod values;

pub use clock::{PlaybackClock, PlaybackPhase, PlaybackState, PlaybackUpdate};
pub use interpolator::evaluate;
pub use keyframe::{AnimatableProperty, AnimationClips, Keyframe, KeyframeClip};
pub use keyframe_editor::{KeyframeEditor, KeyframeWrite};
pub use scrub::{
    MAX_RULER_TICKS, RulerTick, ScrubController, TimelineRuler, ruler_ticks, time_fraction,
};
pub use system::{AnimationSystem, FrameSnapshot};
pub use values::Interpolatable;
