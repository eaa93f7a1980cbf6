#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::float_cmp)]

pub mod animation;
pub mod engine;
pub mod errors;
pub mod scene;
pub mod settings;
pub mod utils;

pub use animation::{
    AnimatableProperty, Keyframe, KeyframeClip, KeyframeEditor, PlaybackClock, PlaybackState,
    PlaybackUpdate, ScrubController, TimelineRuler, evaluate,
};
pub use engine::{EditorMode, Engine, TransformMode};
pub use errors::{EditorError, Result};
pub use scene::{
    AnimatableObject, BaseTransform, Color, ObjectId, ObjectKind, ObjectRegistry,
    ResolvedTransform,
};
pub use settings::EditorSettings;
pub use utils::Timer;
