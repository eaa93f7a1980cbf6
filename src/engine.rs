//! Engine Core Module
//!
//! This module contains [`Engine`], the single owner of all editor state. UI
//! and renderer layers talk to it through plain method calls:
//!
//! - **UI -> core**: object CRUD, base transform edits, keyframe writes,
//!   playback settings, selection, scrubbing
//! - **core -> renderer**: [`Engine::update`] once per frame, plus
//!   [`Engine::resolved_transform`] and [`Engine::clock_state`] queries
//!
//! # Example
//!
//! ```rust,ignore
//! use keyframe_studio::{Engine, EditorSettings, ObjectKind, AnimatableProperty};
//! use keyframe_studio::animation::PlaybackUpdate;
//!
//! let mut engine = Engine::new(EditorSettings::default());
//! let id = engine.add_object(ObjectKind::Sphere);
//!
//! engine.set_keyframe(id, AnimatableProperty::Position);
//! engine.set_playback(PlaybackUpdate::default().time(2.0));
//! engine.update_base_transform(id, AnimatableProperty::Position, glam::Vec3::X);
//! engine.set_keyframe(id, AnimatableProperty::Position);
//!
//! engine.play();
//! loop {
//!     let frame = engine.update(dt);
//!     // ... apply frame transforms to the render scene ...
//! }
//! ```

use glam::Vec3;

use crate::animation::{
    AnimatableProperty, AnimationSystem, FrameSnapshot, Keyframe, KeyframeEditor, KeyframeWrite,
    PlaybackClock, PlaybackState, PlaybackUpdate, ScrubController, TimelineRuler,
};
use crate::scene::{
    AnimatableObject, BaseTransform, Color, ObjectId, ObjectKind, ObjectRegistry,
    ResolvedTransform,
};
use crate::settings::EditorSettings;

/// Gizmo manipulation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

/// Top-level editor mode: one of the gizmo modes, or animation authoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Transform(TransformMode),
    Animate,
}

impl Default for EditorMode {
    fn default() -> Self {
        Self::Transform(TransformMode::Translate)
    }
}

/// The editor core.
///
/// # Lifecycle
///
/// 1. Create with [`Engine::new`] or [`Engine::default`]
/// 2. Feed UI actions through the mutator methods
/// 3. Call [`Engine::update`] once per rendered frame
pub struct Engine {
    settings: EditorSettings,

    registry: ObjectRegistry,
    clock: PlaybackClock,
    scrub: ScrubController,

    selection: Option<ObjectId>,
    mode: EditorMode,
    transform_mode: TransformMode,

    frame_count: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl Engine {
    #[must_use]
    pub fn new(settings: EditorSettings) -> Self {
        let registry = ObjectRegistry::new(&settings);
        let clock = PlaybackClock::new(settings.default_duration, settings.default_looping);

        log::info!(
            "Editor core ready: {} object(s), {}s timeline, loop={}",
            registry.len(),
            clock.duration(),
            clock.is_looping()
        );

        Self {
            settings,
            registry,
            clock,
            // Normalized ruler until the UI reports its real layout.
            scrub: ScrubController::new(TimelineRuler::new(0.0, 1.0)),
            selection: None,
            mode: EditorMode::default(),
            transform_mode: TransformMode::default(),
            frame_count: 0,
        }
    }

    // ========================================================================
    // Frame Loop
    // ========================================================================

    /// Advances the clock once and resolves every object against the new time.
    pub fn update(&mut self, dt: f32) -> FrameSnapshot {
        self.frame_count += 1;
        AnimationSystem::update(&mut self.clock, &self.registry, dt)
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Settings the engine was created with. Live playback values come from
    /// [`Engine::clock_state`].
    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    // ========================================================================
    // Renderer Queries
    // ========================================================================

    /// Transform to render `id` with at the current clock time.
    #[must_use]
    pub fn resolved_transform(&self, id: ObjectId) -> Option<ResolvedTransform> {
        self.registry
            .get(id)
            .map(|obj| obj.resolved_transform(self.clock.time()))
    }

    #[must_use]
    pub fn clock_state(&self) -> PlaybackState {
        self.clock.state()
    }

    #[must_use]
    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&AnimatableObject> {
        self.registry.get(id)
    }

    // ========================================================================
    // Objects
    // ========================================================================

    pub fn add_object(&mut self, kind: ObjectKind) -> ObjectId {
        self.registry.add_object(kind)
    }

    /// Deletes an object; clears the selection if it pointed at it.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<AnimatableObject> {
        if self.selection == Some(id) {
            self.selection = None;
        }
        self.registry.remove_object(id)
    }

    pub fn update_base_transform(
        &mut self,
        id: ObjectId,
        property: AnimatableProperty,
        value: Vec3,
    ) -> bool {
        self.registry.update_base_transform(id, property, value)
    }

    pub fn set_base_transform(&mut self, id: ObjectId, transform: BaseTransform) -> bool {
        self.registry.set_base_transform(id, transform)
    }

    pub fn set_color(&mut self, id: ObjectId, color: Color) -> bool {
        self.registry.set_color(id, color)
    }

    // ========================================================================
    // Selection & Modes
    // ========================================================================

    /// Selects `id`, or clears the selection with `None`. Unknown ids are ignored.
    pub fn select_object(&mut self, id: Option<ObjectId>) {
        match id {
            Some(id) if !self.registry.contains(id) => {
                log::debug!("select_object: {id:?} is not in the registry");
            }
            _ => self.selection = id,
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.selection
    }

    #[must_use]
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    #[must_use]
    pub fn transform_mode(&self) -> TransformMode {
        self.transform_mode
    }

    /// Switching to a gizmo mode also sets the gizmo's transform mode and halts
    /// playback; animation only runs in [`EditorMode::Animate`].
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
        if let EditorMode::Transform(transform_mode) = mode {
            self.transform_mode = transform_mode;
            self.clock.pause();
        }
    }

    pub fn set_transform_mode(&mut self, mode: TransformMode) {
        self.transform_mode = mode;
    }

    // ========================================================================
    // Keyframes
    // ========================================================================

    /// Records the object's current base value for `property` at the clock's
    /// current time.
    pub fn set_keyframe(&mut self, id: ObjectId, property: AnimatableProperty) -> Option<KeyframeWrite> {
        let editor = KeyframeEditor::for_playback(&self.clock.state());
        let time = self.clock.time();

        let Some(object) = self.registry.get_mut(id) else {
            log::debug!("set_keyframe: {id:?} is not in the registry");
            return None;
        };
        let value = object.base.get(property);
        Some(editor.set_keyframe(&mut object.clips, property, time, value))
    }

    pub fn remove_keyframe(
        &mut self,
        id: ObjectId,
        property: AnimatableProperty,
        time: f32,
    ) -> Option<Keyframe> {
        let editor = KeyframeEditor::for_playback(&self.clock.state());
        let object = self.registry.get_mut(id)?;
        editor.remove_keyframe(&mut object.clips, property, time)
    }

    /// Keyframe times of one track, for timeline markers. Empty when the
    /// property is not animated or the object is gone.
    #[must_use]
    pub fn keyframe_times(&self, id: ObjectId, property: AnimatableProperty) -> Vec<f32> {
        self.registry
            .get(id)
            .and_then(|obj| obj.clips.get(property))
            .map(|clip| clip.times().collect())
            .unwrap_or_default()
    }

    // ========================================================================
    // Playback
    // ========================================================================

    pub fn set_playback(&mut self, update: PlaybackUpdate) -> PlaybackState {
        self.clock.apply(update)
    }

    pub fn play(&mut self) {
        self.clock.play();
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn toggle_playback(&mut self) {
        self.clock.toggle();
    }

    pub fn stop(&mut self) {
        self.clock.stop();
    }

    // ========================================================================
    // Timeline Scrubbing
    // ========================================================================

    /// Reports the ruler's on-screen geometry.
    pub fn set_ruler(&mut self, ruler: TimelineRuler) {
        self.scrub.set_ruler(ruler);
    }

    pub fn scrub_press(&mut self, pointer_x: f32) -> f32 {
        self.scrub.press(pointer_x, &mut self.clock)
    }

    pub fn scrub_drag(&mut self, pointer_x: f32) -> Option<f32> {
        self.scrub.drag(pointer_x, &mut self.clock)
    }

    pub fn scrub_release(&mut self) {
        self.scrub.release();
    }

    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.scrub.is_scrubbing()
    }

    pub fn jump_to_keyframe(&mut self, time: f32) -> f32 {
        self.scrub.jump_to(time, &mut self.clock)
    }
}
