use slotmap::SecondaryMap;

use crate::animation::clock::PlaybackClock;
use crate::scene::transform::ResolvedTransform;
use crate::scene::{ObjectId, ObjectRegistry};

/// Resolved transforms of every object for one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameSnapshot {
    /// Clock time every transform in this snapshot was resolved against.
    pub time: f32,
    transforms: SecondaryMap<ObjectId, ResolvedTransform>,
}

impl FrameSnapshot {
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&ResolvedTransform> {
        self.transforms.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &ResolvedTransform)> {
        self.transforms.iter()
    }
}

/// Animation system.
///
/// Drives the per-frame update: advance the clock, then resolve every object.
pub struct AnimationSystem;

impl AnimationSystem {
    /// Advances `clock` by `dt` exactly once, then resolves every object
    /// exactly once against the resulting time, so no object observes a
    /// half-advanced clock.
    ///
    /// # Arguments
    /// * `clock` - The global playback clock
    /// * `registry` - Objects to resolve (read-only)
    /// * `dt` - Delta time per frame (in seconds)
    pub fn update(clock: &mut PlaybackClock, registry: &ObjectRegistry, dt: f32) -> FrameSnapshot {
        clock.tick(dt);
        Self::resolve(registry, clock.time())
    }

    /// Resolves every object at `time` without touching any clock.
    #[must_use]
    pub fn resolve(registry: &ObjectRegistry, time: f32) -> FrameSnapshot {
        let mut transforms = SecondaryMap::with_capacity(registry.len());
        for (id, object) in registry.iter() {
            transforms.insert(id, object.resolved_transform(time));
        }
        FrameSnapshot { time, transforms }
    }
}
