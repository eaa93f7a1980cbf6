use glam::Vec3;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use slotmap::SlotMap;
use uuid::Uuid;

use crate::animation::AnimatableProperty;
use crate::errors::{EditorError, Result};
use crate::scene::ObjectId;
use crate::scene::object::{AnimatableObject, Color, ObjectKind};
use crate::scene::transform::BaseTransform;
use crate::settings::EditorSettings;

const STARTER_CUBE_COLOR: Color = Color::from_u32(0x00fc_a5a5);

/// Owns every object of the scene.
///
/// Iteration follows creation order (the outliner order), independent of how
/// the underlying slot map reuses slots.
pub struct ObjectRegistry {
    objects: SlotMap<ObjectId, AnimatableObject>,
    order: Vec<ObjectId>,

    rng: StdRng,
    spawn_extent: f32,
    spawn_height: f32,
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new(&EditorSettings::default())
    }
}

impl ObjectRegistry {
    #[must_use]
    pub fn new(settings: &EditorSettings) -> Self {
        let seed = settings
            .seed
            .unwrap_or_else(|| Uuid::new_v4().as_u64_pair().0);

        let mut registry = Self {
            objects: SlotMap::with_key(),
            order: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            spawn_extent: settings.spawn_extent,
            spawn_height: settings.spawn_height,
        };

        if settings.with_starter_cube {
            registry.insert(AnimatableObject::new(
                ObjectKind::Cube,
                BaseTransform::from_position(Vec3::new(0.0, 0.5, 0.0)),
                STARTER_CUBE_COLOR,
            ));
        }

        registry
    }

    /// Creates an object of `kind` at a random spot with a random color.
    pub fn add_object(&mut self, kind: ObjectKind) -> ObjectId {
        let extent = self.spawn_extent;
        let position = Vec3::new(
            (self.rng.random_range(0.0..1.0f32) - 0.5) * extent,
            self.spawn_height,
            (self.rng.random_range(0.0..1.0f32) - 0.5) * extent,
        );
        let color = Color::from_u32(self.rng.random_range(0..=0x00ff_ffffu32));

        let id = self.insert(AnimatableObject::new(
            kind,
            BaseTransform::from_position(position),
            color,
        ));
        log::debug!("Added {} {id:?} at {position}", kind.label());
        id
    }

    pub fn insert(&mut self, object: AnimatableObject) -> ObjectId {
        let id = self.objects.insert(object);
        self.order.push(id);
        id
    }

    pub fn remove_object(&mut self, id: ObjectId) -> Option<AnimatableObject> {
        let removed = self.objects.remove(id);
        if removed.is_some() {
            self.order.retain(|&other| other != id);
        } else {
            log::debug!("remove_object: {id:?} is not in the registry");
        }
        removed
    }

    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&AnimatableObject> {
        self.objects.get(id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut AnimatableObject> {
        self.objects.get_mut(id)
    }

    pub fn try_get(&self, id: ObjectId) -> Result<&AnimatableObject> {
        self.objects.get(id).ok_or(EditorError::ObjectNotFound(id))
    }

    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Ids in creation order.
    #[must_use]
    pub fn ids(&self) -> &[ObjectId] {
        &self.order
    }

    /// Objects in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &AnimatableObject)> {
        self.order
            .iter()
            .filter_map(move |&id| self.objects.get(id).map(|obj| (id, obj)))
    }

    /// Writes one channel of the base transform. Returns `false` for an
    /// unknown id.
    pub fn update_base_transform(
        &mut self,
        id: ObjectId,
        property: AnimatableProperty,
        value: Vec3,
    ) -> bool {
        self.with_object(id, "update_base_transform", |obj| {
            obj.base.set(property, value);
        })
    }

    /// Writes the whole base transform, as a gizmo release does.
    pub fn set_base_transform(&mut self, id: ObjectId, transform: BaseTransform) -> bool {
        self.with_object(id, "set_base_transform", |obj| obj.base = transform)
    }

    pub fn set_color(&mut self, id: ObjectId, color: Color) -> bool {
        self.with_object(id, "set_color", |obj| obj.color = color)
    }

    fn with_object(
        &mut self,
        id: ObjectId,
        op: &str,
        f: impl FnOnce(&mut AnimatableObject),
    ) -> bool {
        if let Some(obj) = self.objects.get_mut(id) {
            f(obj);
            true
        } else {
            log::debug!("{op}: {id:?} is not in the registry");
            false
        }
    }
}
