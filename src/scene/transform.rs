use glam::{Affine3A, Mat4, Quat, Vec3};

use crate::animation::AnimatableProperty;
use crate::animation::values::euler_to_quat;

/// Stored (un-animated) transform of an object. Rotation is Euler XYZ radians.
///
/// Gizmo edits write here; playback never does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for BaseTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl BaseTransform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, property: AnimatableProperty) -> Vec3 {
        match property {
            AnimatableProperty::Position => self.position,
            AnimatableProperty::Rotation => self.rotation,
            AnimatableProperty::Scale => self.scale,
        }
    }

    #[inline]
    pub fn set(&mut self, property: AnimatableProperty, value: Vec3) {
        match property {
            AnimatableProperty::Position => self.position = value,
            AnimatableProperty::Rotation => self.rotation = value,
            AnimatableProperty::Scale => self.scale = value,
        }
    }
}

/// The transform an object is rendered with for one frame.
///
/// Produced by per-frame resolution; the renderer applies it to whatever
/// retained scene representation it owns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl From<BaseTransform> for ResolvedTransform {
    fn from(base: BaseTransform) -> Self {
        Self {
            position: base.position,
            rotation: base.rotation,
            scale: base.scale,
        }
    }
}

impl ResolvedTransform {
    #[inline]
    #[must_use]
    pub fn get(&self, property: AnimatableProperty) -> Vec3 {
        match property {
            AnimatableProperty::Position => self.position,
            AnimatableProperty::Rotation => self.rotation,
            AnimatableProperty::Scale => self.scale,
        }
    }

    #[inline]
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        euler_to_quat(self.rotation)
    }

    /// Local matrix (Affine3A) in scale-rotation-translation order.
    #[must_use]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation_quat(), self.position)
    }

    /// Mat4 variant for GPU upload.
    #[inline]
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from(self.to_affine())
    }
}
