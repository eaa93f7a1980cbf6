use std::fmt;

use glam::Vec3;
use uuid::Uuid;

use crate::animation::interpolator::try_evaluate;
use crate::animation::{AnimatableProperty, AnimationClips};
use crate::errors::{EditorError, Result};
use crate::scene::transform::{BaseTransform, ResolvedTransform};

/// Primitive shape of an object. Mesh generation lives in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Cube,
    Sphere,
    Cone,
    Torus,
    Plane,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 5] = [
        Self::Cube,
        Self::Sphere,
        Self::Cone,
        Self::Torus,
        Self::Plane,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Sphere => "sphere",
            Self::Cone => "cone",
            Self::Torus => "torus",
            Self::Plane => "plane",
        }
    }
}

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs a `0xRRGGBB` integer; bits above 24 are ignored.
    #[must_use]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(EditorError::InvalidColor(hex.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| EditorError::InvalidColor(hex.to_string()))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Linear-ish float triple for material uniforms.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// An object in the editable scene: a base transform plus optional clips.
#[derive(Debug, Clone)]
pub struct AnimatableObject {
    pub uuid: Uuid,
    pub kind: ObjectKind,
    pub base: BaseTransform,
    pub color: Color,
    pub clips: AnimationClips,
}

impl AnimatableObject {
    #[must_use]
    pub fn new(kind: ObjectKind, base: BaseTransform, color: Color) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            kind,
            base,
            color,
            clips: AnimationClips::default(),
        }
    }

    /// Value of `property` at `time`: the clip sample when animated, the base
    /// value otherwise.
    #[must_use]
    pub fn resolved_value(&self, property: AnimatableProperty, time: f32) -> Vec3 {
        self.clips
            .get(property)
            .and_then(|clip| try_evaluate(clip, time, property))
            .unwrap_or_else(|| self.base.get(property))
    }

    /// Read-only projection of the object at `time`; never touches `base`.
    #[must_use]
    pub fn resolved_transform(&self, time: f32) -> ResolvedTransform {
        ResolvedTransform {
            position: self.resolved_value(AnimatableProperty::Position, time),
            rotation: self.resolved_value(AnimatableProperty::Rotation, time),
            scale: self.resolved_value(AnimatableProperty::Scale, time),
        }
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        !self.clips.is_empty()
    }
}
