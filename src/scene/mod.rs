//! Scene Module
//!
//! The editable scene as seen by the animation core:
//! - [`AnimatableObject`]: base transform, color and per-property clips
//! - [`ObjectRegistry`]: owns all objects, hands out [`ObjectId`]s
//! - [`BaseTransform`] / [`ResolvedTransform`]: stored vs. per-frame transform
//!
//! Geometry, materials and the retained render scene belong to the host.

pub mod object;
pub mod registry;
pub mod transform;

pub use object::{AnimatableObject, Color, ObjectKind};
pub use registry::ObjectRegistry;
pub use transform::{BaseTransform, ResolvedTransform};

use slotmap::new_key_type;

new_key_type! {
    pub struct ObjectId;
}
