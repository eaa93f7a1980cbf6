use glam::{EulerRot, Quat, Vec3};

/// Axis order used for every Euler <-> quaternion conversion in the editor.
pub const EULER_ORDER: EulerRot = EulerRot::XYZ;

/// Values that can be blended between two adjacent keyframes.
pub trait Interpolatable: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    /// Spherical: constant angular velocity along the shortest arc.
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }
}

#[inline]
#[must_use]
pub fn euler_to_quat(euler: Vec3) -> Quat {
    Quat::from_euler(EULER_ORDER, euler.x, euler.y, euler.z)
}

#[inline]
#[must_use]
pub fn quat_to_euler(rotation: Quat) -> Vec3 {
    let (x, y, z) = rotation.to_euler(EULER_ORDER);
    Vec3::new(x, y, z)
}

/// SLERP between two Euler triples, returned as an Euler triple.
#[must_use]
pub fn slerp_euler(start: Vec3, end: Vec3, t: f32) -> Vec3 {
    let q = Quat::interpolate_linear(euler_to_quat(start), euler_to_quat(end), t);
    quat_to_euler(q)
}
