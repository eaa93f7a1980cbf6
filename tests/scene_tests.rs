//! Scene Tests
//!
//! Tests for:
//! - ObjectRegistry: starter scene, spawning, CRUD, creation order
//! - Unknown ids on mutators are no-ops
//! - AnimatableObject: per-frame resolution never touches the base transform
//! - Color parsing and formatting
//! - ResolvedTransform matrices

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use keyframe_studio::animation::{AnimatableProperty, Keyframe, KeyframeClip};
use keyframe_studio::errors::EditorError;
use keyframe_studio::scene::{
    AnimatableObject, BaseTransform, Color, ObjectKind, ObjectRegistry, ResolvedTransform,
};
use keyframe_studio::settings::EditorSettings;

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn empty_registry(seed: u64) -> ObjectRegistry {
    ObjectRegistry::new(&EditorSettings {
        seed: Some(seed),
        with_starter_cube: false,
        ..Default::default()
    })
}

// ============================================================================
// Registry: Creation
// ============================================================================

#[test]
fn default_registry_holds_starter_cube() {
    let registry = ObjectRegistry::default();
    assert_eq!(registry.len(), 1);

    let (_, cube) = registry.iter().next().unwrap();
    assert_eq!(cube.kind, ObjectKind::Cube);
    assert_eq!(cube.base.position, Vec3::new(0.0, 0.5, 0.0));
    assert_eq!(cube.base.rotation, Vec3::ZERO);
    assert_eq!(cube.base.scale, Vec3::ONE);
    assert_eq!(cube.color.to_hex(), "#fca5a5");
    assert!(!cube.is_animated());
}

#[test]
fn add_object_spawns_inside_extent() {
    let mut registry = empty_registry(7);
    for kind in ObjectKind::ALL {
        let id = registry.add_object(kind);
        let object = registry.get(id).unwrap();
        assert_eq!(object.kind, kind);
        assert_eq!(object.base.position.y, 1.0);
        assert!(object.base.position.x.abs() <= 2.0);
        assert!(object.base.position.z.abs() <= 2.0);
        assert_eq!(object.base.rotation, Vec3::ZERO);
        assert_eq!(object.base.scale, Vec3::ONE);
    }
    assert_eq!(registry.len(), ObjectKind::ALL.len());
}

#[test]
fn seeded_registries_spawn_identically() {
    let mut a = empty_registry(1234);
    let mut b = empty_registry(1234);

    for _ in 0..4 {
        let ia = a.add_object(ObjectKind::Sphere);
        let ib = b.add_object(ObjectKind::Sphere);
        let (oa, ob) = (a.get(ia).unwrap(), b.get(ib).unwrap());
        assert_eq!(oa.base.position, ob.base.position);
        assert_eq!(oa.color, ob.color);
    }
}

#[test]
fn objects_get_distinct_uuids() {
    let mut registry = empty_registry(1);
    let a = registry.add_object(ObjectKind::Cube);
    let b = registry.add_object(ObjectKind::Cube);
    assert_ne!(registry.get(a).unwrap().uuid, registry.get(b).unwrap().uuid);
}

// ============================================================================
// Registry: Removal & Order
// ============================================================================

#[test]
fn iteration_follows_creation_order() {
    let mut registry = empty_registry(3);
    let a = registry.add_object(ObjectKind::Cube);
    let b = registry.add_object(ObjectKind::Torus);
    let c = registry.add_object(ObjectKind::Plane);

    registry.remove_object(b);
    let d = registry.add_object(ObjectKind::Cone);

    assert_eq!(registry.ids(), &[a, c, d]);
    let kinds: Vec<_> = registry.iter().map(|(_, obj)| obj.kind).collect();
    assert_eq!(kinds, vec![ObjectKind::Cube, ObjectKind::Plane, ObjectKind::Cone]);
}

#[test]
fn remove_object_returns_it_once() {
    let mut registry = empty_registry(3);
    let id = registry.add_object(ObjectKind::Sphere);

    assert!(registry.remove_object(id).is_some());
    assert!(registry.remove_object(id).is_none());
    assert!(!registry.contains(id));
    assert!(registry.is_empty());
}

#[test]
fn try_get_reports_missing_object() {
    let mut registry = empty_registry(3);
    let id = registry.add_object(ObjectKind::Sphere);
    assert!(registry.try_get(id).is_ok());

    registry.remove_object(id);
    assert!(matches!(registry.try_get(id), Err(EditorError::ObjectNotFound(missing)) if missing == id));
}

#[test]
fn mutators_on_unknown_id_are_noops() {
    let mut registry = empty_registry(3);
    let id = registry.add_object(ObjectKind::Sphere);
    registry.remove_object(id);

    assert!(!registry.update_base_transform(id, AnimatableProperty::Position, Vec3::ONE));
    assert!(!registry.set_base_transform(id, BaseTransform::IDENTITY));
    assert!(!registry.set_color(id, Color::rgb(1, 2, 3)));
    assert!(registry.is_empty());
}

#[test]
fn update_base_transform_writes_one_channel() {
    let mut registry = empty_registry(3);
    let id = registry.add_object(ObjectKind::Cube);
    let before = registry.get(id).unwrap().base;

    assert!(registry.update_base_transform(id, AnimatableProperty::Scale, Vec3::splat(2.0)));

    let after = registry.get(id).unwrap().base;
    assert_eq!(after.scale, Vec3::splat(2.0));
    assert_eq!(after.position, before.position);
    assert_eq!(after.rotation, before.rotation);
}

// ============================================================================
// AnimatableObject Resolution
// ============================================================================

#[test]
fn unanimated_object_resolves_to_base() {
    let base = BaseTransform {
        position: Vec3::new(1.0, 2.0, 3.0),
        rotation: Vec3::new(0.1, 0.2, 0.3),
        scale: Vec3::splat(0.5),
    };
    let object = AnimatableObject::new(ObjectKind::Torus, base, Color::rgb(0, 0, 0));
    assert_eq!(object.resolved_transform(1.0), ResolvedTransform::from(base));
}

#[test]
fn resolution_mixes_clips_and_base_values() {
    let mut object = AnimatableObject::new(
        ObjectKind::Cube,
        BaseTransform::from_position(Vec3::new(5.0, 5.0, 5.0)),
        Color::rgb(0, 0, 0),
    );
    object.clips.scale = Some(
        KeyframeClip::from_keyframes(vec![
            Keyframe::new(0.0, Vec3::ONE),
            Keyframe::new(2.0, Vec3::splat(3.0)),
        ])
        .unwrap(),
    );

    let resolved = object.resolved_transform(1.0);
    assert_eq!(resolved.position, Vec3::new(5.0, 5.0, 5.0));
    assert_eq!(resolved.rotation, Vec3::ZERO);
    assert!(vec3_approx(resolved.scale, Vec3::splat(2.0)));

    // Base transform untouched by resolution.
    assert_eq!(object.base.scale, Vec3::ONE);
}

#[test]
fn resolved_transform_matrix_applies_srt() {
    let resolved = ResolvedTransform {
        position: Vec3::new(1.0, 0.0, 0.0),
        rotation: Vec3::new(0.0, 0.0, FRAC_PI_2),
        scale: Vec3::splat(2.0),
    };

    let dot = resolved.rotation_quat().dot(Quat::from_rotation_z(FRAC_PI_2));
    assert!(dot.abs() > 1.0 - EPSILON, "|dot| = {dot}");

    // X axis scaled by 2, rotated onto Y, then translated.
    let p = resolved.to_affine().transform_point3(Vec3::X);
    assert!(vec3_approx(p, Vec3::new(1.0, 2.0, 0.0)), "got {p}");

    let m = resolved.to_mat4();
    assert!(vec3_approx(m.transform_point3(Vec3::X), p));
}

// ============================================================================
// Color
// ============================================================================

#[test]
fn color_hex_round_trip() {
    let color = Color::from_hex("#fca5a5").unwrap();
    assert_eq!(color, Color::rgb(0xfc, 0xa5, 0xa5));
    assert_eq!(color.to_hex(), "#fca5a5");
    assert_eq!(Color::from_hex("00FF7f").unwrap(), Color::rgb(0, 255, 127));
}

#[test]
fn color_rejects_malformed_hex() {
    for bad in ["", "#fff", "#12345g", "#1234567", "red"] {
        assert!(
            matches!(Color::from_hex(bad), Err(EditorError::InvalidColor(_))),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn color_to_vec3_normalizes() {
    let v = Color::rgb(255, 0, 51).to_vec3();
    assert!(vec3_approx(v, Vec3::new(1.0, 0.0, 0.2)));
}
