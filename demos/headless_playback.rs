//! Headless playback preview.
//!
//! Authors a short bounce on a cube and a half-turn on a torus, then plays
//! the timeline at a fixed 30 fps and prints the resolved transforms.
//!
//! ```text
//! RUST_LOG=debug cargo run --example headless_playback
//! ```

use glam::Vec3;
use keyframe_studio::animation::{PlaybackUpdate, ruler_ticks};
use keyframe_studio::{AnimatableProperty, EditorMode, EditorSettings, Engine, ObjectKind, Timer};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = EditorSettings::from_json_str(
        r#"{ "default_duration": 2.0, "default_looping": false, "seed": 42, "with_starter_cube": false }"#,
    )?;
    let mut engine = Engine::new(settings);
    engine.set_mode(EditorMode::Animate);

    let cube = engine.add_object(ObjectKind::Cube);
    let torus = engine.add_object(ObjectKind::Torus);

    // t = 0: rest pose
    engine.set_playback(PlaybackUpdate::default().time(0.0));
    engine.update_base_transform(cube, AnimatableProperty::Position, Vec3::new(0.0, 0.5, 0.0));
    engine.set_keyframe(cube, AnimatableProperty::Position);
    engine.set_keyframe(torus, AnimatableProperty::Rotation);

    // t = 1: cube at the top
    engine.set_playback(PlaybackUpdate::default().time(1.0));
    engine.update_base_transform(cube, AnimatableProperty::Position, Vec3::new(0.0, 2.5, 0.0));
    engine.set_keyframe(cube, AnimatableProperty::Position);

    // t = 2: back down, torus half-turned about Y
    engine.set_playback(PlaybackUpdate::default().time(2.0));
    engine.update_base_transform(cube, AnimatableProperty::Position, Vec3::new(0.0, 0.5, 0.0));
    engine.set_keyframe(cube, AnimatableProperty::Position);
    engine.update_base_transform(
        torus,
        AnimatableProperty::Rotation,
        Vec3::new(0.0, std::f32::consts::PI * 0.99, 0.0),
    );
    engine.set_keyframe(torus, AnimatableProperty::Rotation);

    let ticks = ruler_ticks(engine.clock_state().duration);
    println!(
        "timeline: {}s, {} ticks ({} major)",
        engine.clock_state().duration,
        ticks.len(),
        ticks.iter().filter(|t| t.major).count()
    );

    engine.stop();
    engine.play();
    let mut timer = Timer::new();

    let dt = 1.0 / 30.0;
    while engine.clock_state().playing {
        let frame = engine.update(dt);
        if engine.frame_count() % 10 != 0 {
            continue;
        }
        for (id, transform) in frame.iter() {
            println!(
                "t={:.2}s {:?} pos={:.2} rot={:.2}",
                frame.time, id, transform.position, transform.rotation
            );
        }
    }

    let state = engine.clock_state();
    timer.tick();
    println!(
        "finished at {:.2}s / {:.2}s after {} frames ({:?} wall time)",
        state.time,
        state.duration,
        engine.frame_count(),
        timer.elapsed
    );
    Ok(())
}
