use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::post_process::bloom::{Bloom, BloomCompositeMode};
use bevy::prelude::*;
use bevy::render::view::Hdr;

use super::FlybyConfig;
use super::entities::{MenuCamera, SegmentClock};
use crate::AppPhase;
use crate::math;

/// Spawns the Camera3d entity with HDR, tonemapping, and bloom.
pub fn spawn_camera(mut commands: Commands, cfg: Res<FlybyConfig>) {
    commands.spawn((
        Name::new("MenuCamera"),
        MenuCamera,
        Camera3d::default(),
        Hdr,
        Tonemapping::TonyMcMapface,
        Bloom {
            intensity: cfg.bloom_intensity,
            composite_mode: BloomCompositeMode::Additive,
            ..Bloom::NATURAL
        },
        Projection::from(PerspectiveProjection {
            fov: cfg.desktop_start_fov.to_radians(),
            ..default()
        }),
        Transform::from_translation(cfg.desktop_start).looking_at(cfg.look_target, Vec3::Y),
    ));
}

/// Computes this frame's camera pose from the current phase and elapsed time.
///
/// Position and fov come from [`math::sample_segment`]; orientation is then
/// recomputed to face the configured target, a pure function of the new
/// position. Once a segment completes the pose stays pinned at its endpoint.
pub fn animate_camera(
    time: Res<Time>,
    cfg: Res<FlybyConfig>,
    state: Res<State<AppPhase>>,
    mut clock: ResMut<SegmentClock>,
    mut camera: Query<(&mut Transform, &mut Projection), With<MenuCamera>>,
) {
    let phase = *state.get();
    if clock.phase != phase {
        // Phase changed since the last tick; the next segment starts fresh.
        clock.phase = phase;
        clock.started_at = None;
    }

    let Some(segment) = cfg.segment_for(phase) else {
        return;
    };
    let Ok((mut transform, mut projection)) = camera.single_mut() else {
        return;
    };

    let now = time.elapsed_secs();
    let started = *clock.started_at.get_or_insert(now);
    let pose = math::sample_segment(&segment, now - started);

    transform.translation = pose.position;
    if let Some(fov) = pose.fov
        && let Projection::Perspective(perspective) = &mut *projection
    {
        perspective.fov = fov;
    }
    transform.look_at(cfg.look_target, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn flyby_world(phase: AppPhase) -> World {
        let mut world = World::new();
        world.insert_resource(FlybyConfig::default());
        world.insert_resource(State::new(phase));
        world.insert_resource(Time::<()>::default());
        world.init_resource::<SegmentClock>();
        world.spawn((
            MenuCamera,
            Transform::default(),
            Projection::from(PerspectiveProjection::default()),
        ));
        world
    }

    fn advance_clock(world: &mut World, secs: f32) {
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
    }

    fn camera_pose(world: &mut World) -> (Vec3, f32) {
        let mut query = world.query_filtered::<(&Transform, &Projection), With<MenuCamera>>();
        let (transform, projection) = query.single(world).unwrap();
        let Projection::Perspective(perspective) = projection else {
            panic!("camera must stay perspective");
        };
        (transform.translation, perspective.fov)
    }

    #[test]
    fn first_tick_starts_segment_at_its_start_pose() {
        let mut world = flyby_world(AppPhase::Desktop);
        advance_clock(&mut world, 12.0);

        world.run_system_once(animate_camera).unwrap();

        let cfg = FlybyConfig::default();
        let (position, fov) = camera_pose(&mut world);
        assert_eq!(position, cfg.desktop_start);
        assert!((fov - cfg.desktop_start_fov.to_radians()).abs() < 1e-6);

        let clock = world.resource::<SegmentClock>();
        assert_eq!(clock.phase, AppPhase::Desktop);
        assert_eq!(clock.started_at, Some(12.0));
    }

    #[test]
    fn completed_segment_pins_the_end_pose() {
        let mut world = flyby_world(AppPhase::Desktop);
        let cfg = FlybyConfig::default();

        world.run_system_once(animate_camera).unwrap();
        advance_clock(&mut world, cfg.desktop_duration + 5.0);
        world.run_system_once(animate_camera).unwrap();

        let (position, fov) = camera_pose(&mut world);
        assert_eq!(position, cfg.desktop_end);
        assert!((fov - cfg.desktop_end_fov.to_radians()).abs() < 1e-6);

        // Further ticks with even more elapsed time change nothing.
        advance_clock(&mut world, 100.0);
        world.run_system_once(animate_camera).unwrap();
        assert_eq!(camera_pose(&mut world).0, cfg.desktop_end);
    }

    #[test]
    fn phase_change_restarts_the_segment_clock() {
        let mut world = flyby_world(AppPhase::Desktop);
        advance_clock(&mut world, 30.0);
        world.run_system_once(animate_camera).unwrap();

        // Jump to Playing; the stale desktop clock must not leak in.
        world.insert_resource(State::new(AppPhase::Playing));
        advance_clock(&mut world, 2.0);
        world.run_system_once(animate_camera).unwrap();

        let cfg = FlybyConfig::default();
        let clock = world.resource::<SegmentClock>();
        assert_eq!(clock.phase, AppPhase::Playing);
        assert_eq!(clock.started_at, Some(32.0));
        // First Playing tick is at elapsed zero: the zoom's start pose.
        assert_eq!(camera_pose(&mut world).0, cfg.desktop_end);
    }

    #[test]
    fn phases_without_a_segment_leave_the_camera_alone() {
        let mut world = flyby_world(AppPhase::Boot);
        advance_clock(&mut world, 4.0);
        world.run_system_once(animate_camera).unwrap();

        assert_eq!(camera_pose(&mut world).0, Vec3::ZERO);
        assert!(world.resource::<SegmentClock>().started_at.is_none());
    }
}
