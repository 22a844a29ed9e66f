//! Per-frame camera animation driven by the current phase.
//!
//! Each phase selects at most one [`CameraSegment`]; the segment's start
//! time is captured lazily on the first tick after the phase is entered and
//! the pose is recomputed every frame from pure interpolation math in
//! [`crate::math`]. Orientation always faces a fixed world-space target.

mod entities;
mod systems;

use bevy::prelude::*;

use crate::AppPhase;
use crate::math::CameraSegment;

/// Per-plugin configuration for the camera animator.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct FlybyConfig {
    /// World-space point the camera always faces.
    pub look_target: Vec3,
    /// Camera position when the desktop scene is revealed.
    pub desktop_start: Vec3,
    /// Camera position at the end of the desktop fly-in.
    pub desktop_end: Vec3,
    /// Vertical fov at the fly-in start (degrees).
    pub desktop_start_fov: f32,
    /// Vertical fov at the fly-in end (degrees).
    pub desktop_end_fov: f32,
    /// Desktop fly-in length (seconds).
    pub desktop_duration: f32,
    /// Camera position at the end of the Play zoom, just short of the glass.
    pub playing_end: Vec3,
    /// Vertical fov at the end of the Play zoom (degrees).
    pub playing_end_fov: f32,
    /// Play zoom length (seconds).
    pub playing_duration: f32,
    /// Bloom post-processing intensity.
    pub bloom_intensity: f32,
}

impl Default for FlybyConfig {
    fn default() -> Self {
        Self {
            look_target: Vec3::ZERO,
            desktop_start: Vec3::new(0.0, 4.0, -14.0),
            desktop_end: Vec3::new(0.0, 0.4, -8.0),
            desktop_start_fov: 55.0,
            desktop_end_fov: 45.0,
            desktop_duration: 3.0,
            playing_end: Vec3::new(0.0, 0.15, -2.8),
            playing_end_fov: 30.0,
            playing_duration: 2.0,
            bloom_intensity: 0.3,
        }
    }
}

impl FlybyConfig {
    /// The segment governing `phase`, or `None` for phases without camera
    /// motion (the camera then holds its last pose).
    pub fn segment_for(&self, phase: AppPhase) -> Option<CameraSegment> {
        match phase {
            AppPhase::Boot | AppPhase::Splash => None,
            AppPhase::Desktop => Some(CameraSegment {
                start: self.desktop_start,
                end: self.desktop_end,
                start_fov: Some(self.desktop_start_fov.to_radians()),
                end_fov: Some(self.desktop_end_fov.to_radians()),
                duration: self.desktop_duration,
            }),
            AppPhase::Playing => Some(CameraSegment {
                start: self.desktop_end,
                end: self.playing_end,
                start_fov: Some(self.desktop_end_fov.to_radians()),
                end_fov: Some(self.playing_end_fov.to_radians()),
                duration: self.playing_duration,
            }),
        }
    }
}

/// Camera animator: spawns the HDR camera and retargets it per phase.
pub struct FlybyPlugin(pub FlybyConfig);

impl Plugin for FlybyPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<FlybyConfig>()
            .register_type::<entities::MenuCamera>()
            .insert_resource(self.0.clone())
            .init_resource::<entities::SegmentClock>()
            .add_systems(Startup, systems::spawn_camera)
            .add_systems(Update, systems::animate_camera);
    }
}
