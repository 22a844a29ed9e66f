//! The 3D retro computer: bezel, sloped case, curved CRT glass, and lights.
//!
//! All geometry is built procedurally; the screen carries [`CrtMaterial`],
//! a shader that fakes a running phosphor display complete with scanlines,
//! chroma bleed, and flicker.

mod crt_material;
mod entities;
mod systems;

pub use crt_material::CrtMaterial;

use bevy::pbr::MaterialPlugin;
use bevy::prelude::*;

/// Per-plugin configuration for the computer model and its lighting.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct WorkstationConfig {
    /// Outer bezel width/height.
    pub bezel_size: Vec2,
    /// Screen opening width/height.
    pub screen_size: Vec2,
    /// Bezel extrusion depth.
    pub bezel_depth: f32,
    /// Paraboloid curvature of the CRT glass bulge.
    pub screen_curvature: f32,
    /// Grid resolution of the curved screen mesh (quads per axis).
    pub screen_segments: u32,
    /// Plastic shell color.
    pub case_color: Color,
    /// Key spot light color.
    pub spot_color: Color,
    /// Key spot light intensity (lumens).
    pub spot_intensity: f32,
    /// Fill point light intensity (lumens).
    pub fill_intensity: f32,
    /// Background clear color.
    pub clear_color: Color,
}

impl Default for WorkstationConfig {
    fn default() -> Self {
        Self {
            bezel_size: Vec2::new(2.0, 1.5),
            screen_size: Vec2::new(1.6, 1.1),
            bezel_depth: 0.2,
            screen_curvature: 0.2,
            screen_segments: 64,
            case_color: Color::srgb_u8(0xd9, 0xd9, 0xd9),
            spot_color: Color::srgb(0.3, 0.4, 1.0),
            spot_intensity: 2_000_000.0,
            fill_intensity: 120_000.0,
            clear_color: Color::srgb(0.01, 0.01, 0.02),
        }
    }
}

/// Workstation plugin: spawns the computer at startup, animates the CRT.
pub struct WorkstationPlugin(pub WorkstationConfig);

impl Plugin for WorkstationPlugin {
    fn build(&self, app: &mut App) {
        crt_material::register_shader(app);
        app.register_type::<WorkstationConfig>()
            .register_type::<entities::Workstation>()
            .register_type::<entities::CrtScreen>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .add_plugins(MaterialPlugin::<CrtMaterial>::default())
            .add_systems(Startup, systems::spawn_workstation)
            .add_systems(Update, systems::animate_crt);
    }
}
