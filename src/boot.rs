//! BIOS-style boot screen typed out line by line.
//!
//! A full-screen black panel with dim gray text. Lines land with jittered
//! delays from a seeded RNG; after the last line a short hold elapses and
//! [`BootFinished`] hands control to the sequencer.

mod entities;
mod systems;

pub use entities::BootFinished;

use bevy::prelude::*;

use crate::AppPhase;

/// Per-plugin configuration for the boot screen typewriter.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct BootConfig {
    /// Delay before the first line appears (seconds).
    pub start_delay: f32,
    /// Minimum jittered delay between lines (seconds).
    pub line_delay_min: f32,
    /// Maximum jittered delay between lines (seconds).
    pub line_delay_max: f32,
    /// Hold after the last line before handing off (seconds).
    pub end_hold: f32,
    /// Seed for the per-line delay jitter.
    pub jitter_seed: u64,
    /// Text color (dim phosphor gray).
    pub text_color: Color,
    /// Font size in logical pixels.
    pub font_size: f32,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            start_delay: 1.0,
            line_delay_min: 0.05,
            line_delay_max: 0.5,
            end_hold: 0.6,
            jitter_seed: 0x1989,
            text_color: Color::srgb_u8(0xa9, 0xa9, 0xa9),
            font_size: 18.0,
        }
    }
}

/// Boot screen plugin: mounts on entering [`AppPhase::Boot`], tears down on exit.
pub struct BootPlugin(pub BootConfig);

impl Plugin for BootPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<BootConfig>()
            .insert_resource(self.0.clone())
            .add_message::<BootFinished>()
            .add_systems(OnEnter(AppPhase::Boot), systems::spawn_boot_screen)
            .add_systems(OnExit(AppPhase::Boot), systems::despawn_boot_screen)
            .add_systems(
                Update,
                systems::type_lines.run_if(in_state(AppPhase::Boot)),
            );
    }
}
