//! Phase sequencing: owns the rules for advancing [`AppPhase`](crate::AppPhase).
//!
//! Automatic advances are driven by a single pending `PhaseTimer`; the Play
//! trigger advances immediately and cancels any pending timer so a stale
//! delay can never fire a second advance. Advancing past the terminal phase
//! is a silent no-op.

mod entities;
mod systems;

pub use entities::PlayPressed;

use bevy::prelude::*;

use crate::AppPhase;

/// Per-plugin configuration for the phase sequencer.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct SequenceConfig {
    /// How long the splash screen holds before the desktop (seconds).
    pub splash_hold: f32,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self { splash_hold: 2.5 }
    }
}

/// Drives the boot → splash → desktop → playing progression.
pub struct SequencePlugin(pub SequenceConfig);

impl Plugin for SequencePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SequenceConfig>()
            .insert_resource(self.0.clone())
            .add_message::<PlayPressed>()
            .add_systems(OnEnter(AppPhase::Splash), systems::schedule_splash_hold)
            .add_systems(OnExit(AppPhase::Splash), systems::cancel_phase_timer)
            .add_systems(
                Update,
                (
                    systems::advance_on_boot_finished.run_if(in_state(AppPhase::Boot)),
                    systems::advance_on_timer,
                    systems::advance_on_play.run_if(in_state(AppPhase::Desktop)),
                ),
            );
    }
}
