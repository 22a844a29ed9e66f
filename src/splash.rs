//! Loading splash shown between boot and the desktop scene.

mod entities;
mod systems;

use bevy::prelude::*;

use crate::AppPhase;

/// Per-plugin configuration for the splash screen.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct SplashConfig {
    /// Label text, without the animated dots.
    pub label: String,
    /// Seconds between trailing-dot steps.
    pub dot_period: f32,
    /// Number of trailing dots cycled through (0..=max).
    pub max_dots: usize,
    /// Label color.
    pub text_color: Color,
    /// Font size in logical pixels.
    pub font_size: f32,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            label: "LOADING".into(),
            dot_period: 0.35,
            max_dots: 3,
            text_color: Color::srgb(0.62, 0.72, 0.62),
            font_size: 28.0,
        }
    }
}

/// Splash plugin: mounts on entering [`AppPhase::Splash`], tears down on exit.
pub struct SplashPlugin(pub SplashConfig);

impl Plugin for SplashPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SplashConfig>()
            .insert_resource(self.0.clone())
            .add_systems(OnEnter(AppPhase::Splash), systems::spawn_splash_screen)
            .add_systems(OnExit(AppPhase::Splash), systems::despawn_splash_screen)
            .add_systems(
                Update,
                systems::animate_dots.run_if(in_state(AppPhase::Splash)),
            );
    }
}
