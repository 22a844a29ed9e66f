//! Desktop-phase UI: title and Play control overlaid on the 3D scene.
//!
//! Both elements fade in with smootherstep-eased, staggered delays tuned to
//! land just after the camera fly-in settles.

mod entities;
mod systems;

use bevy::prelude::*;

use crate::AppPhase;

/// Per-plugin configuration for the desktop menu UI.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct MenuConfig {
    /// Title shown top-left.
    pub title: String,
    /// Seconds after the desktop mounts before the title fades in.
    pub title_delay: f32,
    /// Seconds after the desktop mounts before the Play control fades in.
    pub play_delay: f32,
    /// Fade ramp length (seconds).
    pub fade_duration: f32,
    /// Title font size in logical pixels.
    pub title_font_size: f32,
    /// Play label font size in logical pixels.
    pub play_font_size: f32,
    /// Shared text color.
    pub text_color: Color,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: "PHOSPHOR GAMES".into(),
            title_delay: 3.2,
            play_delay: 3.4,
            fade_duration: 0.5,
            title_font_size: 48.0,
            play_font_size: 22.0,
            text_color: Color::srgb(0.85, 0.93, 0.85),
        }
    }
}

/// Menu plugin: mounts on entering [`AppPhase::Desktop`], tears down on exit.
pub struct MenuPlugin(pub MenuConfig);

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MenuConfig>()
            .register_type::<entities::FadeIn>()
            .insert_resource(self.0.clone())
            .add_systems(OnEnter(AppPhase::Desktop), systems::spawn_menu)
            .add_systems(OnExit(AppPhase::Desktop), systems::despawn_menu)
            .add_systems(
                Update,
                (systems::fade_in, systems::play_on_click, systems::play_on_enter)
                    .run_if(in_state(AppPhase::Desktop)),
            );
    }
}
