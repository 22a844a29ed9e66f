#![warn(missing_docs)]
//! Retro CRT main-menu front end.
//!
//! Boots through a BIOS-style text screen and a short splash, then lands on
//! an animated 3D desktop scene: a retro computer with a shader-driven CRT
//! screen, a slow camera fly-in, and a fading title + Play control. Pressing
//! Play zooms the camera into the screen.

mod boot;
mod flyby;
pub mod math;
mod menu;
mod sequence;
mod splash;
mod workstation;

use bevy::app::AppExit;
use bevy::prelude::*;
#[cfg(feature = "native")]
use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
use bevy_inspector_egui::quick::WorldInspectorPlugin;

/// Application-wide front-end phase, used for system scheduling.
///
/// Transitions are monotonic and one-directional: no phase is revisited once
/// left. [`AppPhase::next`] is the single source of truth for the ordering.
#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum AppPhase {
    /// BIOS text screen typing out line by line.
    #[default]
    Boot,
    /// Brief loading screen between boot and the desktop scene.
    Splash,
    /// Animated 3D main menu with the Play control.
    Desktop,
    /// Play was triggered; camera zooms into the CRT. Terminal.
    Playing,
}

impl AppPhase {
    /// The phase that follows this one, or `None` from the terminal phase.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Boot => Some(Self::Splash),
            Self::Splash => Some(Self::Desktop),
            Self::Desktop => Some(Self::Playing),
            Self::Playing => None,
        }
    }
}

/// Whether the world-inspector overlay is visible (Tab to toggle).
#[derive(Resource, Default, Reflect)]
pub struct DebugOverlay(pub bool);

/// Command-line options (native builds only).
#[cfg(feature = "native")]
#[derive(clap::Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Start directly on the desktop scene, skipping boot and splash.
    #[arg(long)]
    skip_intro: bool,
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "CRT Menu".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<AppPhase>()
    .register_type::<DebugOverlay>()
    .init_state::<AppPhase>()
    .init_resource::<DebugOverlay>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(sequence::SequencePlugin(sequence::SequenceConfig::default()))
    .add_plugins(boot::BootPlugin(boot::BootConfig::default()))
    .add_plugins(splash::SplashPlugin(splash::SplashConfig::default()))
    .add_plugins(workstation::WorkstationPlugin(
        workstation::WorkstationConfig::default(),
    ))
    .add_plugins(flyby::FlybyPlugin(flyby::FlybyConfig::default()))
    .add_plugins(menu::MenuPlugin(menu::MenuConfig::default()))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(|overlay: Res<DebugOverlay>| overlay.0));

    #[cfg(feature = "native")]
    {
        app.add_plugins(RemotePlugin::default())
            .add_plugins(RemoteHttpPlugin::default());

        let args = <Args as clap::Parser>::parse();
        if args.skip_intro {
            app.insert_state(AppPhase::Desktop);
        }
    }

    app.run();
}

fn toggle_inspector(keys: Res<ButtonInput<KeyCode>>, mut overlay: ResMut<DebugOverlay>) {
    if keys.just_pressed(KeyCode::Tab) {
        overlay.0 = !overlay.0;
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
