use bevy::prelude::*;

use super::BootConfig;
use super::entities::{BootFinished, BootReadout, BootUi, Typewriter};

/// POST readout typed onto the screen one line at a time.
const BIOS_LINES: &[&str] = &[
    "PhosphorBIOS 4.01 Release 1.0",
    "Copyright 1989-2000 Phosphor Systems Ltd.",
    "",
    "BIOS version 29.3",
    "System ID = 1024580",
    "Build Time = 09/7/05 03:09:52",
    "",
    "CPU = 486DX2 66 MHz",
    "GPU = Integrated graphics",
    "RAM = SDRAM 1GB",
    "",
    "initializing...",
    ".",
    ".",
    ".",
    "",
    "-Completed-",
    "executing...",
];

/// Spawns the black full-screen readout and arms the typewriter.
pub fn spawn_boot_screen(mut commands: Commands, cfg: Res<BootConfig>) {
    commands.insert_resource(Typewriter {
        next_line: 0,
        delay: Timer::from_seconds(cfg.start_delay, TimerMode::Once),
        rng: fastrand::Rng::with_seed(cfg.jitter_seed),
    });

    commands
        .spawn((
            Name::new("BootScreen"),
            BootUi,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                padding: UiRect::all(Val::Px(24.0)),
                ..default()
            },
            BackgroundColor(Color::BLACK),
        ))
        .with_children(|parent| {
            parent.spawn((
                BootReadout,
                Text::new(""),
                TextFont {
                    font_size: cfg.font_size,
                    ..default()
                },
                TextColor(cfg.text_color),
            ));
        });
}

/// Appends the next BIOS line each time the jittered delay elapses.
///
/// After the final line a short hold runs, then [`BootFinished`] fires once
/// and the typewriter resource is dropped.
pub fn type_lines(
    time: Res<Time>,
    cfg: Res<BootConfig>,
    writer: Option<ResMut<Typewriter>>,
    mut readout: Query<&mut Text, With<BootReadout>>,
    mut finished: MessageWriter<BootFinished>,
    mut commands: Commands,
) {
    let Some(mut writer) = writer else { return };
    if !writer.delay.tick(time.delta()).just_finished() {
        return;
    }

    if writer.next_line == BIOS_LINES.len() {
        finished.write(BootFinished);
        commands.remove_resource::<Typewriter>();
        return;
    }

    let Ok(mut text) = readout.single_mut() else {
        return;
    };
    if writer.next_line > 0 {
        text.0.push('\n');
    }
    text.0.push_str(BIOS_LINES[writer.next_line]);
    writer.next_line += 1;

    let delay = if writer.next_line == BIOS_LINES.len() {
        cfg.end_hold
    } else {
        let span = cfg.line_delay_max - cfg.line_delay_min;
        cfg.line_delay_min + writer.rng.f32() * span
    };
    writer.delay = Timer::from_seconds(delay, TimerMode::Once);
}

/// Tears the boot screen down on phase exit.
pub fn despawn_boot_screen(mut commands: Commands, ui: Query<Entity, With<BootUi>>) {
    for entity in &ui {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<Typewriter>();
}
