use bevy::prelude::*;

use super::SplashConfig;
use super::entities::{DotTicker, SplashLabel, SplashUi};

/// Spawns the centered loading label over a black backdrop.
pub fn spawn_splash_screen(mut commands: Commands, cfg: Res<SplashConfig>) {
    commands.insert_resource(DotTicker {
        timer: Timer::from_seconds(cfg.dot_period, TimerMode::Repeating),
        dots: 0,
    });

    commands
        .spawn((
            Name::new("SplashScreen"),
            SplashUi,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::BLACK),
        ))
        .with_children(|parent| {
            parent.spawn((
                SplashLabel,
                Text::new(cfg.label.clone()),
                TextFont {
                    font_size: cfg.font_size,
                    ..default()
                },
                TextColor(cfg.text_color),
            ));
        });
}

/// Steps the trailing dots each time the ticker wraps.
pub fn animate_dots(
    time: Res<Time>,
    cfg: Res<SplashConfig>,
    ticker: Option<ResMut<DotTicker>>,
    mut label: Query<&mut Text, With<SplashLabel>>,
) {
    let Some(mut ticker) = ticker else { return };
    if !ticker.timer.tick(time.delta()).just_finished() {
        return;
    }
    ticker.dots = (ticker.dots + 1) % (cfg.max_dots + 1);
    let Ok(mut text) = label.single_mut() else {
        return;
    };
    text.0 = format!("{}{}", cfg.label, ".".repeat(ticker.dots));
}

/// Tears the splash down on phase exit.
pub fn despawn_splash_screen(mut commands: Commands, ui: Query<Entity, With<SplashUi>>) {
    for entity in &ui {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<DotTicker>();
}
