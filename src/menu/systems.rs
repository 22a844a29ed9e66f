use bevy::prelude::*;

use super::MenuConfig;
use super::entities::{FadeIn, MenuUi, PlayButton};
use crate::math;
use crate::sequence::PlayPressed;

/// Spawns the title and Play control, both starting fully transparent.
pub fn spawn_menu(mut commands: Commands, cfg: Res<MenuConfig>) {
    commands
        .spawn((
            Name::new("DesktopUi"),
            MenuUi,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(80.0),
                left: Val::Px(80.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(cfg.title.clone()),
                TextFont {
                    font_size: cfg.title_font_size,
                    ..default()
                },
                TextColor(cfg.text_color.with_alpha(0.0)),
                FadeIn::after(cfg.title_delay, cfg.fade_duration),
            ));
            parent
                .spawn((
                    PlayButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(4.0)),
                        ..default()
                    },
                    BackgroundColor(Color::NONE),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("PLAY"),
                        TextFont {
                            font_size: cfg.play_font_size,
                            ..default()
                        },
                        TextColor(cfg.text_color.with_alpha(0.0)),
                        FadeIn::after(cfg.play_delay, cfg.fade_duration),
                    ));
                });
        });
}

/// Ramps text opacity with the smootherstep curve once each delay passes.
pub fn fade_in(time: Res<Time>, mut fades: Query<(&mut FadeIn, &mut TextColor)>) {
    for (mut fade, mut color) in &mut fades {
        fade.elapsed += time.delta_secs();
        let alpha = math::fade_in_alpha(fade.elapsed, fade.delay, fade.duration);
        color.0.set_alpha(alpha);
    }
}

/// Forwards Play control presses to the sequencer.
pub fn play_on_click(
    interactions: Query<&Interaction, (Changed<Interaction>, With<PlayButton>)>,
    mut pressed: MessageWriter<PlayPressed>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            pressed.write(PlayPressed);
        }
    }
}

/// Enter is a keyboard stand-in for the Play control.
pub fn play_on_enter(keys: Res<ButtonInput<KeyCode>>, mut pressed: MessageWriter<PlayPressed>) {
    if keys.just_pressed(KeyCode::Enter) {
        pressed.write(PlayPressed);
    }
}

/// Tears the menu down on phase exit.
pub fn despawn_menu(mut commands: Commands, ui: Query<Entity, With<MenuUi>>) {
    for entity in &ui {
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    #[test]
    fn pressed_play_control_emits_the_trigger() {
        let mut world = World::new();
        world.init_resource::<Messages<PlayPressed>>();
        world.spawn((PlayButton, Interaction::Pressed));

        world.run_system_once(play_on_click).unwrap();
        assert!(!world.resource::<Messages<PlayPressed>>().is_empty());
    }

    #[test]
    fn hover_does_not_emit_the_trigger() {
        let mut world = World::new();
        world.init_resource::<Messages<PlayPressed>>();
        world.spawn((PlayButton, Interaction::Hovered));

        world.run_system_once(play_on_click).unwrap();
        assert!(world.resource::<Messages<PlayPressed>>().is_empty());
    }

    #[test]
    fn fade_tracks_the_eased_ramp() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs_f32(0.3));
        world.insert_resource(time);
        let entity = world
            .spawn((
                FadeIn::after(0.1, 0.4),
                TextColor(Color::WHITE.with_alpha(0.0)),
            ))
            .id();

        // 0.3s elapsed: halfway through the ramp after the 0.1s delay.
        world.run_system_once(fade_in).unwrap();
        let alpha = world.get::<TextColor>(entity).unwrap().0.alpha();
        assert!((alpha - 0.5).abs() < 1e-4);

        // Well past the ramp: pinned fully opaque.
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(5.0));
        world.run_system_once(fade_in).unwrap();
        let alpha = world.get::<TextColor>(entity).unwrap().0.alpha();
        assert_eq!(alpha, 1.0);
    }
}
