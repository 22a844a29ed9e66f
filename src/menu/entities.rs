use bevy::prelude::*;

/// Root node of the desktop UI; despawned on phase exit.
#[derive(Component)]
pub struct MenuUi;

/// Marker for the Play control.
#[derive(Component)]
pub struct PlayButton;

/// Eases a text element from transparent to opaque after a mount delay.
#[derive(Component, Reflect)]
pub struct FadeIn {
    /// Seconds to stay invisible after mount.
    pub delay: f32,
    /// Fade ramp length in seconds.
    pub duration: f32,
    /// Seconds since mount, accumulated by the fade system.
    pub elapsed: f32,
}

impl FadeIn {
    /// A fade that starts `delay` seconds after mount.
    pub fn after(delay: f32, duration: f32) -> Self {
        Self {
            delay,
            duration,
            elapsed: 0.0,
        }
    }
}
