use bevy::prelude::*;

/// Root UI node of the splash screen; despawned on phase exit.
#[derive(Component)]
pub struct SplashUi;

/// The "LOADING" label whose trailing dots animate.
#[derive(Component)]
pub struct SplashLabel;

/// Cycles the trailing-dot count on a repeating timer.
#[derive(Resource)]
pub struct DotTicker {
    /// Repeating step timer.
    pub timer: Timer,
    /// Current dot count, cycled through 0..=max.
    pub dots: usize,
}
