use bevy::prelude::*;

/// Root UI node of the boot screen; despawned on phase exit.
#[derive(Component)]
pub struct BootUi;

/// The text block that accumulates typed lines.
#[derive(Component)]
pub struct BootReadout;

/// Typewriter state: which line lands next and when.
#[derive(Resource)]
pub struct Typewriter {
    /// Index into the BIOS line table.
    pub next_line: usize,
    /// Single-shot delay until the next line (or the final hold).
    pub delay: Timer,
    /// Seeded jitter source, deterministic across targets.
    pub rng: fastrand::Rng,
}

/// Fired once after the last boot line has been held on screen.
#[derive(Message)]
pub struct BootFinished;
