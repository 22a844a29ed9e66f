use bevy::prelude::*;

/// The single pending single-shot timer for the next automatic phase advance.
///
/// At most one exists at a time. It is removed when it fires, when its phase
/// is exited, or when the user trigger outranks it, so a late callback can
/// never advance against stale state.
#[derive(Resource)]
pub struct PhaseTimer(pub Timer);

/// Sent by the Play control (mouse or Enter) to leave the desktop immediately.
#[derive(Message)]
pub struct PlayPressed;
