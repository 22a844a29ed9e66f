use bevy::prelude::*;

use super::SequenceConfig;
use super::entities::{PhaseTimer, PlayPressed};
use crate::AppPhase;
use crate::boot::BootFinished;

/// Schedules the single-shot hold that advances Splash → Desktop.
pub fn schedule_splash_hold(mut commands: Commands, cfg: Res<SequenceConfig>) {
    commands.insert_resource(PhaseTimer(Timer::from_seconds(
        cfg.splash_hold,
        TimerMode::Once,
    )));
}

/// Drops any pending phase timer when its governing phase is exited.
pub fn cancel_phase_timer(mut commands: Commands) {
    commands.remove_resource::<PhaseTimer>();
}

/// Advances to the next phase when the pending timer elapses.
///
/// The timer is consumed either way; firing from the terminal phase is a
/// no-op rather than an error.
pub fn advance_on_timer(
    time: Res<Time>,
    timer: Option<ResMut<PhaseTimer>>,
    state: Res<State<AppPhase>>,
    mut next: ResMut<NextState<AppPhase>>,
    mut commands: Commands,
) {
    let Some(mut timer) = timer else { return };
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    commands.remove_resource::<PhaseTimer>();
    if let Some(next_phase) = state.get().next() {
        info!("phase timer elapsed: {:?} -> {:?}", state.get(), next_phase);
        next.set(next_phase);
    }
}

/// Advances Boot → Splash once the boot typewriter reports completion.
///
/// The typewriter's randomized per-line delays are the boot phase's timer.
pub fn advance_on_boot_finished(
    mut finished: MessageReader<BootFinished>,
    state: Res<State<AppPhase>>,
    mut next: ResMut<NextState<AppPhase>>,
) {
    if finished.read().next().is_none() {
        return;
    }
    if let Some(next_phase) = state.get().next() {
        info!("boot finished: {:?} -> {:?}", state.get(), next_phase);
        next.set(next_phase);
    }
}

/// Advances immediately on the Play trigger, independent of any pending
/// timer. The timer is cancelled first so its delay elapsing later cannot
/// cause a second, unintended advance.
pub fn advance_on_play(
    mut pressed: MessageReader<PlayPressed>,
    state: Res<State<AppPhase>>,
    mut next: ResMut<NextState<AppPhase>>,
    mut commands: Commands,
) {
    if pressed.read().next().is_none() {
        return;
    }
    commands.remove_resource::<PhaseTimer>();
    if let Some(next_phase) = state.get().next() {
        info!("play triggered: {:?} -> {:?}", state.get(), next_phase);
        next.set(next_phase);
    }
}
