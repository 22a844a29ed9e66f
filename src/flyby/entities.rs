use bevy::prelude::*;

use crate::AppPhase;

/// Marker for the single menu camera entity.
#[derive(Component, Reflect)]
pub struct MenuCamera;

/// Segment-start clock, keyed by the phase that owns the segment.
///
/// `started_at` is captured lazily on the first animation tick after the
/// phase is entered, so the segment always begins at elapsed zero no matter
/// when the transition landed within a frame.
#[derive(Resource, Default)]
pub struct SegmentClock {
    /// Phase the captured start time belongs to.
    pub phase: AppPhase,
    /// App-clock reading at the first tick of the segment, in seconds.
    pub started_at: Option<f32>,
}
