//! Time advancement and per-tick position snapshots.
//!
//! `advance_time` is the only per-frame writer of `SimulationClock`.
//! `update_snapshot` runs right after it and publishes the poses of every body
//! for the renderer.

use bevy::prelude::*;

use crate::ephemeris::{BodySnapshot, Ephemeris};
use crate::types::SimulationClock;

/// Poses of every body for the current tick.
#[derive(Resource, Clone, Debug, Default)]
pub struct PositionSnapshot(pub BodySnapshot);

/// System set for clock advance and snapshot publication.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimeSystemSet {
    /// Clock advance (runs first)
    Advance,
    /// Snapshot publication (runs after the clock moved)
    Snapshot,
}

/// Plugin providing time advancement functionality.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PositionSnapshot>()
            .configure_sets(
                Update,
                TimeSystemSet::Snapshot.after(TimeSystemSet::Advance),
            )
            .add_systems(
                Update,
                (
                    advance_time.in_set(TimeSystemSet::Advance),
                    update_snapshot.in_set(TimeSystemSet::Snapshot),
                ),
            );
    }
}

/// Advance simulation time based on speed and pause state.
///
/// Speed is how many sim-days pass per real-world second, so one real second at
/// speed 1.0 advances the clock by one day.
pub fn advance_time(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta_secs_f64());
}

/// Recompute all body poses from the current clock.
pub fn update_snapshot(
    clock: Res<SimulationClock>,
    ephemeris: Res<Ephemeris>,
    mut snapshot: ResMut<PositionSnapshot>,
) {
    snapshot.0 = ephemeris.snapshot(clock.elapsed_days);
}
