//! Rendering systems for the orrery.
//!
//! The renderer never computes positions itself. It reads the per-tick
//! `PositionSnapshot` published by the time plugin.

pub mod bodies;
pub mod orbits;
mod sync;

use bevy::prelude::*;

use crate::time::TimeSystemSet;

use self::bodies::spawn_bodies;
use self::orbits::{OrbitPathSettings, draw_orbit_paths};
use self::sync::sync_body_transforms;

// Re-export for use in other modules
pub use self::bodies::CelestialBody;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .add_systems(Startup, spawn_bodies)
            // Transforms must follow the snapshot of this frame, orbit paths
            // are drawn around the final parent positions.
            .add_systems(
                Update,
                (sync_body_transforms, draw_orbit_paths)
                    .chain()
                    .after(TimeSystemSet::Snapshot),
            );
    }
}
