//! Orbit path rendering using Bevy Gizmos.
//!
//! Each orbit is drawn as a closed circle around its parent's current position,
//! sampled from the ephemeris so the body always lies on its drawn path.

use bevy::prelude::*;

use crate::ephemeris::Ephemeris;
use crate::render::bodies::body_color;
use crate::types::SimulationClock;

/// Settings for orbit path rendering.
#[derive(Resource, Clone, Debug)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Whether moon orbits are drawn too.
    pub show_moons: bool,
    /// Number of segments per circle (higher = smoother).
    pub segments: usize,
    /// Alpha value for orbit path color.
    pub alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            show_moons: true,
            segments: 128,
            alpha: 0.3,
        }
    }
}

/// Draw orbit paths for every orbiting body.
pub fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    ephemeris: Res<Ephemeris>,
    clock: Res<SimulationClock>,
) {
    if !settings.visible {
        return;
    }

    let catalog = ephemeris.catalog();
    for (index, body) in catalog.bodies().iter().enumerate() {
        if body.is_root() || (!settings.show_moons && catalog.depth(index) > 1) {
            continue;
        }

        let path = ephemeris.orbit_path(index, clock.elapsed_days, settings.segments);
        let color = body_color(&body.name).with_alpha(settings.alpha);
        gizmos.linestrip(path.iter().map(|p| p.as_vec3()), color);
    }
}
