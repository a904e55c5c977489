//! Ephemeris module for computing body positions from the simulation clock.
//!
//! Model:
//! - Circular, coplanar orbits around each body's parent (see `orbit`).
//! - Starting angles resolved once at catalog load (see `epoch`).
//! - Moons compose with their parent through the flat catalog arena.
//!
//! Coordinate frame:
//! - Star at origin, orbital plane is world XZ, +Y is up.

pub mod catalog;
pub mod data;
pub mod epoch;
pub mod orbit;

#[cfg(test)]
mod proptest_ephemeris;

pub use catalog::{AngleSource, BodyDef, Catalog, CatalogError, OrbitalBody};
pub use data::{SUN, load_solar_system, solar_system};

use bevy::math::{DVec2, DVec3};
use bevy::prelude::*;

use crate::camera::{CameraTarget, resolve_camera_target};
use crate::types::CalendarAnchor;

/// Lift a planar orbital coordinate into world space (orbital plane is XZ).
pub fn to_world(planar: DVec2) -> DVec3 {
    DVec3::new(planar.x, 0.0, planar.y)
}

/// Position and spin of a body at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyPose {
    /// Absolute world position
    pub position: DVec3,
    /// Self-rotation about +Y in radians
    pub rotation: f64,
}

/// Poses of every body at one instant, indexed like the catalog arena.
///
/// Computed fresh from `elapsed_days` and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodySnapshot {
    pub elapsed_days: f64,
    pub poses: Vec<BodyPose>,
}

impl BodySnapshot {
    pub fn get(&self, index: usize) -> Option<&BodyPose> {
        self.poses.get(index)
    }

    /// Poses paired with body names.
    pub fn named<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (&'a str, &'a BodyPose)> + 'a {
        catalog
            .bodies()
            .iter()
            .zip(&self.poses)
            .map(|(body, pose)| (body.name.as_str(), pose))
    }
}

/// Resource providing positions for every body in the catalog.
#[derive(Resource, Clone, Debug)]
pub struct Ephemeris {
    catalog: Catalog,
}

impl Ephemeris {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Ephemeris for the built-in solar system with angles resolved for `anchor`.
    pub fn solar_system(anchor: CalendarAnchor) -> Result<Self, CatalogError> {
        Ok(Self::new(load_solar_system(anchor)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Body index by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<usize> {
        self.catalog.find(name)
    }

    /// Orbital angle of a body around its parent. `None` for the root or an unknown index.
    pub fn orbital_angle(&self, index: usize, elapsed_days: f64) -> Option<f64> {
        let orbit = self.catalog.get(index)?.orbit?;
        Some(orbit.angle_at(elapsed_days))
    }

    /// Position relative to the parent. Always zero for the root.
    pub fn local_position(&self, index: usize, elapsed_days: f64) -> Option<DVec2> {
        let body = self.catalog.get(index)?;
        Some(
            body.orbit
                .map_or(DVec2::ZERO, |orbit| orbit.local_position(elapsed_days)),
        )
    }

    /// Absolute world position, composed recursively through parents.
    pub fn position(&self, index: usize, elapsed_days: f64) -> Option<DVec3> {
        let body = self.catalog.get(index)?;
        let local = to_world(self.local_position(index, elapsed_days)?);
        match body.parent {
            None => Some(local),
            Some(parent) => Some(self.position(parent, elapsed_days)? + local),
        }
    }

    pub fn position_by_name(&self, name: &str, elapsed_days: f64) -> Option<DVec3> {
        self.position(self.find(name)?, elapsed_days)
    }

    /// Self-rotation angle in radians.
    pub fn rotation(&self, index: usize, elapsed_days: f64) -> Option<f64> {
        Some(self.catalog.get(index)?.spin.angle_at(elapsed_days))
    }

    pub fn pose(&self, index: usize, elapsed_days: f64) -> Option<BodyPose> {
        Some(BodyPose {
            position: self.position(index, elapsed_days)?,
            rotation: self.rotation(index, elapsed_days)?,
        })
    }

    /// Poses of all bodies in one pass.
    ///
    /// The arena is in pre-order, so each parent's absolute position is already
    /// in the output when its children are reached.
    pub fn snapshot(&self, elapsed_days: f64) -> BodySnapshot {
        let mut poses: Vec<BodyPose> = Vec::with_capacity(self.catalog.len());
        for body in self.catalog.bodies() {
            let local = to_world(
                body.orbit
                    .map_or(DVec2::ZERO, |orbit| orbit.local_position(elapsed_days)),
            );
            let parent = body
                .parent
                .and_then(|p| poses.get(p))
                .map_or(DVec3::ZERO, |pose| pose.position);
            poses.push(BodyPose {
                position: parent + local,
                rotation: body.spin.angle_at(elapsed_days),
            });
        }

        BodySnapshot {
            elapsed_days,
            poses,
        }
    }

    /// Camera eye/look-at framing a body at its current position.
    pub fn camera_target(&self, index: usize, elapsed_days: f64) -> Option<CameraTarget> {
        let body = self.catalog.get(index)?;
        let position = self.position(index, elapsed_days)?;
        Some(resolve_camera_target(body, position, elapsed_days))
    }

    /// Like `camera_target`, by name. `None` if no body has this name.
    pub fn camera_target_by_name(&self, name: &str, elapsed_days: f64) -> Option<CameraTarget> {
        self.camera_target(self.find(name)?, elapsed_days)
    }

    /// Closed polyline of a body's orbit, centered on its parent's current position.
    ///
    /// Empty for the root.
    pub fn orbit_path(&self, index: usize, elapsed_days: f64, segments: usize) -> Vec<DVec3> {
        let Some(body) = self.catalog.get(index) else {
            return Vec::new();
        };
        let (Some(orbit), Some(parent)) = (body.orbit, body.parent) else {
            return Vec::new();
        };
        let Some(center) = self.position(parent, elapsed_days) else {
            return Vec::new();
        };

        orbit
            .path(segments)
            .into_iter()
            .map(|p| center + to_world(p))
            .collect()
    }
}
