//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use orrery::ephemeris::{AngleSource, BodyDef, Catalog, Ephemeris};
use orrery::types::CalendarAnchor;
use std::f64::consts::{PI, TAU};

/// The built-in solar system at the default calendar anchor.
pub fn solar_system() -> Ephemeris {
    Ephemeris::solar_system(CalendarAnchor::default()).unwrap()
}

/// Star with one planet at `distance`, period one year, starting at `base_angle`.
///
/// The planet carries a single moon ("Moon") at distance 1.5.
pub fn star_and_planet(distance: f64, base_angle: f64) -> Ephemeris {
    let defs = vec![
        BodyDef::root("Star", 1.0, 25.0),
        BodyDef::orbiting(
            "Planet",
            distance,
            0.5,
            1.0,
            1.0,
            AngleSource::Fixed(base_angle),
        )
        .with_children(vec![BodyDef::orbiting(
            "Moon",
            1.5,
            0.1,
            0.1,
            -2.0,
            AngleSource::Fixed(0.3),
        )]),
    ];
    Ephemeris::new(Catalog::load(&defs, CalendarAnchor::default()).unwrap())
}

/// Smallest signed difference between two angles.
pub fn angle_diff(a: f64, b: f64) -> f64 {
    (a - b + PI).rem_euclid(TAU) - PI
}

/// Horizontal (XZ) distance between two points.
pub fn horizontal_distance(a: DVec3, b: DVec3) -> f64 {
    let d = a - b;
    (d.x * d.x + d.z * d.z).sqrt()
}
