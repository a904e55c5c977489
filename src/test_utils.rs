//! Test utilities for orbit and camera tests.
//!
//! Provides small catalogs with known constants and assertions for comparing
//! positions and angles.

/// Fixtures for creating test catalogs.
pub mod fixtures {
    use crate::ephemeris::{AngleSource, BodyDef, Catalog, Ephemeris};
    use crate::types::CalendarAnchor;

    /// The built-in solar system at the default calendar anchor.
    pub fn solar_system() -> Ephemeris {
        Ephemeris::solar_system(CalendarAnchor::default()).expect("built-in catalog is valid")
    }

    /// A star with one planet (which has one moon) on the given orbit.
    ///
    /// Names are "Star", "Planet" and "Moon".
    pub fn star_planet_moon(distance: f64, period_years: f64, base_angle: f64) -> Ephemeris {
        let defs = vec![
            BodyDef::root("Star", 1.0, 25.0),
            BodyDef::orbiting(
                "Planet",
                distance,
                0.5,
                period_years,
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
        let catalog =
            Catalog::load(&defs, CalendarAnchor::default()).expect("fixture catalog is valid");
        Ephemeris::new(catalog)
    }

    /// Four levels deep: "Star" → "Planet" → "Moon" → "Moonlet".
    pub fn nested_moons() -> Ephemeris {
        let defs = vec![
            BodyDef::root("Star", 1.0, 25.0),
            BodyDef::orbiting("Planet", 12.0, 0.6, 2.5, 0.8, AngleSource::Fixed(0.4))
                .with_children(vec![
                    BodyDef::orbiting("Moon", 2.0, 0.2, 0.2, 3.0, AngleSource::Fixed(1.1))
                        .with_children(vec![BodyDef::orbiting(
                            "Moonlet",
                            0.4,
                            0.05,
                            0.01,
                            -0.5,
                            AngleSource::Fixed(2.7),
                        )]),
                ]),
        ];
        let catalog =
            Catalog::load(&defs, CalendarAnchor::default()).expect("fixture catalog is valid");
        Ephemeris::new(catalog)
    }
}

/// Assertions for positions and angles.
pub mod assertions {
    use bevy::math::DVec3;
    use std::f64::consts::{PI, TAU};

    /// Assert two positions are within `tolerance` of each other.
    pub fn assert_close(actual: DVec3, expected: DVec3, tolerance: f64) {
        let error = (actual - expected).length();
        assert!(
            error <= tolerance,
            "positions differ by {} (> {}): {:?} vs {:?}",
            error,
            tolerance,
            actual,
            expected
        );
    }

    /// Assert two angles are equal modulo 2π.
    pub fn assert_angle_eq(actual: f64, expected: f64, tolerance: f64) {
        let diff = (actual - expected + PI).rem_euclid(TAU) - PI;
        assert!(
            diff.abs() <= tolerance,
            "angles differ by {} rad: {} vs {}",
            diff,
            actual,
            expected
        );
    }
}
