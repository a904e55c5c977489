//! Property-based tests for the orbit model using proptest.
//!
//! These tests verify that positions and angles keep their invariants across a
//! wide range of times and orbital constants.

use proptest::prelude::*;
use std::f64::consts::{PI, TAU};

use super::orbit::{CircularOrbit, SpinModel};
use super::Ephemeris;
use crate::types::{CalendarAnchor, DAYS_PER_YEAR};

/// Smallest signed difference between two angles.
fn angle_diff(a: f64, b: f64) -> f64 {
    (a - b + PI).rem_euclid(TAU) - PI
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The orbital angle repeats after exactly one period.
    #[test]
    fn prop_angle_periodic(
        period_years in 0.001f64..300.0,
        base_angle in -TAU..TAU,
        t in 0.0f64..1.0e6,
    ) {
        let orbit = CircularOrbit::new(5.0, period_years, base_angle);
        let period = orbit.period_days();

        let diff = angle_diff(orbit.angle_at(t + period), orbit.angle_at(t));
        prop_assert!(
            diff.abs() < 1e-6,
            "angle not periodic: period={} days, t={}, diff={}",
            period, t, diff
        );
    }

    /// Position changes smoothly, including across displayed year boundaries.
    #[test]
    fn prop_position_continuous_across_year_boundary(
        years in 1u32..200,
        period_years in 0.01f64..250.0,
        distance in 0.1f64..50.0,
    ) {
        let orbit = CircularOrbit::new(distance, period_years, 0.4);
        let boundary = years as f64 * DAYS_PER_YEAR;
        let eps = 1e-6;

        let before = orbit.local_position(boundary - eps);
        let after = orbit.local_position(boundary + eps);

        // Arc length for 2·eps days, with slack for rounding
        let max_step = distance * TAU / orbit.period_days() * 2.0 * eps + 1e-6;
        prop_assert!(
            (after - before).length() <= max_step,
            "jump of {} at year boundary {}",
            (after - before).length(), boundary
        );
    }

    /// Distance from the parent never changes.
    #[test]
    fn prop_distance_constant(
        distance in 0.1f64..100.0,
        period_years in 0.001f64..300.0,
        t in 0.0f64..1.0e7,
    ) {
        let orbit = CircularOrbit::new(distance, period_years, 1.0);
        let r = orbit.local_position(t).length();
        prop_assert!((r - distance).abs() < 1e-9 * distance.max(1.0));
    }

    /// Flipping the sign of the rotation period negates the angle only.
    #[test]
    fn prop_retrograde_sign(
        rotation_days in 0.01f64..500.0,
        t in 0.0f64..1.0e6,
    ) {
        let pro = SpinModel::new(rotation_days).angle_at(t);
        let retro = SpinModel::new(-rotation_days).angle_at(t);
        prop_assert_eq!(retro, -pro);
        prop_assert_eq!(retro.abs(), pro.abs());
    }

    /// The root star never leaves the origin.
    #[test]
    fn prop_root_invariant(t in 0.0f64..1.0e8) {
        let eph = Ephemeris::solar_system(CalendarAnchor::default()).unwrap();
        let root = eph.catalog().root();
        prop_assert_eq!(eph.position(root, t), Some(bevy::math::DVec3::ZERO));
    }

    /// Moon position equals parent position plus its own relative orbit.
    #[test]
    fn prop_hierarchical_consistency(t in 0.0f64..1.0e6) {
        let eph = Ephemeris::solar_system(CalendarAnchor::default()).unwrap();
        let snapshot = eph.snapshot(t);

        for (i, body) in eph.catalog().bodies().iter().enumerate() {
            let Some(parent) = body.parent else { continue };
            let parent_pos = eph.position(parent, t).unwrap();
            let relative = super::to_world(body.orbit.unwrap().local_position(t));
            let expected = parent_pos + relative;

            let composed = eph.position(i, t).unwrap();
            let cached = snapshot.poses[i].position;
            prop_assert!((composed - expected).length() < 1e-9, "{}", body.name);
            prop_assert!((cached - expected).length() < 1e-9, "{}", body.name);
        }
    }

    /// Composition holds below the first moon level too.
    #[test]
    fn prop_nested_consistency(t in 0.0f64..1.0e6) {
        let eph = crate::test_utils::fixtures::nested_moons();
        let snapshot = eph.snapshot(t);

        let mut expected = bevy::math::DVec3::ZERO;
        for (i, body) in eph.catalog().bodies().iter().enumerate() {
            if let Some(orbit) = body.orbit {
                expected += super::to_world(orbit.local_position(t));
            }
            let composed = eph.position(i, t).unwrap();
            prop_assert!((composed - expected).length() < 1e-9, "{}", body.name);
            prop_assert!((snapshot.poses[i].position - expected).length() < 1e-9, "{}", body.name);
        }
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn test_all_builtin_periods_positive() {
        let eph = Ephemeris::solar_system(CalendarAnchor::default()).unwrap();
        for body in eph.catalog().bodies() {
            if let Some(orbit) = body.orbit {
                assert!(orbit.period_days() > 0.0, "{} has non-positive period", body.name);
            }
            assert!(body.spin.rotation_days != 0.0);
        }
    }

    #[test]
    fn test_builtin_positions_finite_far_in_future() {
        let eph = Ephemeris::solar_system(CalendarAnchor::default()).unwrap();
        // About 2.7 million simulated years
        let snapshot = eph.snapshot(1.0e9);
        for pose in &snapshot.poses {
            assert!(pose.position.is_finite());
            assert!(pose.rotation.is_finite());
        }
    }
}
