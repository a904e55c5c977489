//! Circular, coplanar orbit model and self-rotation.
//!
//! Every angle here is a pure function of `elapsed_days`. Before scaling, time is
//! reduced by the exact floating-point remainder of the relevant period, so the
//! trigonometric argument stays within one revolution however long the
//! simulation runs. The remainder is exact in IEEE-754, which leaves the angle
//! unchanged modulo 2π.

use bevy::math::DVec2;
use std::f64::consts::TAU;

use crate::types::{DAYS_PER_YEAR, REFERENCE_COEFFICIENT, ROTATION_SCALE};

/// Circular orbit around a parent body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularOrbit {
    /// Orbit radius in scene units
    pub distance: f64,
    /// Orbital period in Julian years (strictly positive)
    pub period_years: f64,
    /// Orbital angle at `elapsed_days = 0`, radians
    pub base_angle: f64,
}

impl CircularOrbit {
    pub fn new(distance: f64, period_years: f64, base_angle: f64) -> Self {
        Self {
            distance,
            period_years,
            base_angle,
        }
    }

    /// Normalization factor tying this period to the shared time scale.
    pub fn angular_coefficient(&self) -> f64 {
        REFERENCE_COEFFICIENT / self.period_years
    }

    /// Orbital period in simulated days.
    pub fn period_days(&self) -> f64 {
        DAYS_PER_YEAR / self.angular_coefficient()
    }

    /// Orbital angle in radians at `elapsed_days`.
    ///
    /// Equal to `base_angle + (t / period_days) * 2π` modulo 2π.
    pub fn angle_at(&self, elapsed_days: f64) -> f64 {
        let period = self.period_days();
        let phase = elapsed_days.rem_euclid(period) / period;
        self.base_angle + phase * TAU
    }

    /// Position in the orbital plane relative to the parent.
    ///
    /// `x` maps to world X and `y` to world Z.
    pub fn local_position(&self, elapsed_days: f64) -> DVec2 {
        let angle = self.angle_at(elapsed_days);
        DVec2::new(self.distance * angle.cos(), self.distance * angle.sin())
    }

    /// Sample the orbit as a closed loop of `segments + 1` points around the origin.
    pub fn path(&self, segments: usize) -> Vec<DVec2> {
        let segments = segments.max(3);
        (0..=segments)
            .map(|i| {
                let angle = (i % segments) as f64 / segments as f64 * TAU;
                DVec2::new(self.distance * angle.cos(), self.distance * angle.sin())
            })
            .collect()
    }
}

/// Self-rotation about the body's own axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinModel {
    /// Sidereal rotation period in days. Negative means retrograde.
    pub rotation_days: f64,
}

impl SpinModel {
    pub fn new(rotation_days: f64) -> Self {
        Self { rotation_days }
    }

    pub fn is_retrograde(&self) -> bool {
        self.rotation_days < 0.0
    }

    /// Simulated days for one displayed turn, after `ROTATION_SCALE`.
    pub fn display_period_days(&self) -> f64 {
        self.rotation_days.abs() / ROTATION_SCALE
    }

    /// Rotation angle in radians at `elapsed_days`.
    ///
    /// Equal to `±2π · t · ROTATION_SCALE / |rotation_days|` modulo 2π; the sign
    /// is negative for retrograde rotation and the magnitude does not depend on it.
    pub fn angle_at(&self, elapsed_days: f64) -> f64 {
        let period = self.display_period_days();
        let magnitude = elapsed_days.rem_euclid(period) / period * TAU;
        if self.is_retrograde() {
            -magnitude
        } else {
            magnitude
        }
    }
}
