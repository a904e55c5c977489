//! Reference epoch resolver: starting orbital angles from J2000 mean longitudes.
//!
//! Runs once per body while the catalog is loaded. The result is stored as the
//! body's base angle and never recomputed from the running clock.

use std::f64::consts::FRAC_PI_2;

use crate::types::{CalendarAnchor, DAYS_PER_YEAR, DEG_TO_RAD, J2000_YEAR};

/// Mean-longitude constants anchored at J2000.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeanLongitude {
    /// Mean longitude at J2000 in degrees
    pub l0_deg: f64,
    /// Rate of change in degrees per Julian year
    pub rate_deg_per_year: f64,
}

impl MeanLongitude {
    pub const fn new(l0_deg: f64, rate_deg_per_year: f64) -> Self {
        Self {
            l0_deg,
            rate_deg_per_year,
        }
    }

    /// Mean longitude in degrees, normalized to `[0, 360)`.
    pub fn at(&self, anchor: CalendarAnchor) -> f64 {
        let years = years_since_j2000(anchor);
        (self.l0_deg + self.rate_deg_per_year * years).rem_euclid(360.0)
    }

    /// Base angle in radians for a simulation starting at `anchor`.
    ///
    /// The `-π/2` term puts zero azimuth where the renderer expects it.
    pub fn base_angle(&self, anchor: CalendarAnchor) -> f64 {
        self.at(anchor) * DEG_TO_RAD - FRAC_PI_2
    }
}

/// Fractional Julian years between J2000 and the anchor day.
pub fn years_since_j2000(anchor: CalendarAnchor) -> f64 {
    (anchor.year - J2000_YEAR) as f64 + anchor.day_of_year / DAYS_PER_YEAR
}
