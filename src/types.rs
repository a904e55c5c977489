//! Core types and constants for the orrery clock and orbital model.

use bevy::prelude::*;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::fmt;

/// Days in one Julian year. Also the length of one displayed "year".
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Calendar year of the J2000.0 epoch.
pub const J2000_YEAR: i32 = 2000;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Normalization constant shared by every orbit.
///
/// `orbital_period_days = DAYS_PER_YEAR * period_years / REFERENCE_COEFFICIENT`,
/// so a body with a one-year period completes a revolution in exactly
/// `DAYS_PER_YEAR` simulated days.
pub const REFERENCE_COEFFICIENT: f64 = 1.0;

/// Cosmetic multiplier applied to self-rotation so spin stays perceptible
/// without tying it to the orbital time scale.
pub const ROTATION_SCALE: f64 = 0.1;

/// Slowest allowed simulation speed (sim-days per real second).
pub const MIN_SPEED: f64 = 0.125;

/// Fastest allowed simulation speed (sim-days per real second).
pub const MAX_SPEED: f64 = 4096.0;

/// Quick-select speeds shown in the UI and bound to number keys 1-4.
pub const SPEED_PRESETS: [f64; 4] = [1.0, 10.0, 100.0, 1000.0];

/// Calendar day labelled as `elapsed_days = 0` when no system clock is used.
pub const DEFAULT_ANCHOR_YEAR: i32 = 2024;
pub const DEFAULT_ANCHOR_DAY_OF_YEAR: f64 = 277.0;

/// The real calendar day that the start of the simulation is labelled with.
///
/// Consumed once at startup by the epoch resolver and reused by the display
/// projection. Never derived from the running clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalendarAnchor {
    /// Calendar year (e.g. 2024)
    pub year: i32,
    /// Zero-based day of year, fractional part is time of day
    pub day_of_year: f64,
}

impl Default for CalendarAnchor {
    fn default() -> Self {
        Self {
            year: DEFAULT_ANCHOR_YEAR,
            day_of_year: DEFAULT_ANCHOR_DAY_OF_YEAR,
        }
    }
}

impl CalendarAnchor {
    pub fn new(year: i32, day_of_year: f64) -> Self {
        Self { year, day_of_year }
    }

    /// Anchor at the current UTC date from the system clock.
    pub fn from_system_clock() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Anchor at the UTC day containing a Unix timestamp.
    ///
    /// Falls back to the default anchor for timestamps chrono cannot represent.
    pub fn from_unix_seconds(unix_secs: i64) -> Self {
        DateTime::from_timestamp(unix_secs, 0).map_or_else(Self::default, Self::from_datetime)
    }

    /// Anchor at a UTC instant; the fractional day is the time of day.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        let seconds_of_day = at.num_seconds_from_midnight() as f64;
        Self {
            year: at.year(),
            day_of_year: at.ordinal0() as f64 + seconds_of_day / SECONDS_PER_DAY,
        }
    }
}

/// Calendar label derived from the clock. Display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayDate {
    pub year: i32,
    /// Zero-based day within the displayed year (0..=365)
    pub day_of_year: u32,
    pub hour_of_day: u32,
}

impl DisplayDate {
    /// Project `elapsed_days` onto the calendar starting at `anchor`.
    pub fn project(anchor: CalendarAnchor, elapsed_days: f64) -> Self {
        let total = anchor.day_of_year + elapsed_days;
        let years_elapsed = (total / DAYS_PER_YEAR).floor();
        let within_year = total.rem_euclid(DAYS_PER_YEAR);
        let day = within_year.floor();
        let hour = ((within_year - day) * 24.0).floor().min(23.0);

        Self {
            year: anchor.year.saturating_add(years_elapsed as i32),
            day_of_year: day as u32,
            hour_of_day: hour as u32,
        }
    }
}

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04} · day {:03} · {:02}:00",
            self.year, self.day_of_year, self.hour_of_day
        )
    }
}

/// Simulation clock resource.
///
/// `elapsed_days` is the only input to body positions. The calendar label is a
/// projection of it and is never written back.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Simulated days since the simulation started
    pub elapsed_days: f64,
    /// Sim-days per real second
    pub speed: f64,
    /// Whether simulation is paused
    pub paused: bool,
    /// Calendar day labelled as `elapsed_days = 0`
    pub anchor: CalendarAnchor,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::at_anchor(CalendarAnchor::default())
    }
}

impl SimulationClock {
    /// Create a running clock at `elapsed_days = 0` with the given calendar anchor.
    pub fn at_anchor(anchor: CalendarAnchor) -> Self {
        Self {
            elapsed_days: 0.0,
            speed: 1.0,
            paused: false,
            anchor,
        }
    }

    /// Advance by one frame of real time.
    ///
    /// Negative or non-finite deltas are ignored so `elapsed_days` never decreases.
    pub fn tick(&mut self, delta_seconds: f64) {
        if self.paused || !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return;
        }
        self.elapsed_days += delta_seconds * self.speed;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Set the speed, clamped to `[MIN_SPEED, MAX_SPEED]`. Non-finite values are ignored.
    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() {
            self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        }
    }

    /// Double the speed.
    pub fn faster(&mut self) {
        self.set_speed(self.speed * 2.0);
    }

    /// Halve the speed.
    pub fn slower(&mut self) {
        self.set_speed(self.speed * 0.5);
    }

    /// Return to the start of the simulation, paused.
    pub fn reset(&mut self) {
        self.elapsed_days = 0.0;
        self.paused = true;
    }

    /// Calendar label for the current instant.
    pub fn display_date(&self) -> DisplayDate {
        DisplayDate::project(self.anchor, self.elapsed_days)
    }
}
