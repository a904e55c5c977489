//! Orrery - Star, Planet and Moon Simulator
//!
//! A library crate providing the orbital position and time model, camera
//! targeting, and the Bevy plugins that render and drive them.

pub mod camera;
pub mod ephemeris;
pub mod input;
pub mod render;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
