//! Keyboard shortcuts for simulation time, navigation and toggles.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::camera::NavigateTo;
use crate::ephemeris::Ephemeris;
use crate::render::orbits::OrbitPathSettings;
use crate::time::TimeSystemSet;
use crate::types::{SPEED_PRESETS, SimulationClock};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        // Clock changes from the keyboard land before this frame's tick
        app.add_systems(Update, keyboard_shortcuts.before(TimeSystemSet::Advance));
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut clock: ResMut<SimulationClock>,
    mut orbit_settings: ResMut<OrbitPathSettings>,
    ephemeris: Res<Ephemeris>,
    mut navigate: MessageWriter<NavigateTo>,
) {
    // Typing in the search box must not trigger shortcuts
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        clock.toggle_pause();
        info!("Simulation {}", if clock.paused { "paused" } else { "running" });
    }

    // Time controls: [ and ] to adjust simulation speed
    if keys.just_pressed(KeyCode::BracketLeft) {
        clock.slower();
        info!("Speed: {} days/s", clock.speed);
    }

    if keys.just_pressed(KeyCode::BracketRight) {
        clock.faster();
        info!("Speed: {} days/s", clock.speed);
    }

    // Quick speed selection with number keys
    let preset_keys = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4];
    for (key, speed) in preset_keys.into_iter().zip(SPEED_PRESETS) {
        if keys.just_pressed(key) {
            clock.set_speed(speed);
            info!("Speed: {} days/s", clock.speed);
        }
    }

    // Home: back to the star overview
    if keys.just_pressed(KeyCode::Home) {
        let root = ephemeris.catalog().root();
        if let Some(star) = ephemeris.catalog().get(root) {
            navigate.write(NavigateTo(star.name.clone()));
        }
    }

    // O: toggle orbit paths
    if keys.just_pressed(KeyCode::KeyO) {
        orbit_settings.visible = !orbit_settings.visible;
    }

    // R: reset clock
    if keys.just_pressed(KeyCode::KeyR) {
        clock.reset();
        info!("Simulation reset");
    }
}
