//! Orrery - Star, Planet and Moon Simulator
//!
//! A desktop application showing the solar system on circular orbits, with a
//! running clock, speed controls and fly-to navigation.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::ephemeris::Ephemeris;
use orrery::input::InputPlugin;
use orrery::render::RenderPlugin;
use orrery::time::{PositionSnapshot, TimePlugin};
use orrery::types::{CalendarAnchor, SimulationClock};
use orrery::ui::UiPlugin;

fn main() -> AppExit {
    // Starting angles are resolved once, for today's date
    let anchor = CalendarAnchor::from_system_clock();
    let ephemeris = match Ephemeris::solar_system(anchor) {
        Ok(ephemeris) => ephemeris,
        Err(err) => {
            // No LogPlugin yet, so report straight to stderr
            eprintln!("invalid body catalog: {err}");
            return AppExit::error();
        }
    };
    let snapshot = PositionSnapshot(ephemeris.snapshot(0.0));

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        // Insert resources before plugins that depend on them
        .insert_resource(ephemeris)
        .insert_resource(SimulationClock::at_anchor(anchor))
        .insert_resource(snapshot)
        // Add simulation plugins
        .add_plugins((TimePlugin, CameraPlugin, RenderPlugin, InputPlugin, UiPlugin))
        .run()
}
