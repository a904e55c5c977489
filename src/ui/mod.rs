//! UI module providing the egui-based interface.
//!
//! A bottom bar for time controls and a side panel for finding and flying to
//! bodies. Both only read the clock/ephemeris or send requests into them.

pub mod icons;
pub mod navigator;
mod time_controls;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use navigator::{NavigatorState, matching_bodies};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NavigatorState>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (time_controls::time_controls_panel, navigator::navigator_panel)
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
