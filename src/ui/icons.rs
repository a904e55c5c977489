//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Play icon (triangle pointing right)
pub const PLAY: &str = egui_phosphor::regular::PLAY;
/// Pause icon (two vertical bars)
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Reset/reload icon (circular arrow)
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
/// Slower (rewind arrows)
pub const SLOWER: &str = egui_phosphor::regular::REWIND;
/// Faster (fast-forward arrows)
pub const FASTER: &str = egui_phosphor::regular::FAST_FORWARD;
/// Clock/time icon
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
/// Search icon
pub const SEARCH: &str = egui_phosphor::regular::MAGNIFYING_GLASS;
/// Target/crosshair icon
pub const TARGET: &str = egui_phosphor::regular::CROSSHAIR;

// Body icons
/// Sun icon
pub const SUN: &str = egui_phosphor::regular::SUN;
/// Planet/globe icon
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
/// Moon icon
pub const MOON: &str = egui_phosphor::regular::MOON;

/// Icon for a body at the given nesting depth (0 = star).
pub fn body_icon(depth: usize) -> &'static str {
    match depth {
        0 => SUN,
        1 => PLANET,
        _ => MOON,
    }
}
