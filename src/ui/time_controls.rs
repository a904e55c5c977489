//! Time controls panel at the bottom of the screen.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::types::{SPEED_PRESETS, SimulationClock};
use crate::ui::icons;

/// System that renders the time controls panel.
pub fn time_controls_panel(mut contexts: EguiContexts, mut clock: ResMut<SimulationClock>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("time_controls").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            // Play/Pause button
            let icon = if clock.paused { icons::PLAY } else { icons::PAUSE };
            if ui
                .button(icon)
                .on_hover_text(if clock.paused {
                    "Play (Space)"
                } else {
                    "Pause (Space)"
                })
                .clicked()
            {
                clock.toggle_pause();
            }

            ui.separator();

            // Calendar label (display only)
            ui.label(
                egui::RichText::new(format!("{} {}", icons::CLOCK, clock.display_date()))
                    .monospace(),
            );
            ui.label(
                egui::RichText::new(format!("t = {:.2} d", clock.elapsed_days))
                    .monospace()
                    .weak(),
            );

            ui.separator();

            if ui.button(icons::SLOWER).on_hover_text("Slower ([)").clicked() {
                clock.slower();
            }

            // Speed presets (mutually exclusive)
            for (i, speed) in SPEED_PRESETS.iter().enumerate() {
                let label = format!("{}x", *speed as i32);
                let is_selected = (clock.speed - speed).abs() < 0.01;
                if ui
                    .selectable_label(is_selected, label)
                    .on_hover_text(format!("{} days per second ({})", speed, i + 1))
                    .clicked()
                {
                    clock.set_speed(*speed);
                }
            }

            if ui.button(icons::FASTER).on_hover_text("Faster (])").clicked() {
                clock.faster();
            }

            ui.label(egui::RichText::new(format!("{} d/s", clock.speed)).monospace());

            ui.separator();

            if ui
                .button(icons::RESET)
                .on_hover_text("Reset simulation (R)")
                .clicked()
            {
                clock.reset();
            }
        });
    });
}
