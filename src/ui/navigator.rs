//! Body search and navigation panel.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::{CameraFocus, NavigateTo};
use crate::ephemeris::{Catalog, Ephemeris};
use crate::ui::icons;

/// Text typed into the search box.
#[derive(Resource, Default)]
pub struct NavigatorState {
    pub query: String,
}

/// Indices of bodies whose name contains `query` (case-insensitive), in catalog order.
///
/// An empty or blank query matches every body.
pub fn matching_bodies(catalog: &Catalog, query: &str) -> Vec<usize> {
    let query = query.trim().to_lowercase();
    catalog
        .bodies()
        .iter()
        .enumerate()
        .filter(|(_, body)| query.is_empty() || body.name.to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect()
}

/// System that renders the body list and search box.
pub fn navigator_panel(
    mut contexts: EguiContexts,
    mut state: ResMut<NavigatorState>,
    ephemeris: Res<Ephemeris>,
    focus: Res<CameraFocus>,
    mut navigate: MessageWriter<NavigateTo>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let catalog = ephemeris.catalog();

    egui::SidePanel::left("navigator")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(icons::SEARCH);
                let response = ui.text_edit_singleline(&mut state.query);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    navigate.write(NavigateTo(state.query.clone()));
                }
            });

            if let Some(current) = &focus.body {
                ui.label(format!("{} {}", icons::TARGET, current));
            }

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for index in matching_bodies(catalog, &state.query) {
                    let Some(body) = catalog.get(index) else {
                        continue;
                    };
                    let depth = catalog.depth(index);
                    ui.horizontal(|ui| {
                        ui.add_space(depth as f32 * 12.0);
                        let label = format!("{} {}", icons::body_icon(depth), body.name);
                        let selected = focus
                            .body
                            .as_deref()
                            .is_some_and(|b| b.eq_ignore_ascii_case(&body.name));
                        if ui.selectable_label(selected, label).clicked() {
                            navigate.write(NavigateTo(body.name.clone()));
                        }
                    });
                }
            });
        });
}
