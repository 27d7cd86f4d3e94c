//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState};

/// Rendert die Status-Bar. `zoom` ist die aktuelle Zoom-Stufe der Karte.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, zoom: f64) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.store.is_some() {
                ui.label(format!(
                    "POIs: {} / {} | Paths: {} / {}",
                    state.view.visible_poi_count,
                    state.poi_count(),
                    state.view.visible_path_count,
                    state.path_count()
                ));
                ui.separator();
                ui.label(format!("Listed: {}", state.view.directory.poi_rows()));
            } else {
                ui.label("No data loaded");
            }

            ui.separator();
            ui.label(format!("Dimension: {}", state.view.dimension));
            ui.separator();
            ui.label(format!("Zoom: {:.1}", zoom));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
                if ui.small_button("OK").clicked() {
                    events.push(AppIntent::StatusDismissed);
                }
            }
        });
    });

    events
}
