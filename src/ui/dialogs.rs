//! Modale Dialoge.

use crate::app::AppIntent;
use crate::shared::CONFIG_FILE_NAME;

/// Zeigt den Ladefehler als modales Fenster. Ohne Fehler passiert nichts.
pub fn show_load_error_dialog(ctx: &egui::Context, error: Option<&str>) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(error) = error else {
        return events;
    };

    egui::Window::new("Failed to load map data")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(egui::RichText::new(error).color(egui::Color32::LIGHT_RED));
                ui.add_space(6.0);
                ui.label(format!(
                    "Check the data directory in {} and restart.",
                    CONFIG_FILE_NAME
                ));
                ui.add_space(10.0);

                if ui.button("Quit").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });

    events
}
