//! Seitenleiste: Dimensionswahl, Suche und Verzeichnis.

use crate::app::directory::PATHS_HEADING;
use crate::app::{AppIntent, AppState};
use crate::core::{Dimension, PathKind};

/// Rendert die Seitenleiste und gibt erzeugte Events zurück.
pub fn render_sidebar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("directory_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading("Waystone Atlas");
            ui.add_space(4.0);

            render_dimension_selector(ui, state, &mut events);
            render_search_field(ui, state, &mut events);

            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| render_directory(ui, state, &mut events));
        });

    events
}

fn render_dimension_selector(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut selected = state.view.dimension;
    ui.horizontal(|ui| {
        ui.label("Dimension:");
        egui::ComboBox::from_id_salt("dimension_select")
            .selected_text(selected.as_str())
            .show_ui(ui, |ui| {
                for dimension in Dimension::ALL {
                    ui.selectable_value(&mut selected, dimension, dimension.as_str());
                }
            });
    });
    if selected != state.view.dimension {
        events.push(AppIntent::DimensionSelected {
            dimension: selected,
        });
    }
}

fn render_search_field(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut query = state.view.search_query.clone();
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Search name, owner, notes…")
                .desired_width(ui.available_width() - 28.0),
        );
        if response.changed() {
            events.push(AppIntent::SearchChanged {
                query: query.clone(),
            });
        }
        if ui
            .add_enabled(!query.is_empty(), egui::Button::new("✖").small())
            .clicked()
        {
            events.push(AppIntent::SearchCleared);
        }
    });
}

fn render_directory(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    if state.store.is_none() {
        ui.weak("No data loaded");
        return;
    }

    let directory = &state.view.directory;
    if directory.is_empty() {
        ui.weak("No matches");
        return;
    }

    for group in &directory.groups {
        ui.add_space(6.0);
        ui.strong(&group.heading);
        for entry in &group.entries {
            if ui.selectable_label(false, &entry.label).clicked() {
                events.push(AppIntent::PoiEntryClicked { key: entry.key });
            }
        }
    }

    if !directory.paths.is_empty() {
        ui.add_space(6.0);
        ui.strong(PATHS_HEADING);
        for entry in &directory.paths {
            let text = egui::RichText::new(&entry.label).color(kind_color(state, entry.kind));
            if ui.selectable_label(false, text).clicked() {
                events.push(AppIntent::PathEntryClicked { key: entry.key });
            }
        }
    }
}

fn kind_color(state: &AppState, kind: PathKind) -> egui::Color32 {
    let [r, g, b, a] = match kind {
        PathKind::IceRail => state.options.ice_rail_color,
        PathKind::NetherPath => state.options.nether_path_color,
    };
    egui::Rgba::from_rgba_unmultiplied(r, g, b, a).into()
}
