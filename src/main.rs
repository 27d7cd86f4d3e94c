//! Waystone Atlas.
//!
//! Kartenansicht einer Minecraft-Welt: Weltbild, POIs und Wege je Dimension,
//! dazu ein durchsuchbares Verzeichnis. egui + glow.

use anyhow::Context;
use eframe::egui;
use waystone_atlas::render::{EguiMapSurface, RenderSurface};
use waystone_atlas::{load_atlas_data, ui, AppController, AppIntent, AppState, AtlasOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Waystone Atlas v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Waystone Atlas"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Waystone Atlas",
            options,
            Box::new(|_cc| Ok(Box::new(AtlasApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct AtlasApp {
    state: AppState,
    controller: AppController,
    surface: EguiMapSurface,
}

impl AtlasApp {
    fn new() -> Self {
        let options = load_or_create_options();
        let surface = EguiMapSurface::new(&options);

        let mut app = Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            surface,
        };

        let intent = app.load_startup_data();
        app.process_events(vec![intent]);
        app
    }

    /// Liest beide Datendokumente parallel; beide müssen gelingen.
    fn load_startup_data(&self) -> AppIntent {
        let poi_file = self.state.options.poi_file_path();
        let path_file = self.state.options.path_file_path();

        match load_atlas_data(&poi_file, &path_file).context("Kartendaten nicht ladbar") {
            Ok(data) => AppIntent::DataLoaded { data },
            Err(e) => AppIntent::DataLoadFailed {
                message: format!("{:#}", e),
            },
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_status_bar(ctx, &self.state, self.surface.zoom()));
        events.extend(ui::render_sidebar(ctx, &self.state));
        events.extend(ui::show_load_error_dialog(
            ctx,
            self.state.ui.load_error.as_deref(),
        ));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.surface.show(ui);

                if self.state.store.is_none() && self.state.ui.load_error.is_none() {
                    ui.painter().text(
                        ui.max_rect().center(),
                        egui::Align2::CENTER_CENTER,
                        "No data loaded",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

impl eframe::App for AtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Karte vor dem Zeichnen auf den State bringen
        self.controller
            .sync_surface(&mut self.state, &mut self.surface);

        let events = self.collect_ui_events(ctx);
        if !events.is_empty() {
            self.process_events(events);
            ctx.request_repaint();
        }
    }
}

/// Lädt die Optionen neben der Binary und legt beim ersten Start eine
/// Datei mit Standardwerten an.
fn load_or_create_options() -> AtlasOptions {
    let config_path = AtlasOptions::config_path();
    let options = AtlasOptions::load_from_file(&config_path);
    if !config_path.exists() {
        if let Err(e) = options.save_to_file(&config_path) {
            log::warn!("Standard-Optionen nicht gespeichert: {:#}", e);
        }
    }
    options
}
