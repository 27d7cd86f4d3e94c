//! Application Controller für zentrale Event-Verarbeitung.

use super::filter::{visible_paths, visible_pois};
use super::state::FocusTarget;
use super::{AppCommand, AppIntent, AppState};
use crate::render::{MapPipeline, RenderSurface};

/// Orchestriert UI-Events und Use-Cases auf den AppState und hält die
/// Render-Pipeline mit ihrer Layer-Registry.
#[derive(Debug, Default)]
pub struct AppController {
    pipeline: MapPipeline,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Daten ===
            AppCommand::ApplyLoadedData { data } => handlers::data::apply_loaded(state, data),
            AppCommand::RecordLoadFailure { message } => {
                handlers::data::record_failure(state, message)
            }

            // === Ansicht ===
            AppCommand::SetDimension { dimension } => {
                handlers::view::set_dimension(state, dimension)
            }
            AppCommand::SetSearchQuery { query } => handlers::view::set_search_query(state, query),

            // === Navigation ===
            AppCommand::FocusPoi { key } => handlers::navigation::focus_poi(state, key)?,
            AppCommand::FocusPath { key } => handlers::navigation::focus_path(state, key)?,

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::ClearStatus => handlers::dialog::clear_status(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Überträgt den State auf die Render-Oberfläche.
    ///
    /// Baut die Karte neu auf, falls sie als veraltet markiert ist, und führt
    /// danach einen vorgemerkten Sprung aus. Der Sprung löst seinen Layer erst
    /// hier über die Registry auf und trifft so immer den aktuellen Marker.
    pub fn sync_surface(&mut self, state: &mut AppState, surface: &mut dyn RenderSurface) {
        if state.view.map_dirty {
            state.view.map_dirty = false;
            match state.store.as_ref() {
                Some(store) => {
                    let dimension = state.view.dimension;
                    let map = state.options.map_for(dimension);
                    let image = state.options.resolve_data_path(&map.image);
                    let pois = visible_pois(store, dimension);
                    let paths = visible_paths(store, dimension);
                    self.pipeline
                        .rebuild(surface, map, &image, &pois, &paths, &state.options);
                }
                None => self.pipeline.clear(surface),
            }
        }

        if let Some(target) = state.view.pending_focus.take() {
            let min_zoom = state.options.camera_focus_min_zoom;
            let found = match target {
                FocusTarget::Poi(key) => self.pipeline.focus_poi(surface, key, min_zoom),
                FocusTarget::Path(key) => self.pipeline.focus_path(surface, key, min_zoom),
            };
            if !found {
                log::warn!("Sprungziel {:?} nicht auf der aktuellen Karte", target);
            }
        }
    }

    /// Render-Pipeline (für Statusanzeigen und Tests).
    pub fn pipeline(&self) -> &MapPipeline {
        &self.pipeline
    }
}
