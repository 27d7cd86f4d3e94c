use super::{UiState, ViewState};
use crate::app::store::AtlasStore;
use crate::app::CommandLog;
use crate::shared::AtlasOptions;
use std::sync::Arc;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Geladene Daten (None = noch nicht geladen oder Laden fehlgeschlagen)
    pub store: Option<Arc<AtlasStore>>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: AtlasOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(AtlasOptions::default())
    }

    /// Erstellt einen leeren App-State; die Start-Dimension kommt aus den Optionen.
    pub fn with_options(options: AtlasOptions) -> Self {
        Self {
            store: None,
            view: ViewState::new(options.default_dimension),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Anzahl geladener POIs (alle Dimensionen)
    pub fn poi_count(&self) -> usize {
        self.store.as_ref().map_or(0, |s| s.poi_count())
    }

    /// Anzahl geladener Pfade (alle Dimensionen)
    pub fn path_count(&self) -> usize {
        self.store.as_ref().map_or(0, |s| s.path_count())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
