//! Use-Cases für das Startladen.

use crate::app::store::AtlasStore;
use crate::app::AppState;
use crate::data::AtlasData;
use std::sync::Arc;

/// Übernimmt die geladenen Daten und stößt Karte und Verzeichnis an.
pub fn apply_loaded_data(state: &mut AppState, data: AtlasData) {
    let store = AtlasStore::new(data);
    log::info!(
        "Daten übernommen: {} POIs, {} Pfade",
        store.poi_count(),
        store.path_count()
    );

    state.ui.status_message = (store.duplicate_keys() > 0).then(|| {
        format!(
            "{} POIs mit doppelten Koordinaten (x, z)",
            store.duplicate_keys()
        )
    });
    state.ui.load_error = None;
    state.store = Some(Arc::new(store));
    state.view.pending_focus = None;
    state.view.map_dirty = true;
    super::directory::refresh(state);
}

/// Hält einen Ladefehler fest. Es bleibt kein Teilzustand zurück.
pub fn record_load_failure(state: &mut AppState, message: String) {
    log::error!("Start abgebrochen: {}", message);
    state.store = None;
    state.ui.load_error = Some(message);
    state.view.pending_focus = None;
    state.view.map_dirty = true;
    super::directory::refresh(state);
}
