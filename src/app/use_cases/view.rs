//! Use-Cases für Dimension und Suche.

use crate::app::AppState;
use crate::core::Dimension;

/// Wechselt die Dimension: Karte und Verzeichnis werden neu aufgebaut.
pub fn set_dimension(state: &mut AppState, dimension: Dimension) {
    log::info!("Dimension: {}", dimension);
    state.view.dimension = dimension;
    state.view.pending_focus = None;
    state.view.map_dirty = true;
    super::directory::refresh(state);
}

/// Setzt den Suchtext. Die Karte bleibt unberührt.
pub fn set_search_query(state: &mut AppState, query: String) {
    state.view.search_query = query;
    super::directory::refresh(state);
}
