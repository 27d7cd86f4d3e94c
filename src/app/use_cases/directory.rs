//! Use-Case: Verzeichnis aus Dimension und Suche neu aufbauen.

use crate::app::directory::{build_directory, Directory};
use crate::app::filter::{visible_paths, visible_pois};
use crate::app::AppState;

/// Baut das gecachte Verzeichnis und die Sichtbarkeits-Zähler neu.
pub fn refresh(state: &mut AppState) {
    let Some(store) = state.store.as_ref() else {
        state.view.directory = Directory::default();
        state.view.visible_poi_count = 0;
        state.view.visible_path_count = 0;
        return;
    };

    let pois = visible_pois(store, state.view.dimension);
    let paths = visible_paths(store, state.view.dimension);
    state.view.directory = build_directory(&pois, &paths, &state.view.search_query);
    state.view.visible_poi_count = pois.len();
    state.view.visible_path_count = paths.len();

    log::debug!(
        "Verzeichnis neu: {} Gruppen, {} POI-Zeilen, {} Pfad-Zeilen",
        state.view.directory.groups.len(),
        state.view.directory.poi_rows(),
        state.view.directory.paths.len()
    );
}
