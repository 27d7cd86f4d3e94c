//! Use-Cases für Verzeichnis-Klicks.
//!
//! Hier wird nur das Ziel vorgemerkt. Der Layer wird erst beim nächsten
//! Sync der Oberfläche über die Registry aufgelöst.

use crate::app::state::FocusTarget;
use crate::app::AppState;
use crate::core::{PathKey, PoiKey};
use anyhow::ensure;

/// Merkt den Sprung zu einem POI vor.
pub fn focus_poi(state: &mut AppState, key: PoiKey) -> anyhow::Result<()> {
    ensure!(state.store.is_some(), "Keine Daten geladen");
    state.view.pending_focus = Some(FocusTarget::Poi(key));
    Ok(())
}

/// Merkt den Sprung zu einem Pfad vor.
pub fn focus_path(state: &mut AppState, key: PathKey) -> anyhow::Result<()> {
    ensure!(state.store.is_some(), "Keine Daten geladen");
    state.view.pending_focus = Some(FocusTarget::Path(key));
    Ok(())
}
