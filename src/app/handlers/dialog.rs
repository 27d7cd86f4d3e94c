//! Handler für Statusmeldungen und Anwendungssteuerung.

use crate::app::AppState;

/// Entfernt die aktuelle Statusnachricht.
pub fn clear_status(state: &mut AppState) {
    state.ui.status_message = None;
}

/// Fordert das kontrollierte Beenden an.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
