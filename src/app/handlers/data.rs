//! Handler für das Startladen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::data::AtlasData;

/// Übernimmt geladene Daten.
pub fn apply_loaded(state: &mut AppState, data: AtlasData) {
    use_cases::data_load::apply_loaded_data(state, data);
}

/// Hält einen Ladefehler fest.
pub fn record_failure(state: &mut AppState, message: String) {
    use_cases::data_load::record_load_failure(state, message);
}
