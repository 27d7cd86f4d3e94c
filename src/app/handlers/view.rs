//! Handler für Dimension und Suche.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Dimension;

/// Wechselt die Dimension.
pub fn set_dimension(state: &mut AppState, dimension: Dimension) {
    use_cases::view::set_dimension(state, dimension);
}

/// Setzt den Suchtext.
pub fn set_search_query(state: &mut AppState, query: String) {
    use_cases::view::set_search_query(state, query);
}
