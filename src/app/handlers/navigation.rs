//! Handler für Sprünge aus dem Verzeichnis.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{PathKey, PoiKey};

pub fn focus_poi(state: &mut AppState, key: PoiKey) -> anyhow::Result<()> {
    use_cases::focus::focus_poi(state, key)
}

pub fn focus_path(state: &mut AppState, key: PathKey) -> anyhow::Result<()> {
    use_cases::focus::focus_path(state, key)
}
