use crate::app::directory::Directory;
use crate::core::{Dimension, PathKey, PoiKey};

/// Ziel eines angeforderten Kartensprungs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Poi(PoiKey),
    Path(PathKey),
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Gewählte Dimension
    pub dimension: Dimension,
    /// Aktueller Suchtext
    pub search_query: String,
    /// Zuletzt gebautes Verzeichnis (Dimension + Suche)
    pub directory: Directory,
    /// Sichtbare POIs der Dimension (ohne Suche)
    pub visible_poi_count: usize,
    /// Sichtbare Pfade der Dimension (ohne Suche)
    pub visible_path_count: usize,
    /// Signalisiert, dass die Karte neu aufgebaut werden muss
    pub map_dirty: bool,
    /// Sprung, der beim nächsten Sync ausgeführt wird
    pub pending_focus: Option<FocusTarget>,
}

impl ViewState {
    /// Erstellt den View-Zustand für eine Start-Dimension.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            ..Default::default()
        }
    }
}
