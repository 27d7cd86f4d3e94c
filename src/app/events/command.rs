use crate::core::{Dimension, PathKey, PoiKey};
use crate::data::AtlasData;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Geladene Daten übernehmen
    ApplyLoadedData { data: AtlasData },
    /// Ladefehler festhalten (keine Karte, kein Verzeichnis)
    RecordLoadFailure { message: String },
    /// Dimension wechseln (Karte + Verzeichnis neu)
    SetDimension { dimension: Dimension },
    /// Suchtext setzen (nur Verzeichnis neu)
    SetSearchQuery { query: String },
    /// Sprung zu einem POI vormerken
    FocusPoi { key: PoiKey },
    /// Sprung zu einem Pfad vormerken
    FocusPath { key: PathKey },
    /// Statusnachricht entfernen
    ClearStatus,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Kurzname für das Command-Log.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ApplyLoadedData { .. } => "ApplyLoadedData",
            Self::RecordLoadFailure { .. } => "RecordLoadFailure",
            Self::SetDimension { .. } => "SetDimension",
            Self::SetSearchQuery { .. } => "SetSearchQuery",
            Self::FocusPoi { .. } => "FocusPoi",
            Self::FocusPath { .. } => "FocusPath",
            Self::ClearStatus => "ClearStatus",
            Self::RequestExit => "RequestExit",
        }
    }
}
