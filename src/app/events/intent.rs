use crate::core::{Dimension, PathKey, PoiKey};
use crate::data::AtlasData;

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Beide Datendokumente wurden erfolgreich geladen
    DataLoaded { data: AtlasData },
    /// Startladen fehlgeschlagen (Meldung inkl. Ursache)
    DataLoadFailed { message: String },
    /// Dimension im Auswahlfeld geändert
    DimensionSelected { dimension: Dimension },
    /// Suchtext geändert
    SearchChanged { query: String },
    /// Suchfeld leeren
    SearchCleared,
    /// POI-Zeile im Verzeichnis angeklickt
    PoiEntryClicked { key: PoiKey },
    /// Pfad-Zeile im Verzeichnis angeklickt
    PathEntryClicked { key: PathKey },
    /// Statusnachricht schließen
    StatusDismissed,
    /// Anwendung beenden
    ExitRequested,
}
