//! Parser für `pois.json` und `paths.json`.

use crate::core::{PathRecord, PoiRecord};

/// Parst ein POI-Dokument (JSON-Array von POI-Objekten).
pub fn parse_pois(json: &str) -> Result<Vec<PoiRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parst ein Pfad-Dokument (JSON-Array von Pfad-Objekten).
///
/// Ungültige Endpunkt-Koordinaten sind kein Parse-Fehler; solche Segmente
/// werden erst beim Rendern verworfen.
pub fn parse_paths(json: &str) -> Result<Vec<PathRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests;
