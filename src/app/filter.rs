//! Filter- und Suchlogik.
//!
//! Reihenfolge: zuerst Dimension, dann Suche. Die Suche wirkt nur auf das
//! Verzeichnis, nie auf die Karte.

use super::store::AtlasStore;
use crate::core::{Dimension, PathKey, PathSegment, Poi};

/// Alle POIs der gewählten Dimension (normalisierte Kopien).
pub fn visible_pois(store: &AtlasStore, dimension: Dimension) -> Vec<Poi> {
    store
        .pois()
        .iter()
        .map(Poi::from_record)
        .filter(|poi| poi.dimension == dimension)
        .collect()
}

/// Alle Pfade der gewählten Dimension mit ihrem Schlüssel.
pub fn visible_paths(store: &AtlasStore, dimension: Dimension) -> Vec<(PathKey, PathSegment)> {
    store
        .paths()
        .iter()
        .enumerate()
        .map(|(i, record)| (PathKey(i), PathSegment::from_record(record)))
        .filter(|(_, segment)| segment.dimension == dimension)
        .collect()
}

/// Entität mit durchsuchbaren Textfeldern.
pub trait Searchable {
    /// Felder, gegen die die Suche prüft. Fehlende Felder entfallen.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Poi {
    fn search_fields(&self) -> Vec<&str> {
        [&self.name, &self.owner, &self.notes]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .collect()
    }
}

impl Searchable for PathSegment {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = [&self.name, &self.notes, &self.raw_kind]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .collect();
        fields.push(self.kind.label());
        fields.push(self.kind.as_str());
        fields
    }
}

/// Leere Suche → immer `true`, sonst Teilstring ohne Groß-/Kleinschreibung.
pub fn passes_search(entity: &impl Searchable, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    entity
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
