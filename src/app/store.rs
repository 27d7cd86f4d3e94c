//! Datenbestand der Sitzung: die beiden geladenen Sammlungen.
//!
//! Nach dem Laden unveränderlich. Gefilterte Sichten werden immer als
//! abgeleitete Kopien erzeugt (siehe `filter`).

use crate::core::{normalize_dimension, Dimension, PathRecord, PoiKey, PoiRecord};
use crate::data::AtlasData;
use std::collections::HashSet;

/// Geladene POIs und Pfade.
#[derive(Debug, Clone, Default)]
pub struct AtlasStore {
    pois: Vec<PoiRecord>,
    paths: Vec<PathRecord>,
    duplicate_keys: usize,
}

impl AtlasStore {
    /// Übernimmt die geladenen Daten und zählt doppelte Koordinaten-Schlüssel.
    pub fn new(data: AtlasData) -> Self {
        let duplicate_keys = count_duplicate_keys(&data.pois);
        if duplicate_keys > 0 {
            log::warn!(
                "{} POIs teilen sich Koordinaten (x, z) mit einem anderen POI derselben Dimension; der zuletzt gezeichnete Marker gewinnt",
                duplicate_keys
            );
        }
        Self {
            pois: data.pois,
            paths: data.paths,
            duplicate_keys,
        }
    }

    pub fn pois(&self) -> &[PoiRecord] {
        &self.pois
    }

    pub fn paths(&self) -> &[PathRecord] {
        &self.paths
    }

    pub fn poi_count(&self) -> usize {
        self.pois.len()
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Anzahl POIs, deren `(x, z)` innerhalb ihrer Dimension schon vergeben ist.
    pub fn duplicate_keys(&self) -> usize {
        self.duplicate_keys
    }
}

fn count_duplicate_keys(pois: &[PoiRecord]) -> usize {
    let mut seen: HashSet<(Dimension, PoiKey)> = HashSet::with_capacity(pois.len());
    pois.iter()
        .filter(|p| {
            let dimension = normalize_dimension(p.dimension.as_deref());
            !seen.insert((dimension, PoiKey { x: p.x, z: p.z }))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(x: i64, z: i64, dimension: &str) -> PoiRecord {
        PoiRecord {
            name: None,
            category: None,
            x,
            y: 64,
            z,
            dimension: Some(dimension.into()),
            owner: None,
            notes: None,
        }
    }

    #[test]
    fn duplicates_are_counted_per_dimension() {
        let store = AtlasStore::new(AtlasData {
            pois: vec![
                record(1, 1, "overworld"),
                record(1, 1, "Overworld"),
                record(1, 1, "nether"),
                record(2, 1, "overworld"),
            ],
            paths: Vec::new(),
        });
        assert_eq!(store.duplicate_keys(), 1);
        assert_eq!(store.poi_count(), 4);
    }
}
