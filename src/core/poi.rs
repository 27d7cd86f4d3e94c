//! Points of Interest: Rohdatensatz aus `pois.json` und normalisierte Sicht.

use super::category::{normalize_category, Category};
use super::coords::{to_plot_coords, PlotPoint};
use super::dimension::{normalize_dimension, Dimension};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Platzhalter für POIs und Pfade ohne Namen.
pub const UNNAMED: &str = "(Unnamed)";

/// POI so, wie er in der Datendatei steht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoiRecord {
    /// Anzeigename
    #[serde(default)]
    pub name: Option<String>,
    /// Freitext-Kategorie (wird normalisiert)
    #[serde(default)]
    pub category: Option<String>,
    /// Welt-X
    pub x: i64,
    /// Welt-Y (Höhe, nur zur Anzeige)
    pub y: i64,
    /// Welt-Z
    pub z: i64,
    /// Freitext-Dimension (wird normalisiert)
    #[serde(default)]
    pub dimension: Option<String>,
    /// Besitzer
    #[serde(default)]
    pub owner: Option<String>,
    /// Notizen
    #[serde(default)]
    pub notes: Option<String>,
}

/// Identität eines POI für UI-Lookups: das Koordinatenpaar `(x, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoiKey {
    /// Welt-X
    pub x: i64,
    /// Welt-Z
    pub z: i64,
}

impl fmt::Display for PoiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.z)
    }
}

/// Normalisierte, abgeleitete Kopie eines [`PoiRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    pub name: Option<String>,
    pub category: Category,
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub dimension: Dimension,
    pub owner: Option<String>,
    pub notes: Option<String>,
}

impl Poi {
    /// Normalisiert Kategorie und Dimension eines Rohdatensatzes.
    pub fn from_record(record: &PoiRecord) -> Self {
        Self {
            name: record.name.clone(),
            category: normalize_category(record.category.as_deref()),
            x: record.x,
            y: record.y,
            z: record.z,
            dimension: normalize_dimension(record.dimension.as_deref()),
            owner: record.owner.clone(),
            notes: record.notes.clone(),
        }
    }

    pub fn key(&self) -> PoiKey {
        PoiKey {
            x: self.x,
            z: self.z,
        }
    }

    /// Position im Plot-Koordinatensystem.
    pub fn plot_point(&self) -> PlotPoint {
        to_plot_coords(self.x as f64, self.z as f64)
    }

    /// Name oder [`UNNAMED`].
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    /// Sortierschlüssel: Name in Kleinbuchstaben, fehlender Name als "".
    pub fn sort_key(&self) -> String {
        self.name.as_deref().unwrap_or_default().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, dimension: &str) -> PoiRecord {
        PoiRecord {
            name: Some("Iron Shop".into()),
            category: Some(category.into()),
            x: 10,
            y: 64,
            z: -5,
            dimension: Some(dimension.into()),
            owner: None,
            notes: None,
        }
    }

    #[test]
    fn from_record_normalizes_category_and_dimension() {
        let poi = Poi::from_record(&record("shops", " NETHER"));
        assert_eq!(poi.category, Category::Shop);
        assert_eq!(poi.dimension, Dimension::Nether);
        assert_eq!(poi.key(), PoiKey { x: 10, z: -5 });
        assert_eq!(poi.plot_point(), PlotPoint::new(5.0, 10.0));
    }

    #[test]
    fn missing_name_uses_placeholder_and_empty_sort_key() {
        let mut rec = record("base", "overworld");
        rec.name = None;
        let poi = Poi::from_record(&rec);
        assert_eq!(poi.display_name(), UNNAMED);
        assert_eq!(poi.sort_key(), "");
    }
}
