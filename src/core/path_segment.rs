//! Pfad-Segmente: gerade Verbindungen zwischen zwei Weltkoordinaten.

use super::coords::{to_plot_coords, PlotPoint};
use super::dimension::{normalize_dimension, Dimension};
use super::path_kind::{normalize_path_kind, PathKind};
use super::poi::UNNAMED;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Endpunkt wie in der Datendatei. Koordinaten werden tolerant gelesen:
/// beliebige JSON-Werte sind erlaubt, gültig sind nur endliche Zahlen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEndpoint {
    #[serde(default)]
    pub x: serde_json::Value,
    #[serde(default)]
    pub z: serde_json::Value,
}

impl RawEndpoint {
    /// Gibt den Endpunkt zurück, falls beide Koordinaten endliche Zahlen sind.
    pub fn resolve(&self) -> Option<WorldXZ> {
        Some(WorldXZ {
            x: finite_number(&self.x)?,
            z: finite_number(&self.z)?,
        })
    }
}

fn finite_number(value: &serde_json::Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}

/// Pfad-Segment so, wie es in der Datendatei steht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    #[serde(default)]
    pub name: Option<String>,
    /// Freitext-Art; ältere Dateien verwenden den Schlüssel `type`
    #[serde(default, alias = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub dimension: Option<String>,
    #[serde(default)]
    pub from: RawEndpoint,
    #[serde(default)]
    pub to: RawEndpoint,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Gültige Weltkoordinate eines Pfad-Endpunkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldXZ {
    pub x: f64,
    pub z: f64,
}

impl WorldXZ {
    pub fn plot_point(self) -> PlotPoint {
        to_plot_coords(self.x, self.z)
    }
}

impl fmt::Display for WorldXZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.z)
    }
}

/// Identität eines Pfads: Index in der geladenen Pfad-Liste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathKey(pub usize);

/// Normalisierte, abgeleitete Kopie eines [`PathRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub name: Option<String>,
    pub kind: PathKind,
    /// Ursprüngliche Art-Angabe (für die Suche)
    pub raw_kind: Option<String>,
    pub dimension: Dimension,
    /// `None`, falls eine Koordinate keine endliche Zahl ist
    pub from: Option<WorldXZ>,
    pub to: Option<WorldXZ>,
    pub notes: Option<String>,
}

impl PathSegment {
    pub fn from_record(record: &PathRecord) -> Self {
        Self {
            name: record.name.clone(),
            kind: normalize_path_kind(record.kind.as_deref()),
            raw_kind: record.kind.clone(),
            dimension: normalize_dimension(record.dimension.as_deref()),
            from: record.from.resolve(),
            to: record.to.resolve(),
            notes: record.notes.clone(),
        }
    }

    /// Beide Endpunkte in Plot-Koordinaten, oder `None` bei ungültigem Endpunkt.
    pub fn plot_endpoints(&self) -> Option<(PlotPoint, PlotPoint)> {
        Some((self.from?.plot_point(), self.to?.plot_point()))
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    pub fn sort_key(&self) -> String {
        self.name.as_deref().unwrap_or_default().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> PathRecord {
        serde_json::from_str(json).expect("Testdatensatz sollte parsebar sein")
    }

    #[test]
    fn non_numeric_endpoint_resolves_to_none() {
        let rec = parse(
            r#"{"kind":"ice","dimension":"nether","from":{"x":1,"z":2},"to":{"x":"abc","z":4}}"#,
        );
        let seg = PathSegment::from_record(&rec);
        assert_eq!(seg.from, Some(WorldXZ { x: 1.0, z: 2.0 }));
        assert_eq!(seg.to, None);
        assert!(seg.plot_endpoints().is_none());
    }

    #[test]
    fn missing_endpoint_resolves_to_none() {
        let rec = parse(r#"{"kind":"ice","from":{"x":1}}"#);
        let seg = PathSegment::from_record(&rec);
        assert!(seg.from.is_none());
        assert!(seg.to.is_none());
    }

    #[test]
    fn type_key_is_accepted_as_kind() {
        let rec = parse(r#"{"type":"Ice Rail","from":{"x":0,"z":0},"to":{"x":8,"z":-8}}"#);
        let seg = PathSegment::from_record(&rec);
        assert_eq!(seg.kind, PathKind::IceRail);
        assert_eq!(seg.raw_kind.as_deref(), Some("Ice Rail"));
        assert_eq!(seg.dimension, Dimension::Overworld);

        let (a, b) = seg.plot_endpoints().expect("Endpunkte sind gültig");
        assert_eq!(a, PlotPoint::new(0.0, 0.0));
        assert_eq!(b, PlotPoint::new(8.0, 8.0));
    }
}
