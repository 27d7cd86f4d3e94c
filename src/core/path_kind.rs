//! Pfad-Arten (Eisbahn, Netherweg).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Art eines Pfad-Segments, bestimmt dessen Darstellung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    /// Eisbahn für Boote
    IceRail,
    /// Gewöhnlicher Netherweg (Fallback)
    #[default]
    NetherPath,
}

impl PathKind {
    /// Schlüssel wie in den Daten (`ice_rail`, `nether_path`).
    pub fn as_str(self) -> &'static str {
        match self {
            PathKind::IceRail => "ice_rail",
            PathKind::NetherPath => "nether_path",
        }
    }

    /// Lesbare Bezeichnung für Popups und Verzeichnis.
    pub fn label(self) -> &'static str {
        match self {
            PathKind::IceRail => "Ice Rail",
            PathKind::NetherPath => "Nether Path",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalisiert eine frei geschriebene Pfad-Art: enthält sie "ice", ist es
/// eine Eisbahn, sonst ein Netherweg.
pub fn normalize_path_kind(raw: Option<&str>) -> PathKind {
    let lowered = raw.unwrap_or_default().trim().to_lowercase();
    if lowered.contains("ice") {
        PathKind::IceRail
    } else {
        PathKind::NetherPath
    }
}
