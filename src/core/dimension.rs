//! Welt-Dimensionen (Overworld, Nether) und deren Normalisierung.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Eine der beiden unterstützten Welt-Ebenen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Oberwelt (Standard)
    #[default]
    Overworld,
    /// Nether
    Nether,
}

impl Dimension {
    /// Alle Dimensionen in Auswahl-Reihenfolge.
    pub const ALL: [Dimension; 2] = [Dimension::Overworld, Dimension::Nether];

    /// Kanonischer Anzeigename.
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Overworld => "Overworld",
            Dimension::Nether => "Nether",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalisiert einen frei geschriebenen Dimensionsnamen.
///
/// Alles, was (getrimmt, case-insensitiv) mit "nether" beginnt, ist Nether.
/// Leere, fehlende und unbekannte Werte fallen auf Overworld zurück.
pub fn normalize_dimension(raw: Option<&str>) -> Dimension {
    let lowered = raw.unwrap_or_default().trim().to_lowercase();
    if lowered.starts_with("nether") {
        Dimension::Nether
    } else {
        Dimension::Overworld
    }
}
