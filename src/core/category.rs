//! POI-Kategorien, Anzeige-Reihenfolge und Normalisierung.

use std::cmp::Ordering;
use std::fmt;

/// Kategorie eines POI: sechs feste Werte plus frei benannte Zusatzkategorien.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Basis eines Spielers
    Base,
    /// Gemeinschaftsbauwerk
    CommunityFeature,
    /// Farm
    Farm,
    /// Sonstiges (auch Fallback für leere Angaben)
    Other,
    /// Netherportal
    Portal,
    /// Laden
    Shop,
    /// Unbekannte Kategorie, Originaltext (getrimmt) bleibt erhalten
    Custom(String),
}

impl Category {
    /// Feste Kategorien in Anzeige-Reihenfolge.
    pub const ORDERED: [Category; 6] = [
        Category::Base,
        Category::CommunityFeature,
        Category::Farm,
        Category::Other,
        Category::Portal,
        Category::Shop,
    ];

    /// Kanonischer Name (für Popups und Suche).
    pub fn as_str(&self) -> &str {
        match self {
            Category::Base => "Base",
            Category::CommunityFeature => "Community Feature",
            Category::Farm => "Farm",
            Category::Other => "Other",
            Category::Portal => "Portal",
            Category::Shop => "Shop",
            Category::Custom(name) => name,
        }
    }

    /// Überschrift im Verzeichnis.
    pub fn heading(&self) -> String {
        match self {
            Category::Base => "🏠 BASES".to_string(),
            Category::CommunityFeature => "🐴 COMMUNITY FEATURES".to_string(),
            Category::Farm => "🌾 FARMS".to_string(),
            Category::Other => "🪦 OTHER".to_string(),
            Category::Portal => "🔥 PORTALS".to_string(),
            Category::Shop => "🛒 SHOPS".to_string(),
            Category::Custom(name) => name.to_uppercase(),
        }
    }

    /// Position in der festen Reihenfolge, `None` für Zusatzkategorien.
    pub fn fixed_rank(&self) -> Option<usize> {
        Self::ORDERED.iter().position(|c| c == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Ord for Category {
    /// Feste Kategorien in deklarierter Reihenfolge, danach Zusatzkategorien alphabetisch.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Category::Custom(a), Category::Custom(b)) => a.cmp(b),
            (Category::Custom(_), _) => Ordering::Greater,
            (_, Category::Custom(_)) => Ordering::Less,
            _ => self.fixed_rank().cmp(&other.fixed_rank()),
        }
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Normalisiert eine frei geschriebene Kategorie.
///
/// Plural- und Schreibvarianten werden zusammengeführt, damit kleine
/// Abweichungen in den handgepflegten Daten keine Gruppen aufspalten.
pub fn normalize_category(raw: Option<&str>) -> Category {
    let trimmed = raw.unwrap_or_default().trim();
    let lowered = trimmed.to_lowercase();

    match lowered.as_str() {
        "" | "other" => Category::Other,
        "base" | "bases" => Category::Base,
        "farm" | "farms" => Category::Farm,
        "portal" | "portals" => Category::Portal,
        "shop" | "shops" => Category::Shop,
        l if l.contains("community") => Category::CommunityFeature,
        _ => Category::Custom(trimmed.to_string()),
    }
}
