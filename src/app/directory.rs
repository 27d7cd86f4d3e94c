//! Verzeichnis der Seitenleiste: gruppierte, sortierte Zeilen.
//!
//! Zeilen tragen nur Schlüssel. Der zugehörige Layer wird erst beim Klick
//! über die Registry der Pipeline aufgelöst.

use super::filter::passes_search;
use crate::core::{Category, PathKey, PathKind, PathSegment, Poi, PoiKey};
use std::collections::BTreeMap;

/// Überschrift des Pfad-Abschnitts.
pub const PATHS_HEADING: &str = "🛤 PATHS";

/// Eine POI-Zeile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub key: PoiKey,
    /// Angezeigter Text, z.B. `– Iron Shop`
    pub label: String,
}

/// Eine Kategorie-Gruppe mit Überschrift.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryGroup {
    pub category: Category,
    pub heading: String,
    pub entries: Vec<DirectoryEntry>,
}

/// Eine Pfad-Zeile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub key: PathKey,
    pub kind: PathKind,
    pub label: String,
}

/// Komplettes Verzeichnis (Kategorien, danach Pfade).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub groups: Vec<DirectoryGroup>,
    pub paths: Vec<PathEntry>,
}

impl Directory {
    /// Anzahl aller POI-Zeilen.
    pub fn poi_rows(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.paths.is_empty()
    }
}

/// Baut das Verzeichnis aus den sichtbaren Entitäten und der Suche.
///
/// Feste Kategorien erscheinen in ihrer Reihenfolge, eigene Kategorien danach
/// alphabetisch; leere Gruppen entfallen. Innerhalb einer Gruppe wird nach
/// Namen ohne Groß-/Kleinschreibung sortiert.
pub fn build_directory(pois: &[Poi], paths: &[(PathKey, PathSegment)], query: &str) -> Directory {
    let mut grouped: BTreeMap<&Category, Vec<&Poi>> = BTreeMap::new();
    for poi in pois.iter().filter(|p| passes_search(*p, query)) {
        grouped.entry(&poi.category).or_default().push(poi);
    }

    let groups = grouped
        .into_iter()
        .map(|(category, mut members)| {
            members.sort_by_cached_key(|p| p.sort_key());
            DirectoryGroup {
                category: category.clone(),
                heading: category.heading(),
                entries: members
                    .into_iter()
                    .map(|p| DirectoryEntry {
                        key: p.key(),
                        label: format!("– {}", p.display_name()),
                    })
                    .collect(),
            }
        })
        .collect();

    let mut visible_paths: Vec<&(PathKey, PathSegment)> = paths
        .iter()
        .filter(|(_, s)| s.plot_endpoints().is_some() && passes_search(s, query))
        .collect();
    visible_paths.sort_by_cached_key(|(_, s)| s.sort_key());

    let paths = visible_paths
        .into_iter()
        .map(|(key, segment)| PathEntry {
            key: *key,
            kind: segment.kind,
            label: format!("– {} ({})", segment.display_name(), segment.kind.label()),
        })
        .collect();

    Directory { groups, paths }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{normalize_category, Dimension, WorldXZ};

    fn poi(name: Option<&str>, category: &str, x: i64) -> Poi {
        Poi {
            name: name.map(Into::into),
            category: normalize_category(Some(category)),
            x,
            y: 64,
            z: 0,
            dimension: Dimension::Overworld,
            owner: None,
            notes: None,
        }
    }

    fn headings(directory: &Directory) -> Vec<&str> {
        directory.groups.iter().map(|g| g.heading.as_str()).collect()
    }

    #[test]
    fn groups_follow_fixed_order_then_custom_alphabetically() {
        let pois = vec![
            poi(Some("Stable"), "Stable", 1),
            poi(Some("Iron Shop"), "shop", 2),
            poi(Some("Spawn Portal"), "portal", 3),
            poi(Some("Ruins"), "", 4),
            poi(Some("Home"), "bases", 5),
            poi(Some("Melons"), "Farm", 6),
            poi(Some("Aviary"), "Aviary", 7),
        ];

        let directory = build_directory(&pois, &[], "");

        assert_eq!(
            headings(&directory),
            vec![
                "🏠 BASES",
                "🌾 FARMS",
                "🪦 OTHER",
                "🔥 PORTALS",
                "🛒 SHOPS",
                "AVIARY",
                "STABLE"
            ]
        );
    }

    #[test]
    fn members_sorted_case_insensitively_missing_name_first() {
        let pois = vec![
            poi(Some("zebra"), "farm", 1),
            poi(Some("Apple"), "farm", 2),
            poi(None, "farm", 3),
            poi(Some("banana"), "farm", 4),
        ];

        let directory = build_directory(&pois, &[], "");
        let labels: Vec<_> = directory.groups[0]
            .entries
            .iter()
            .map(|e| e.label.as_str())
            .collect();

        assert_eq!(
            labels,
            vec!["– (Unnamed)", "– Apple", "– banana", "– zebra"]
        );
    }

    #[test]
    fn search_drops_empty_groups() {
        let pois = vec![
            poi(Some("Iron Shop"), "shop", 1),
            poi(Some("Home"), "base", 2),
        ];

        let directory = build_directory(&pois, &[], "iron");

        assert_eq!(headings(&directory), vec!["🛒 SHOPS"]);
        assert_eq!(directory.poi_rows(), 1);
        assert_eq!(directory.groups[0].entries[0].key, PoiKey { x: 1, z: 0 });
    }

    #[test]
    fn paths_section_lists_drawable_paths_by_name() {
        let segment = |name: &str, to: Option<WorldXZ>| PathSegment {
            name: Some(name.into()),
            kind: PathKind::NetherPath,
            raw_kind: None,
            dimension: Dimension::Overworld,
            from: Some(WorldXZ { x: 0.0, z: 0.0 }),
            to,
            notes: None,
        };
        let paths = vec![
            (PathKey(0), segment("West", Some(WorldXZ { x: -5.0, z: 0.0 }))),
            (PathKey(1), segment("broken", None)),
            (PathKey(2), segment("east", Some(WorldXZ { x: 5.0, z: 0.0 }))),
        ];

        let directory = build_directory(&[], &paths, "");

        let keys: Vec<_> = directory.paths.iter().map(|p| p.key).collect();
        assert_eq!(keys, vec![PathKey(2), PathKey(0)]);
        assert_eq!(directory.paths[0].label, "– east (Nether Path)");
        assert!(directory.groups.is_empty());
    }
}
