//! Paralleles Laden beider Datendokumente beim Start.

use super::parser::{parse_paths, parse_pois};
use crate::core::{PathRecord, PoiRecord};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Welches der beiden Eingabedokumente betroffen ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDocument {
    Pois,
    Paths,
}

impl fmt::Display for DataDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataDocument::Pois => f.write_str("POI-Dokument"),
            DataDocument::Paths => f.write_str("Pfad-Dokument"),
        }
    }
}

/// Fehler beim Laden der Startdaten. Jeder dieser Fehler bricht den Start ab.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Datei fehlt oder ist nicht lesbar
    #[error("{document} nicht lesbar ({}): {source}", .path.display())]
    Read {
        document: DataDocument,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Datei ist kein gültiges Dokument
    #[error("{document} fehlerhaft ({}): {source}", .path.display())]
    Parse {
        document: DataDocument,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Lade-Thread hat gepanikt
    #[error("Lade-Thread für {document} abgebrochen")]
    Worker { document: DataDocument },
}

impl LoadError {
    /// Das betroffene Dokument.
    pub fn document(&self) -> DataDocument {
        match self {
            LoadError::Read { document, .. }
            | LoadError::Parse { document, .. }
            | LoadError::Worker { document } => *document,
        }
    }
}

/// Ergebnis eines erfolgreichen Ladevorgangs: beide Sammlungen, unverändert.
#[derive(Debug, Clone, Default)]
pub struct AtlasData {
    pub pois: Vec<PoiRecord>,
    pub paths: Vec<PathRecord>,
}

/// Liest und parst beide Dokumente parallel und wartet auf beide.
///
/// Nur wenn beide gelingen, gibt es Daten. Bei zwei Fehlern wird der des
/// POI-Dokuments gemeldet.
pub fn load_atlas_data(poi_file: &Path, path_file: &Path) -> Result<AtlasData, LoadError> {
    let (pois, paths) = std::thread::scope(|scope| {
        let pois = scope.spawn(|| load_document(DataDocument::Pois, poi_file, parse_pois));
        let paths = scope.spawn(|| load_document(DataDocument::Paths, path_file, parse_paths));
        (
            pois.join().map_err(|_| LoadError::Worker {
                document: DataDocument::Pois,
            }),
            paths.join().map_err(|_| LoadError::Worker {
                document: DataDocument::Paths,
            }),
        )
    });

    let pois = pois??;
    let paths = paths??;

    log::info!(
        "Daten geladen: {} POIs aus {}, {} Pfade aus {}",
        pois.len(),
        poi_file.display(),
        paths.len(),
        path_file.display()
    );

    Ok(AtlasData { pois, paths })
}

fn load_document<T>(
    document: DataDocument,
    path: &Path,
    parse: fn(&str) -> Result<Vec<T>, serde_json::Error>,
) -> Result<Vec<T>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        document,
        path: path.to_path_buf(),
        source,
    })?;

    parse(&content).map_err(|source| LoadError::Parse {
        document,
        path: path.to_path_buf(),
        source,
    })
}
