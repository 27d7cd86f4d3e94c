//! JSON-Import der POI- und Pfad-Dokumente.
//!
//! Beide Dokumente sind flache JSON-Arrays. Sie werden einmal beim Start
//! parallel gelesen; schlägt eines fehl, gilt der ganze Ladevorgang als
//! gescheitert.

pub mod loader;
pub mod parser;

pub use loader::{load_atlas_data, AtlasData, DataDocument, LoadError};
pub use parser::{parse_paths, parse_pois};
