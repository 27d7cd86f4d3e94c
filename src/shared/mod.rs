//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app`, `render` und `ui` gemeinsam lesen.

pub mod options;

pub use options::AtlasOptions;
pub use options::{CONFIG_FILE_NAME, PATH_FILE, POI_FILE};
