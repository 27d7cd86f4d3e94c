//! Core-Domänentypen: POIs, Pfade, Kategorien, Dimensionen, Koordinaten, Kamera.

pub mod camera;
pub mod category;
pub mod coords;
pub mod dimension;
pub mod map_definition;
pub mod path_kind;
pub mod path_segment;
pub mod poi;

pub use camera::MapCamera;
pub use category::{normalize_category, Category};
pub use coords::{from_plot_coords, to_plot_coords, PlotPoint, PlotRect};
pub use dimension::{normalize_dimension, Dimension};
pub use map_definition::{MapDefinition, WorldBounds};
pub use path_kind::{normalize_path_kind, PathKind};
pub use path_segment::{PathKey, PathRecord, PathSegment, RawEndpoint, WorldXZ};
pub use poi::{Poi, PoiKey, PoiRecord, UNNAMED};
