//! Waystone Atlas Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod data;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, AtlasStore, UiState, ViewState};
pub use core::{
    normalize_category, normalize_dimension, normalize_path_kind, to_plot_coords, Category,
    Dimension, MapCamera, MapDefinition, PathKind, PathSegment, PlotPoint, PlotRect, Poi, PoiKey,
    WorldBounds,
};
pub use data::{load_atlas_data, AtlasData, LoadError};
pub use render::{MapPipeline, RecordingSurface, RenderSurface};
pub use shared::AtlasOptions;
