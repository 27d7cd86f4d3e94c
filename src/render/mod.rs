//! Rendering: Oberflächen-Vertrag, Map-Pipeline, Popups und Oberflächen.

mod egui_surface;
mod layer_store;
pub mod pipeline;
pub mod popup;
mod recording;
pub mod registry;
pub mod surface;

pub use egui_surface::EguiMapSurface;
pub use layer_store::LayerStore;
pub use pipeline::{MapPipeline, MarkerRegistry, PathLineRegistry, RebuildSummary};
pub use popup::{escape_html, path_popup, poi_popup};
pub use recording::RecordingSurface;
pub use registry::LayerRegistry;
pub use surface::{LayerId, LayerShape, LineStyle, MarkerStyle, Popup, RenderSurface, Rgba};
