//! Render-Oberfläche ohne Ausgabe: merkt sich Layer, Popups und Sicht.
//!
//! Für Tests und den Headless-Betrieb der Pipeline.

use super::layer_store::LayerStore;
use super::surface::{LayerId, LayerShape, LineStyle, MarkerStyle, Popup, RenderSurface};
use crate::core::{MapCamera, PlotPoint, PlotRect};
use glam::DVec2;
use std::path::Path;

/// Aufzeichnende Render-Oberfläche mit echter Kamera-Logik.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    layers: LayerStore,
    camera: MapCamera,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer in Einfügereihenfolge.
    pub fn layers(&self) -> impl Iterator<Item = (&LayerId, &LayerShape)> {
        self.layers.iter()
    }

    pub fn layer(&self, id: LayerId) -> Option<&LayerShape> {
        self.layers.get(id)
    }

    pub fn popup(&self, id: LayerId) -> Option<&Popup> {
        self.layers.popup(id)
    }

    pub fn overlay_count(&self) -> usize {
        self.count(|l| matches!(l, LayerShape::Overlay { .. }))
    }

    pub fn marker_count(&self) -> usize {
        self.count(|l| matches!(l, LayerShape::Marker { .. }))
    }

    pub fn polyline_count(&self) -> usize {
        self.count(|l| matches!(l, LayerShape::Polyline { .. }))
    }

    fn count(&self, predicate: impl Fn(&LayerShape) -> bool) -> usize {
        self.layers.iter().filter(|(_, l)| predicate(*l)).count()
    }

    /// Titel aller Marker-Popups in Einfügereihenfolge.
    pub fn marker_titles(&self) -> Vec<String> {
        self.layers
            .iter()
            .filter(|(_, l)| matches!(l, LayerShape::Marker { .. }))
            .filter_map(|(id, _)| self.layers.popup(*id).map(|p| p.title.clone()))
            .collect()
    }

    /// Bild des aktuellen Overlays.
    pub fn overlay_image(&self) -> Option<&Path> {
        self.layers.iter().find_map(|(_, l)| match l {
            LayerShape::Overlay { image, .. } => Some(image.as_path()),
            _ => None,
        })
    }

    /// Plot-Rechteck des aktuellen Overlays.
    pub fn overlay_rect(&self) -> Option<PlotRect> {
        self.layers.iter().find_map(|(_, l)| match l {
            LayerShape::Overlay { rect, .. } => Some(*rect),
            _ => None,
        })
    }

    /// Titel des geöffneten Popups.
    pub fn open_popup_title(&self) -> Option<String> {
        let id = self.layers.open_popup_id()?;
        self.layers.popup(id).map(|p| p.title.clone())
    }

    /// Aktueller Mittelpunkt und Zoom.
    pub fn view(&self) -> (PlotPoint, f64) {
        (self.camera.center_point(), self.camera.zoom)
    }

    pub fn max_bounds(&self) -> Option<PlotRect> {
        self.camera.max_bounds
    }

    /// Setzt die simulierte Viewport-Größe, wie es der Canvas beim Zeichnen tut.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.camera.set_viewport_size(DVec2::new(width, height));
    }
}

impl RenderSurface for RecordingSurface {
    fn add_image_overlay(&mut self, image: &Path, rect: PlotRect) -> LayerId {
        self.layers.add_overlay(image, rect)
    }

    fn add_marker(&mut self, position: PlotPoint, style: &MarkerStyle) -> LayerId {
        self.layers.add_marker(position, style)
    }

    fn add_polyline(&mut self, points: &[PlotPoint], style: &LineStyle) -> LayerId {
        self.layers.add_polyline(points, style)
    }

    fn remove_layer(&mut self, layer: LayerId) {
        self.layers.remove(layer);
    }

    fn bind_popup(&mut self, layer: LayerId, popup: Popup) {
        self.layers.bind_popup(layer, popup);
    }

    fn open_popup(&mut self, layer: LayerId) {
        self.layers.open_popup(layer);
    }

    fn layer_anchor(&self, layer: LayerId) -> Option<PlotPoint> {
        self.layers.anchor(layer)
    }

    fn fit_bounds(&mut self, rect: PlotRect) {
        self.camera.fit_bounds(rect);
    }

    fn set_max_bounds(&mut self, rect: PlotRect) {
        self.camera.set_max_bounds(rect);
    }

    fn set_view(&mut self, center: PlotPoint, zoom: f64) {
        self.camera.set_view(center, zoom);
    }

    fn zoom(&self) -> f64 {
        self.camera.zoom
    }
}
