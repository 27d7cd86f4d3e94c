//! Vertrag zur Render-Oberfläche (Kartenbibliothek).
//!
//! Die Oberfläche verwaltet Layer (Bild-Overlay, Marker, Linien), Popups und
//! die Kamera. Die Pipeline spricht sie nur über diesen Trait an.

use crate::core::{PlotPoint, PlotRect};
use std::path::{Path, PathBuf};

/// Handle eines Layers auf der Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u64);

/// Farbe als RGBA (0.0..=1.0).
pub type Rgba = [f32; 4];

/// Darstellung eines Punkt-Markers.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerStyle {
    /// Gefüllter Kreis (Standard für POIs)
    Circle {
        /// Radius in Pixeln
        radius: f32,
        stroke: Rgba,
        fill: Rgba,
        fill_opacity: f32,
        /// Randbreite in Pixeln
        weight: f32,
    },
    /// Eigenes Symbol für Netherportale
    PortalIcon {
        /// Kantenlänge in Pixeln
        size: f32,
        color: Rgba,
    },
}

/// Darstellung einer Linie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Rgba,
    /// Breite in Pixeln
    pub weight: f32,
    pub opacity: f32,
}

/// Popup-Inhalt: HTML-Fragment plus Klartext für Oberflächen ohne HTML.
///
/// Beide Fassungen stammen aus denselben Feldern; Benutzertext im HTML ist
/// escaped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Popup {
    pub html: String,
    pub title: String,
    pub lines: Vec<String>,
}

/// Geometrie eines Layers, wie ihn eine Oberfläche speichert.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerShape {
    Overlay { image: PathBuf, rect: PlotRect },
    Marker { position: PlotPoint, style: MarkerStyle },
    Polyline { points: Vec<PlotPoint>, style: LineStyle },
}

impl LayerShape {
    /// Position für Fokus und Popup: Marker-Position, Linienmitte
    /// (erster/letzter Punkt) oder Overlay-Mitte.
    pub fn anchor(&self) -> Option<PlotPoint> {
        match self {
            Self::Overlay { rect, .. } => Some(rect.center()),
            Self::Marker { position, .. } => Some(*position),
            Self::Polyline { points, .. } => {
                let first = points.first()?;
                let last = points.last()?;
                Some(first.midpoint(*last))
            }
        }
    }
}

/// Fähigkeiten der Kartenbibliothek, die die Render-Pipeline nutzt.
pub trait RenderSurface {
    /// Legt ein Bild über das Rechteck `rect`.
    fn add_image_overlay(&mut self, image: &Path, rect: PlotRect) -> LayerId;

    /// Fügt einen Punkt-Marker hinzu.
    fn add_marker(&mut self, position: PlotPoint, style: &MarkerStyle) -> LayerId;

    /// Fügt eine Linie durch `points` hinzu.
    fn add_polyline(&mut self, points: &[PlotPoint], style: &LineStyle) -> LayerId;

    /// Entfernt einen Layer samt Popup. Unbekannte IDs werden ignoriert.
    fn remove_layer(&mut self, layer: LayerId);

    /// Bindet ein Popup an einen Layer (ersetzt ein vorhandenes).
    fn bind_popup(&mut self, layer: LayerId, popup: Popup);

    /// Öffnet das gebundene Popup eines Layers.
    fn open_popup(&mut self, layer: LayerId);

    /// Aktuelle Position eines Layers: Marker-Position bzw. Mitte zwischen
    /// erstem und letztem Linienpunkt. `None` für unbekannte Layer.
    fn layer_anchor(&self, layer: LayerId) -> Option<PlotPoint>;

    /// Passt die Sicht so an, dass `rect` vollständig sichtbar ist.
    fn fit_bounds(&mut self, rect: PlotRect);

    /// Begrenzt künftiges Verschieben auf `rect`.
    fn set_max_bounds(&mut self, rect: PlotRect);

    /// Setzt Sichtmittelpunkt und Zoom-Stufe.
    fn set_view(&mut self, center: PlotPoint, zoom: f64);

    /// Aktuelle Zoom-Stufe.
    fn zoom(&self) -> f64;
}
