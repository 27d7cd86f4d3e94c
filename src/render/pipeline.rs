//! Map-Render-Pipeline: baut Overlay, Pfadlinien und POI-Marker neu auf.
//!
//! Die Pipeline besitzt die Lookup-Tabellen `PoiKey → Marker` und
//! `PathKey → Linie`. Verzeichnis-Klicks lösen den Layer erst beim
//! Fokussieren auf, nie beim Aufbau der Liste.

use super::popup::{path_popup, poi_popup};
use super::registry::LayerRegistry;
use super::surface::{LayerId, LineStyle, MarkerStyle, RenderSurface};
use crate::core::{Category, MapDefinition, PathKey, PathKind, PathSegment, Poi, PoiKey};
use crate::shared::AtlasOptions;
use std::path::Path;

/// Registry für POI-Marker.
pub type MarkerRegistry = LayerRegistry<PoiKey>;
/// Registry für Pfadlinien (Solid-Durchgang).
pub type PathLineRegistry = LayerRegistry<PathKey>;

/// Zusammenfassung eines Neuaufbaus (für Logs und Tests).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebuildSummary {
    pub markers: usize,
    pub path_lines: usize,
    pub skipped_paths: usize,
}

/// Render-Pipeline mit eigenem Layer-Bestand.
#[derive(Debug, Default)]
pub struct MapPipeline {
    overlay: Option<LayerId>,
    path_layers: Vec<LayerId>,
    marker_layers: Vec<LayerId>,
    markers: MarkerRegistry,
    path_lines: PathLineRegistry,
}

impl MapPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut die komplette Karte für eine Dimension neu auf.
    ///
    /// Reihenfolge: Overlay (inkl. Einpassen und Begrenzung), Pfade, Marker.
    /// Jeder Schritt entfernt zuerst seine alten Layer.
    pub fn rebuild(
        &mut self,
        surface: &mut dyn RenderSurface,
        map: &MapDefinition,
        image: &Path,
        pois: &[Poi],
        paths: &[(PathKey, PathSegment)],
        options: &AtlasOptions,
    ) -> RebuildSummary {
        self.rebuild_overlay(surface, map, image);
        let (path_lines, skipped_paths) = self.rebuild_paths(surface, paths, options);
        let markers = self.rebuild_markers(surface, pois, options);

        let summary = RebuildSummary {
            markers,
            path_lines,
            skipped_paths,
        };
        log::info!(
            "Karte neu aufgebaut: {} Marker, {} Pfade ({} übersprungen), Bild {}",
            summary.markers,
            summary.path_lines,
            summary.skipped_paths,
            image.display()
        );
        summary
    }

    /// Entfernt alle Layer der Pipeline von der Oberfläche.
    pub fn clear(&mut self, surface: &mut dyn RenderSurface) {
        if let Some(overlay) = self.overlay.take() {
            surface.remove_layer(overlay);
        }
        self.clear_paths(surface);
        self.clear_markers(surface);
    }

    fn rebuild_overlay(&mut self, surface: &mut dyn RenderSurface, map: &MapDefinition, image: &Path) {
        if let Some(previous) = self.overlay.take() {
            surface.remove_layer(previous);
        }
        let rect = map.bounds.to_plot_rect();
        self.overlay = Some(surface.add_image_overlay(image, rect));
        surface.fit_bounds(rect);
        surface.set_max_bounds(rect);
    }

    fn clear_paths(&mut self, surface: &mut dyn RenderSurface) {
        for layer in self.path_layers.drain(..) {
            surface.remove_layer(layer);
        }
        self.path_lines.clear();
    }

    fn rebuild_paths(
        &mut self,
        surface: &mut dyn RenderSurface,
        paths: &[(PathKey, PathSegment)],
        options: &AtlasOptions,
    ) -> (usize, usize) {
        self.clear_paths(surface);

        let mut drawn = 0;
        let mut skipped = 0;
        for (key, segment) in paths {
            let Some((from, to)) = segment.plot_endpoints() else {
                log::debug!(
                    "Pfad '{}' übersprungen: ungültiger Endpunkt",
                    segment.display_name()
                );
                skipped += 1;
                continue;
            };
            let points = [from, to];
            let (glow, solid) = path_styles(segment.kind, options);

            let glow_layer = surface.add_polyline(&points, &glow);
            let solid_layer = surface.add_polyline(&points, &solid);
            surface.bind_popup(solid_layer, path_popup(segment));

            self.path_layers.push(glow_layer);
            self.path_layers.push(solid_layer);
            self.path_lines.insert(*key, solid_layer);
            drawn += 1;
        }
        (drawn, skipped)
    }

    fn clear_markers(&mut self, surface: &mut dyn RenderSurface) {
        for layer in self.marker_layers.drain(..) {
            surface.remove_layer(layer);
        }
        self.markers.clear();
    }

    fn rebuild_markers(
        &mut self,
        surface: &mut dyn RenderSurface,
        pois: &[Poi],
        options: &AtlasOptions,
    ) -> usize {
        self.clear_markers(surface);

        for poi in pois {
            let style = marker_style(&poi.category, options);
            let layer = surface.add_marker(poi.plot_point(), &style);
            surface.bind_popup(layer, poi_popup(poi));
            self.marker_layers.push(layer);
            self.markers.insert(poi.key(), layer);
        }
        pois.len()
    }

    /// Springt zum Marker eines POI und öffnet sein Popup.
    ///
    /// Der Marker wird erst jetzt in der Registry nachgeschlagen. Gibt `false`
    /// zurück, falls der Schlüssel auf der aktuellen Karte nicht existiert.
    pub fn focus_poi(&self, surface: &mut dyn RenderSurface, key: PoiKey, min_zoom: f64) -> bool {
        match self.markers.get(&key) {
            Some(layer) => focus_layer(surface, layer, min_zoom),
            None => {
                log::debug!("Kein Marker für POI {} auf der aktuellen Karte", key);
                false
            }
        }
    }

    /// Springt zur Mitte eines Pfads und öffnet sein Popup.
    pub fn focus_path(&self, surface: &mut dyn RenderSurface, key: PathKey, min_zoom: f64) -> bool {
        match self.path_lines.get(&key) {
            Some(layer) => focus_layer(surface, layer, min_zoom),
            None => {
                log::debug!("Keine Linie für Pfad #{} auf der aktuellen Karte", key.0);
                false
            }
        }
    }

    /// Registrierte POI-Marker.
    pub fn markers(&self) -> &MarkerRegistry {
        &self.markers
    }

    /// Registrierte Pfadlinien.
    pub fn path_lines(&self) -> &PathLineRegistry {
        &self.path_lines
    }
}

fn focus_layer(surface: &mut dyn RenderSurface, layer: LayerId, min_zoom: f64) -> bool {
    let Some(anchor) = surface.layer_anchor(layer) else {
        return false;
    };
    let zoom = surface.zoom().max(min_zoom);
    surface.set_view(anchor, zoom);
    surface.open_popup(layer);
    true
}

/// Marker-Stil nach Kategorie: Portal-Symbol oder gefüllter Kreis.
pub fn marker_style(category: &Category, options: &AtlasOptions) -> MarkerStyle {
    if *category == Category::Portal {
        MarkerStyle::PortalIcon {
            size: options.portal_icon_size,
            color: options.portal_icon_color,
        }
    } else {
        MarkerStyle::Circle {
            radius: options.poi_marker_radius,
            stroke: options.poi_marker_stroke,
            fill: options.poi_marker_fill,
            fill_opacity: options.poi_marker_fill_opacity,
            weight: options.poi_marker_weight,
        }
    }
}

/// Linienstile eines Pfads: (Glow, Solid).
pub fn path_styles(kind: PathKind, options: &AtlasOptions) -> (LineStyle, LineStyle) {
    let color = match kind {
        PathKind::IceRail => options.ice_rail_color,
        PathKind::NetherPath => options.nether_path_color,
    };
    let glow = LineStyle {
        color,
        weight: options.path_glow_weight,
        opacity: options.path_glow_opacity,
    };
    let solid = LineStyle {
        color,
        weight: options.path_line_weight,
        opacity: 1.0,
    };
    (glow, solid)
}
