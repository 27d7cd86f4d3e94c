//! Layer- und Popup-Bestand einer Render-Oberfläche.
//!
//! Beide Oberflächen (egui und Aufzeichnung) führen ihre Layer hier; sie
//! unterscheiden sich nur im Zeichnen und in der Eingabe.

use super::surface::{LayerId, LayerShape, LineStyle, MarkerStyle, Popup};
use crate::core::{PlotPoint, PlotRect};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;

/// Layer in Einfügereihenfolge, gebundene Popups und das offene Popup.
#[derive(Debug, Clone)]
pub struct LayerStore {
    layers: IndexMap<LayerId, LayerShape>,
    popups: HashMap<LayerId, Popup>,
    open_popup: Option<LayerId>,
    next_id: u64,
}

impl Default for LayerStore {
    fn default() -> Self {
        Self {
            layers: IndexMap::new(),
            popups: HashMap::new(),
            open_popup: None,
            next_id: 1,
        }
    }
}

impl LayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Layer oben an und vergibt eine neue ID.
    fn push(&mut self, layer: LayerShape) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.insert(id, layer);
        id
    }

    pub fn add_overlay(&mut self, image: &Path, rect: PlotRect) -> LayerId {
        self.push(LayerShape::Overlay {
            image: image.to_path_buf(),
            rect,
        })
    }

    pub fn add_marker(&mut self, position: PlotPoint, style: &MarkerStyle) -> LayerId {
        self.push(LayerShape::Marker {
            position,
            style: style.clone(),
        })
    }

    pub fn add_polyline(&mut self, points: &[PlotPoint], style: &LineStyle) -> LayerId {
        self.push(LayerShape::Polyline {
            points: points.to_vec(),
            style: *style,
        })
    }

    /// Entfernt Layer und Popup; ein offenes Popup des Layers wird geschlossen.
    pub fn remove(&mut self, layer: LayerId) {
        self.layers.shift_remove(&layer);
        self.popups.remove(&layer);
        if self.open_popup == Some(layer) {
            self.open_popup = None;
        }
    }

    /// Bindet ein Popup an einen existierenden Layer.
    pub fn bind_popup(&mut self, layer: LayerId, popup: Popup) {
        if self.layers.contains_key(&layer) {
            self.popups.insert(layer, popup);
        }
    }

    /// Öffnet das Popup eines Layers, falls eines gebunden ist.
    pub fn open_popup(&mut self, layer: LayerId) {
        if self.popups.contains_key(&layer) {
            self.open_popup = Some(layer);
        }
    }

    pub fn close_popup(&mut self) {
        self.open_popup = None;
    }

    pub fn open_popup_id(&self) -> Option<LayerId> {
        self.open_popup
    }

    pub fn anchor(&self, layer: LayerId) -> Option<PlotPoint> {
        self.layers.get(&layer)?.anchor()
    }

    pub fn get(&self, layer: LayerId) -> Option<&LayerShape> {
        self.layers.get(&layer)
    }

    pub fn popup(&self, layer: LayerId) -> Option<&Popup> {
        self.popups.get(&layer)
    }

    pub fn has_popup(&self, layer: LayerId) -> bool {
        self.popups.contains_key(&layer)
    }

    /// Layer in Einfügereihenfolge (unterster zuerst).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&LayerId, &LayerShape)> {
        self.layers.iter()
    }

    pub fn ids(&self) -> Vec<LayerId> {
        self.layers.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(store: &mut LayerStore, row: f64) -> LayerId {
        store.add_marker(
            PlotPoint::new(row, 0.0),
            &MarkerStyle::PortalIcon {
                size: 14.0,
                color: [1.0; 4],
            },
        )
    }

    #[test]
    fn ids_are_unique_and_ordered() {
        let mut store = LayerStore::new();
        let a = add(&mut store, 1.0);
        let b = add(&mut store, 2.0);
        store.remove(a);
        let c = add(&mut store, 3.0);

        assert_ne!(a, c);
        assert_eq!(store.ids(), vec![b, c]);
        assert_eq!(store.anchor(c), Some(PlotPoint::new(3.0, 0.0)));
    }

    #[test]
    fn popup_requires_existing_layer_and_closes_on_remove() {
        let mut store = LayerStore::new();
        let layer = add(&mut store, 0.0);

        store.bind_popup(LayerId(999), Popup::default());
        assert!(!store.has_popup(LayerId(999)));

        store.open_popup(layer);
        assert_eq!(store.open_popup_id(), None);

        store.bind_popup(layer, Popup::default());
        store.open_popup(layer);
        assert_eq!(store.open_popup_id(), Some(layer));

        store.remove(layer);
        assert_eq!(store.open_popup_id(), None);
        assert!(store.popup(layer).is_none());
        assert!(store.is_empty());
    }
}
