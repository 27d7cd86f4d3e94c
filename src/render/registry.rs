//! Lookup-Tabelle von Entitäts-Schlüssel auf den aktuell gezeichneten Layer.
//!
//! Gehört der Render-Pipeline, nicht den Daten. Wird bei jedem Neuaufbau
//! geleert und neu befüllt, damit Verzeichnis-Klicks immer den Layer treffen,
//! der gerade auf der Karte liegt.

use super::surface::LayerId;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Schlüssel → Layer. Bei Kollision gewinnt der zuletzt registrierte Layer.
#[derive(Debug, Clone)]
pub struct LayerRegistry<K> {
    entries: HashMap<K, LayerId>,
}

impl<K> Default for LayerRegistry<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash + Debug> LayerRegistry<K> {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Layer und gibt einen verdrängten Layer zurück.
    pub fn insert(&mut self, key: K, layer: LayerId) -> Option<LayerId> {
        let previous = self.entries.insert(key, layer);
        if let Some(prev) = previous {
            log::warn!(
                "Schlüssel {:?} doppelt vergeben: Layer {:?} ersetzt {:?}",
                key,
                layer,
                prev
            );
        }
        previous
    }

    /// Sucht den aktuellen Layer eines Schlüssels.
    pub fn get(&self, key: &K) -> Option<LayerId> {
        self.entries.get(key).copied()
    }

    /// Entfernt alle Einträge.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
