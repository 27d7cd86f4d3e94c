//! Zentrale Konfiguration für Waystone Atlas.
//!
//! `AtlasOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Dimension, MapDefinition, WorldBounds};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Daten ───────────────────────────────────────────────────────────

/// Standard-Datenverzeichnis (relativ zum Arbeitsverzeichnis).
pub const DATA_DIR: &str = "data";
/// Dateiname des POI-Dokuments.
pub const POI_FILE: &str = "pois.json";
/// Dateiname des Pfad-Dokuments.
pub const PATH_FILE: &str = "paths.json";
/// Name der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "waystone_atlas.toml";

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimale Zoom-Stufe.
pub const CAMERA_ZOOM_MIN: f64 = -4.0;
/// Maximale Zoom-Stufe.
pub const CAMERA_ZOOM_MAX: f64 = 3.0;
/// Zoom-Stufe beim Start (vor dem ersten Einpassen).
pub const CAMERA_ZOOM_INITIAL: f64 = -2.0;
/// Mindest-Zoom beim Anspringen eines Verzeichniseintrags.
pub const CAMERA_FOCUS_MIN_ZOOM: f64 = -1.0;
/// Zoom-Schritt pro Mausrad-Raste.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 0.5;

// ── POI-Marker ──────────────────────────────────────────────────────

/// Radius der Kreis-Marker in Pixeln.
pub const POI_MARKER_RADIUS: f32 = 6.0;
/// Randfarbe der Kreis-Marker (RGBA, #7b1e2b).
pub const POI_MARKER_STROKE: [f32; 4] = [0.482, 0.118, 0.169, 1.0];
/// Füllfarbe der Kreis-Marker (RGBA, #c03a4a).
pub const POI_MARKER_FILL: [f32; 4] = [0.753, 0.227, 0.290, 1.0];
/// Deckkraft der Füllung.
pub const POI_MARKER_FILL_OPACITY: f32 = 0.9;
/// Randbreite in Pixeln.
pub const POI_MARKER_WEIGHT: f32 = 1.0;
/// Kantenlänge des Portal-Symbols in Pixeln.
pub const PORTAL_ICON_SIZE: f32 = 14.0;
/// Farbe des Portal-Symbols (RGBA: Violett).
pub const PORTAL_ICON_COLOR: [f32; 4] = [0.55, 0.2, 0.85, 1.0];

// ── Pfade ───────────────────────────────────────────────────────────

/// Farbe der Eisbahnen (RGBA: Hellblau).
pub const ICE_RAIL_COLOR: [f32; 4] = [0.31, 0.76, 0.97, 1.0];
/// Farbe der Netherwege (RGBA: Orange).
pub const NETHER_PATH_COLOR: [f32; 4] = [1.0, 0.44, 0.26, 1.0];
/// Breite des Glow-Durchgangs in Pixeln.
pub const PATH_GLOW_WEIGHT: f32 = 8.0;
/// Deckkraft des Glow-Durchgangs.
pub const PATH_GLOW_OPACITY: f32 = 0.35;
/// Breite der eigentlichen Linie in Pixeln.
pub const PATH_LINE_WEIGHT: f32 = 3.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `waystone_atlas.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasOptions {
    // ── Daten ───────────────────────────────────────────────────
    /// Verzeichnis mit Datendokumenten und Kartenbildern
    pub data_dir: String,
    /// POI-Dokument (relativ zu `data_dir`)
    pub poi_file: String,
    /// Pfad-Dokument (relativ zu `data_dir`)
    pub path_file: String,

    /// Dimension beim Start
    pub default_dimension: Dimension,

    // ── Kamera ──────────────────────────────────────────────────
    pub camera_zoom_min: f64,
    pub camera_zoom_max: f64,
    pub camera_zoom_initial: f64,
    /// Mindest-Zoom beim Anspringen eines Eintrags
    pub camera_focus_min_zoom: f64,
    pub camera_scroll_zoom_step: f64,

    // ── POI-Marker ──────────────────────────────────────────────
    pub poi_marker_radius: f32,
    pub poi_marker_stroke: [f32; 4],
    pub poi_marker_fill: [f32; 4],
    pub poi_marker_fill_opacity: f32,
    pub poi_marker_weight: f32,
    pub portal_icon_size: f32,
    pub portal_icon_color: [f32; 4],

    // ── Pfade ───────────────────────────────────────────────────
    pub ice_rail_color: [f32; 4],
    pub nether_path_color: [f32; 4],
    pub path_glow_weight: f32,
    pub path_glow_opacity: f32,
    pub path_line_weight: f32,

    // ── Karten (Tabellen zuletzt) ───────────────────────────────
    /// Kartenbild der Oberwelt
    pub overworld_map: MapDefinition,
    /// Kartenbild des Nethers
    pub nether_map: MapDefinition,
}

impl Default for AtlasOptions {
    fn default() -> Self {
        Self {
            data_dir: DATA_DIR.to_string(),
            poi_file: POI_FILE.to_string(),
            path_file: PATH_FILE.to_string(),

            default_dimension: Dimension::Overworld,
            overworld_map: MapDefinition {
                image: "world.jpg".to_string(),
                bounds: WorldBounds::OVERWORLD,
            },
            nether_map: MapDefinition {
                image: "nether.jpg".to_string(),
                bounds: WorldBounds::OVERWORLD.scaled(1.0 / 8.0),
            },

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_initial: CAMERA_ZOOM_INITIAL,
            camera_focus_min_zoom: CAMERA_FOCUS_MIN_ZOOM,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            poi_marker_radius: POI_MARKER_RADIUS,
            poi_marker_stroke: POI_MARKER_STROKE,
            poi_marker_fill: POI_MARKER_FILL,
            poi_marker_fill_opacity: POI_MARKER_FILL_OPACITY,
            poi_marker_weight: POI_MARKER_WEIGHT,
            portal_icon_size: PORTAL_ICON_SIZE,
            portal_icon_color: PORTAL_ICON_COLOR,

            ice_rail_color: ICE_RAIL_COLOR,
            nether_path_color: NETHER_PATH_COLOR,
            path_glow_weight: PATH_GLOW_WEIGHT,
            path_glow_opacity: PATH_GLOW_OPACITY,
            path_line_weight: PATH_LINE_WEIGHT,
        }
    }
}

impl AtlasOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.with_valid_camera()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt unbrauchbare Kamera-Werte durch die Standardwerte.
    ///
    /// Zoomgrenzen müssen endlich sein und `min <= max` erfüllen, sonst
    /// bricht das Begrenzen der Zoomstufe ab.
    pub fn with_valid_camera(mut self) -> Self {
        let limits_valid = self.camera_zoom_min.is_finite()
            && self.camera_zoom_max.is_finite()
            && self.camera_zoom_min <= self.camera_zoom_max;
        if !limits_valid {
            log::warn!(
                "Ungültige Zoomgrenzen ({} .. {}), verwende Standardwerte",
                self.camera_zoom_min,
                self.camera_zoom_max
            );
            self.camera_zoom_min = CAMERA_ZOOM_MIN;
            self.camera_zoom_max = CAMERA_ZOOM_MAX;
        }

        if !self.camera_zoom_initial.is_finite() {
            log::warn!("Ungültiger Start-Zoom, verwende Standardwert");
            self.camera_zoom_initial = CAMERA_ZOOM_INITIAL;
        }
        if !self.camera_focus_min_zoom.is_finite() {
            log::warn!("Ungültiger Mindest-Zoom für Sprünge, verwende Standardwert");
            self.camera_focus_min_zoom = CAMERA_FOCUS_MIN_ZOOM;
        }
        if !self.camera_scroll_zoom_step.is_finite() {
            log::warn!("Ungültiger Mausrad-Zoomschritt, verwende Standardwert");
            self.camera_scroll_zoom_step = CAMERA_SCROLL_ZOOM_STEP;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("waystone_atlas"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Kartendefinition der gewählten Dimension.
    pub fn map_for(&self, dimension: Dimension) -> &MapDefinition {
        match dimension {
            Dimension::Overworld => &self.overworld_map,
            Dimension::Nether => &self.nether_map,
        }
    }

    /// Löst einen Pfad relativ zum Datenverzeichnis auf (absolute Pfade bleiben).
    pub fn resolve_data_path(&self, file: &str) -> PathBuf {
        Path::new(&self.data_dir).join(file)
    }

    /// Vollständiger Pfad zum POI-Dokument.
    pub fn poi_file_path(&self) -> PathBuf {
        self.resolve_data_path(&self.poi_file)
    }

    /// Vollständiger Pfad zum Pfad-Dokument.
    pub fn path_file_path(&self) -> PathBuf {
        self.resolve_data_path(&self.path_file)
    }
}
