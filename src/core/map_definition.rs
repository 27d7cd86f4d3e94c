//! Kartenbild und Weltkoordinaten-Bereich je Dimension.

use super::coords::{to_plot_coords, PlotRect};
use serde::{Deserialize, Serialize};

/// Weltkoordinaten-Begrenzung eines Kartenbilds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    /// Minimale X-Koordinate (Westen)
    pub min_x: f64,
    /// Maximale X-Koordinate (Osten)
    pub max_x: f64,
    /// Minimale Z-Koordinate (Norden)
    pub min_z: f64,
    /// Maximale Z-Koordinate (Süden)
    pub max_z: f64,
}

impl WorldBounds {
    /// Sichtbarer Bereich der Oberwelt-Karte.
    pub const OVERWORLD: WorldBounds = WorldBounds {
        min_x: -5159.0,
        max_x: 5157.0,
        min_z: -2611.0,
        max_z: 2609.0,
    };

    /// Skaliert alle Grenzen um einen Faktor (z.B. 1/8 für den Nether).
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            min_x: self.min_x * factor,
            max_x: self.max_x * factor,
            min_z: self.min_z * factor,
            max_z: self.max_z * factor,
        }
    }

    /// Rechteck im Plot-Koordinatensystem (Südwest- und Nordost-Ecke).
    pub fn to_plot_rect(&self) -> PlotRect {
        let south_west = to_plot_coords(self.min_x, self.min_z);
        let north_east = to_plot_coords(self.max_x, self.max_z);
        PlotRect::from_corners(south_west, north_east)
    }
}

/// Kartenbild einer Dimension mit seinem Weltbereich.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDefinition {
    /// Pfad zum Bild (relativ zum Datenverzeichnis oder absolut)
    pub image: String,
    /// Weltbereich, den das Bild abdeckt; zugleich Kamera-Begrenzung
    pub bounds: WorldBounds,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlotPoint;
    use approx::assert_relative_eq;

    #[test]
    fn plot_rect_negates_z_range() {
        let rect = WorldBounds::OVERWORLD.to_plot_rect();
        assert_eq!(rect.min, PlotPoint::new(-2609.0, -5159.0));
        assert_eq!(rect.max, PlotPoint::new(2611.0, 5157.0));
    }

    #[test]
    fn scaled_divides_every_edge() {
        let nether = WorldBounds::OVERWORLD.scaled(1.0 / 8.0);
        assert_relative_eq!(nether.min_x, -5159.0 / 8.0);
        assert_relative_eq!(nether.max_z, 2609.0 / 8.0);
    }
}
