//! Umrechnung zwischen Minecraft-Weltkoordinaten und Plot-Koordinaten.
//!
//! Die Render-Oberfläche arbeitet mit `[row, col]` (Leaflet: `[lat, lng]`).
//! Wir legen Welt-Z auf die Zeile und Welt-X auf die Spalte. Z wird negiert,
//! damit Norden (negatives Z) oben liegt.

use serde::{Deserialize, Serialize};

/// Punkt im Plot-Koordinatensystem der Render-Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// Erste Achse (wächst nach oben)
    pub row: f64,
    /// Zweite Achse (wächst nach rechts)
    pub col: f64,
}

impl PlotPoint {
    /// Erstellt einen Plot-Punkt.
    pub fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Mittelpunkt zwischen zwei Plot-Punkten.
    pub fn midpoint(self, other: PlotPoint) -> PlotPoint {
        PlotPoint::new((self.row + other.row) / 2.0, (self.col + other.col) / 2.0)
    }

    /// Als glam-Vektor mit `x = col`, `y = row`.
    pub fn to_dvec2(self) -> glam::DVec2 {
        glam::DVec2::new(self.col, self.row)
    }

    /// Gegenstück zu [`PlotPoint::to_dvec2`].
    pub fn from_dvec2(v: glam::DVec2) -> Self {
        Self { row: v.y, col: v.x }
    }
}

/// Achsenparalleles Rechteck im Plot-Koordinatensystem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    /// Untere linke Ecke (kleinste row/col)
    pub min: PlotPoint,
    /// Obere rechte Ecke (größte row/col)
    pub max: PlotPoint,
}

impl PlotRect {
    /// Erstellt ein Rechteck aus zwei beliebigen Ecken (normalisiert min/max).
    pub fn from_corners(a: PlotPoint, b: PlotPoint) -> Self {
        Self {
            min: PlotPoint::new(a.row.min(b.row), a.col.min(b.col)),
            max: PlotPoint::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Mittelpunkt des Rechtecks.
    pub fn center(&self) -> PlotPoint {
        self.min.midpoint(self.max)
    }

    /// Ausdehnung entlang der Spalten-Achse.
    pub fn width(&self) -> f64 {
        self.max.col - self.min.col
    }

    /// Ausdehnung entlang der Zeilen-Achse.
    pub fn height(&self) -> f64 {
        self.max.row - self.min.row
    }

    /// Prüft, ob ein Punkt im Rechteck liegt (inklusive Rand).
    pub fn contains(&self, p: PlotPoint) -> bool {
        p.row >= self.min.row && p.row <= self.max.row && p.col >= self.min.col && p.col <= self.max.col
    }
}

/// Rechnet Welt-(x, z) in Plot-Koordinaten um: `(-z, x)`.
///
/// Keine Bereichsprüfung: Punkte außerhalb der Karte werden von der
/// Kamera-Begrenzung weggeschnitten, nicht abgelehnt.
pub fn to_plot_coords(x: f64, z: f64) -> PlotPoint {
    PlotPoint { row: -z, col: x }
}

/// Umkehrung von [`to_plot_coords`]: liefert `(x, z)`.
pub fn from_plot_coords(p: PlotPoint) -> (f64, f64) {
    (p.col, -p.row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn negates_z_onto_row() {
        for &(x, z) in &[(0, 0), (10, -5), (-5159, 2609), (i32::MAX, i32::MIN + 1)] {
            let p = to_plot_coords(x as f64, z as f64);
            assert_eq!(p, PlotPoint::new(-(z as f64), x as f64));
        }
    }

    #[test]
    fn renegating_recovers_world_pair() {
        let p = to_plot_coords(123.0, -456.0);
        let (x, z) = from_plot_coords(p);
        assert_relative_eq!(x, 123.0);
        assert_relative_eq!(z, -456.0);

        // Zweimal anwenden und das Vorzeichen der Zeile zurückdrehen
        let twice = to_plot_coords(-p.row, p.col);
        assert_relative_eq!(-twice.row, p.col);
        assert_relative_eq!(twice.col, -p.row);
    }

    #[test]
    fn rect_from_corners_normalizes() {
        let rect = PlotRect::from_corners(PlotPoint::new(10.0, -3.0), PlotPoint::new(-2.0, 8.0));
        assert_eq!(rect.min, PlotPoint::new(-2.0, -3.0));
        assert_eq!(rect.max, PlotPoint::new(10.0, 8.0));
        assert_relative_eq!(rect.width(), 11.0);
        assert_relative_eq!(rect.height(), 12.0);
        assert!(rect.contains(rect.center()));
        assert!(!rect.contains(PlotPoint::new(11.0, 0.0)));
    }
}
