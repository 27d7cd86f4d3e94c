//! 2D-Kamera für Pan und Zoom im Plot-Koordinatensystem.
//!
//! Zoom-Stufen folgen der Leaflet-Konvention: bei Zoom `z` entspricht eine
//! Plot-Einheit `2^z` Bildschirm-Pixeln. Negative Stufen zoomen heraus.

use super::coords::{PlotPoint, PlotRect};
use glam::DVec2;

/// 2D-Kamera mit Pan, Zoom und optionaler Bewegungsgrenze.
#[derive(Debug, Clone)]
pub struct MapCamera {
    /// Sichtmittelpunkt (`x = col`, `y = row`)
    pub center: DVec2,
    /// Aktuelle Zoom-Stufe
    pub zoom: f64,
    /// Minimale Zoom-Stufe
    pub zoom_min: f64,
    /// Maximale Zoom-Stufe
    pub zoom_max: f64,
    /// Viewport-Größe in Pixeln
    pub viewport_size: DVec2,
    /// Bereich, den die Sicht nicht verlassen darf
    pub max_bounds: Option<PlotRect>,
    /// Ob `viewport_size` schon vom echten Canvas stammt
    viewport_known: bool,
    /// Einpassen, das vor bekannter Viewport-Größe angefordert wurde
    pending_fit: Option<PlotRect>,
}

impl MapCamera {
    /// Standard-Zoomgrenzen der Karte.
    pub const ZOOM_MIN: f64 = -4.0;
    pub const ZOOM_MAX: f64 = 3.0;

    /// Erstellt eine Kamera im Ursprung.
    pub fn new(zoom: f64, zoom_min: f64, zoom_max: f64) -> Self {
        Self {
            center: DVec2::ZERO,
            zoom: zoom.clamp(zoom_min, zoom_max),
            zoom_min,
            zoom_max,
            viewport_size: DVec2::new(800.0, 600.0),
            max_bounds: None,
            viewport_known: false,
            pending_fit: None,
        }
    }

    /// Pixel pro Plot-Einheit.
    pub fn scale(&self) -> f64 {
        self.zoom.exp2()
    }

    /// Aktualisiert die Viewport-Größe (Pixel) und hält die Grenze ein.
    ///
    /// Ein Einpassen, das vor der ersten echten Größe angefordert wurde, wird
    /// jetzt mit der richtigen Größe wiederholt.
    pub fn set_viewport_size(&mut self, size: DVec2) {
        self.viewport_size = size.max(DVec2::ONE);
        self.viewport_known = true;
        match self.pending_fit.take() {
            Some(rect) => self.fit_bounds(rect),
            None => self.clamp_center(),
        }
    }

    /// Setzt Mittelpunkt und Zoom.
    pub fn set_view(&mut self, center: PlotPoint, zoom: f64) {
        self.pending_fit = None;
        self.zoom = zoom.clamp(self.zoom_min, self.zoom_max);
        self.center = center.to_dvec2();
        self.clamp_center();
    }

    /// Sichtmittelpunkt als Plot-Punkt.
    pub fn center_point(&self) -> PlotPoint {
        PlotPoint::from_dvec2(self.center)
    }

    /// Verschiebt die Sicht um ein Bildschirm-Delta (Pixel, y nach unten).
    pub fn pan_pixels(&mut self, delta: DVec2) {
        self.pending_fit = None;
        let s = self.scale();
        self.center.x -= delta.x / s;
        self.center.y += delta.y / s;
        self.clamp_center();
    }

    /// Ändert die Zoom-Stufe um `delta`.
    ///
    /// Falls `focus` (Bildschirmposition relativ zur Viewport-Ecke) angegeben
    /// ist, bleibt der Punkt darunter an derselben Stelle.
    pub fn zoom_by(&mut self, delta: f64, focus: Option<DVec2>) {
        self.pending_fit = None;
        let anchor = focus.map(|f| (f, self.screen_to_plot(f).to_dvec2()));
        self.zoom = (self.zoom + delta).clamp(self.zoom_min, self.zoom_max);

        if let Some((screen, plot)) = anchor {
            // Mittelpunkt so verschieben, dass `plot` wieder unter `screen` liegt
            let s = self.scale();
            let offset = screen - self.viewport_size / 2.0;
            self.center = DVec2::new(plot.x - offset.x / s, plot.y + offset.y / s);
        }
        self.clamp_center();
    }

    /// Passt Mittelpunkt und (ganzzahligen) Zoom so an, dass `rect` vollständig sichtbar ist.
    ///
    /// Ist die Viewport-Größe noch ein Platzhalter, wird das Einpassen beim
    /// nächsten [`MapCamera::set_viewport_size`] wiederholt.
    pub fn fit_bounds(&mut self, rect: PlotRect) {
        if !self.viewport_known {
            self.pending_fit = Some(rect);
        }
        let width = rect.width().max(f64::EPSILON);
        let height = rect.height().max(f64::EPSILON);
        let ratio = (self.viewport_size.x / width).min(self.viewport_size.y / height);
        self.zoom = ratio.log2().floor().clamp(self.zoom_min, self.zoom_max);
        self.center = rect.center().to_dvec2();
        self.clamp_center();
    }

    /// Begrenzt künftiges Verschieben auf `rect`.
    pub fn set_max_bounds(&mut self, rect: PlotRect) {
        self.max_bounds = Some(rect);
        self.clamp_center();
    }

    /// Plot-Punkt → Bildschirmposition relativ zur Viewport-Ecke.
    pub fn plot_to_screen(&self, p: PlotPoint) -> DVec2 {
        let s = self.scale();
        let half = self.viewport_size / 2.0;
        DVec2::new(
            half.x + (p.col - self.center.x) * s,
            half.y - (p.row - self.center.y) * s,
        )
    }

    /// Bildschirmposition relativ zur Viewport-Ecke → Plot-Punkt.
    pub fn screen_to_plot(&self, screen: DVec2) -> PlotPoint {
        let s = self.scale();
        let offset = screen - self.viewport_size / 2.0;
        PlotPoint::new(self.center.y - offset.y / s, self.center.x + offset.x / s)
    }

    /// Hält die Sicht innerhalb von `max_bounds`.
    ///
    /// Ist die Sicht auf einer Achse größer als die Grenze, wird auf deren
    /// Mitte zentriert.
    fn clamp_center(&mut self) {
        let Some(bounds) = self.max_bounds else {
            return;
        };
        let half_view = self.viewport_size / (2.0 * self.scale());
        self.center.x = clamp_axis(self.center.x, bounds.min.col, bounds.max.col, half_view.x);
        self.center.y = clamp_axis(self.center.y, bounds.min.row, bounds.max.row, half_view.y);
    }
}

fn clamp_axis(value: f64, min: f64, max: f64, half_view: f64) -> f64 {
    if max - min <= 2.0 * half_view {
        (min + max) / 2.0
    } else {
        value.clamp(min + half_view, max - half_view)
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new(0.0, Self::ZOOM_MIN, Self::ZOOM_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> MapCamera {
        let mut cam = MapCamera::new(0.0, -4.0, 3.0);
        cam.set_viewport_size(DVec2::new(800.0, 600.0));
        cam
    }

    #[test]
    fn screen_center_maps_to_camera_center() {
        let mut cam = camera();
        cam.set_view(PlotPoint::new(5.0, 10.0), 1.0);
        let p = cam.screen_to_plot(DVec2::new(400.0, 300.0));
        assert_relative_eq!(p.row, 5.0);
        assert_relative_eq!(p.col, 10.0);
    }

    #[test]
    fn plot_to_screen_and_back_roundtrip() {
        let mut cam = camera();
        cam.set_view(PlotPoint::new(-20.0, 40.0), -1.0);
        let p = PlotPoint::new(13.0, -7.5);
        let back = cam.screen_to_plot(cam.plot_to_screen(p));
        assert_relative_eq!(back.row, p.row, epsilon = 1e-9);
        assert_relative_eq!(back.col, p.col, epsilon = 1e-9);
    }

    #[test]
    fn higher_row_is_drawn_further_up() {
        let cam = camera();
        let north = cam.plot_to_screen(PlotPoint::new(10.0, 0.0));
        let south = cam.plot_to_screen(PlotPoint::new(-10.0, 0.0));
        assert!(north.y < south.y);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = camera();
        cam.zoom_by(100.0, None);
        assert_relative_eq!(cam.zoom, 3.0);
        cam.zoom_by(-100.0, None);
        assert_relative_eq!(cam.zoom, -4.0);
    }

    #[test]
    fn zoom_towards_focus_keeps_point_stable() {
        let mut cam = camera();
        let focus = DVec2::new(600.0, 100.0);
        let before = cam.screen_to_plot(focus);
        cam.zoom_by(1.0, Some(focus));
        let after = cam.screen_to_plot(focus);
        assert_relative_eq!(before.row, after.row, epsilon = 1e-9);
        assert_relative_eq!(before.col, after.col, epsilon = 1e-9);
    }

    #[test]
    fn fit_bounds_shows_whole_rect() {
        let mut cam = camera();
        let rect = PlotRect::from_corners(PlotPoint::new(-2609.0, -5159.0), PlotPoint::new(2611.0, 5157.0));
        cam.fit_bounds(rect);
        // 800 / 10316 ≈ 0.0775 → floor(log2) = -4
        assert_relative_eq!(cam.zoom, -4.0);
        assert_relative_eq!(cam.center.x, rect.center().col);
        assert_relative_eq!(cam.center.y, rect.center().row);
    }

    #[test]
    fn fit_before_first_viewport_size_is_redone_with_real_size() {
        let mut cam = MapCamera::new(0.0, -4.0, 3.0);
        let rect = PlotRect::from_corners(PlotPoint::new(-2609.0, -5159.0), PlotPoint::new(2611.0, 5157.0));
        cam.fit_bounds(rect);
        assert_relative_eq!(cam.zoom, -4.0);

        // 2280 / 10316 ≈ 0.221 → floor(log2) = -3
        cam.set_viewport_size(DVec2::new(2280.0, 1350.0));
        assert_relative_eq!(cam.zoom, -3.0);
        assert_relative_eq!(cam.center.x, rect.center().col);

        // Danach kein erneutes Einpassen bei Größenänderung
        cam.zoom_by(1.0, None);
        cam.set_viewport_size(DVec2::new(1000.0, 700.0));
        assert_relative_eq!(cam.zoom, -2.0);
    }

    #[test]
    fn set_view_cancels_pending_fit() {
        let mut cam = MapCamera::new(0.0, -4.0, 3.0);
        let rect = PlotRect::from_corners(PlotPoint::new(-100.0, -100.0), PlotPoint::new(100.0, 100.0));
        cam.fit_bounds(rect);
        cam.set_view(PlotPoint::new(10.0, 20.0), 2.0);

        cam.set_viewport_size(DVec2::new(1600.0, 900.0));

        assert_relative_eq!(cam.zoom, 2.0);
        assert_relative_eq!(cam.center.x, 20.0);
        assert_relative_eq!(cam.center.y, 10.0);
    }

    #[test]
    fn max_bounds_stop_panning() {
        let mut cam = camera();
        let rect = PlotRect::from_corners(PlotPoint::new(-1000.0, -1000.0), PlotPoint::new(1000.0, 1000.0));
        cam.set_max_bounds(rect);
        cam.pan_pixels(DVec2::new(-1.0e6, 0.0));
        // Sicht-Halbbreite bei Zoom 0: 400 Einheiten
        assert_relative_eq!(cam.center.x, 600.0);
    }
}
