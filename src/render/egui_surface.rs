//! Render-Oberfläche auf Basis des egui-Painters.
//!
//! Zeichnet Bild-Overlays als Texturen, Marker als Kreise bzw. Portal-Rauten
//! und Pfade als Linien. Pan per Drag, Zoom per Mausrad (auf die Mausposition),
//! Klick auf einen Layer öffnet sein Popup.

use super::layer_store::LayerStore;
use super::surface::{LayerId, LayerShape, LineStyle, MarkerStyle, Popup, RenderSurface, Rgba};
use crate::core::{MapCamera, PlotPoint, PlotRect};
use crate::shared::AtlasOptions;
use glam::DVec2;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Scroll-Pixel, die einem Zoom-Schritt entsprechen.
const WHEEL_PX_PER_STEP: f64 = 50.0;
/// Zusätzlicher Klick-Radius um Marker und Linien (Pixel).
const HIT_TOLERANCE: f32 = 4.0;

/// Karten-Canvas in egui.
pub struct EguiMapSurface {
    layers: LayerStore,
    camera: MapCamera,
    /// Geladene Texturen; `None` merkt sich einen fehlgeschlagenen Ladeversuch
    textures: HashMap<PathBuf, Option<egui::TextureHandle>>,
    scroll_zoom_step: f64,
}

impl EguiMapSurface {
    /// Erstellt eine leere Oberfläche mit den Kamera-Optionen.
    pub fn new(options: &AtlasOptions) -> Self {
        Self {
            layers: LayerStore::new(),
            camera: MapCamera::new(
                options.camera_zoom_initial,
                options.camera_zoom_min,
                options.camera_zoom_max,
            ),
            textures: HashMap::new(),
            scroll_zoom_step: options.camera_scroll_zoom_step,
        }
    }

    /// Anzahl der aktuell gezeichneten Layer.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Zeichnet die Karte in den verfügbaren Platz und verarbeitet Eingaben.
    ///
    /// Die Canvas-Größe geht vor allem anderen an die Kamera, damit ein
    /// vorgemerktes Einpassen die echte Größe verwendet.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        self.camera
            .set_viewport_size(DVec2::new(rect.width() as f64, rect.height() as f64));

        self.handle_input(ui, rect, &response);

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, egui::Color32::from_gray(24));
        self.paint_layers(ui.ctx(), &painter, rect);
        self.show_popup(ui.ctx(), rect);
    }

    fn handle_input(&mut self, ui: &egui::Ui, rect: egui::Rect, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.camera
                .pan_pixels(DVec2::new(delta.x as f64, delta.y as f64));
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y) as f64;
            if scroll != 0.0 {
                let focus = response.hover_pos().map(|pos| to_viewport(pos, rect));
                self.camera
                    .zoom_by(scroll / WHEEL_PX_PER_STEP * self.scroll_zoom_step, focus);
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                match self.hit_test(pos, rect) {
                    Some(layer) => self.layers.open_popup(layer),
                    None => self.layers.close_popup(),
                }
            }
        }
    }

    /// Oberster Layer mit Popup unter der Bildschirmposition.
    fn hit_test(&self, pos: egui::Pos2, rect: egui::Rect) -> Option<LayerId> {
        self.layers
            .iter()
            .rev()
            .filter(|(id, _)| self.layers.has_popup(**id))
            .find(|(_, layer)| match layer {
                LayerShape::Marker { position, style } => {
                    let center = self.to_screen(*position, rect);
                    center.distance(pos) <= marker_radius(style) + HIT_TOLERANCE
                }
                LayerShape::Polyline { points, style } => points.windows(2).any(|w| {
                    let a = self.to_screen(w[0], rect);
                    let b = self.to_screen(w[1], rect);
                    distance_to_segment(pos, a, b) <= style.weight / 2.0 + HIT_TOLERANCE
                }),
                LayerShape::Overlay { .. } => false,
            })
            .map(|(id, _)| *id)
    }

    fn to_screen(&self, p: PlotPoint, rect: egui::Rect) -> egui::Pos2 {
        let v = self.camera.plot_to_screen(p);
        egui::pos2(rect.min.x + v.x as f32, rect.min.y + v.y as f32)
    }

    fn paint_layers(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        for id in self.layers.ids() {
            let Some(layer) = self.layers.get(id) else {
                continue;
            };
            match layer {
                LayerShape::Overlay { image, rect: bounds } => {
                    let (image, bounds) = (image.clone(), *bounds);
                    self.paint_overlay(ctx, painter, rect, &image, bounds);
                }
                LayerShape::Marker { position, style } => {
                    paint_marker(painter, self.to_screen(*position, rect), style);
                }
                LayerShape::Polyline { points, style } => {
                    let screen: Vec<egui::Pos2> =
                        points.iter().map(|p| self.to_screen(*p, rect)).collect();
                    painter.add(egui::Shape::line(
                        screen,
                        egui::Stroke::new(style.weight, color(style.color, style.opacity)),
                    ));
                }
            }
        }
    }

    fn paint_overlay(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: egui::Rect,
        image: &Path,
        bounds: PlotRect,
    ) {
        let Some(texture) = self.texture(ctx, image) else {
            return;
        };
        // Nordwest-Ecke oben links, Südost-Ecke unten rechts
        let top_left = self.to_screen(PlotPoint::new(bounds.max.row, bounds.min.col), rect);
        let bottom_right = self.to_screen(PlotPoint::new(bounds.min.row, bounds.max.col), rect);
        painter.image(
            texture.id(),
            egui::Rect::from_two_pos(top_left, bottom_right),
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    /// Lädt ein Kartenbild beim ersten Zeichnen als Textur.
    fn texture(&mut self, ctx: &egui::Context, image: &Path) -> Option<egui::TextureHandle> {
        self.textures
            .entry(image.to_path_buf())
            .or_insert_with(|| match load_color_image(image) {
                Ok(color_image) => {
                    log::info!(
                        "Kartenbild geladen: {} ({}x{})",
                        image.display(),
                        color_image.size[0],
                        color_image.size[1]
                    );
                    Some(ctx.load_texture(
                        image.display().to_string(),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(e) => {
                    log::error!("Kartenbild {} nicht ladbar: {:#}", image.display(), e);
                    None
                }
            })
            .clone()
    }

    fn show_popup(&mut self, ctx: &egui::Context, rect: egui::Rect) {
        let Some(id) = self.layers.open_popup_id() else {
            return;
        };
        let (Some(popup), Some(anchor)) = (self.layers.popup(id), self.layers.anchor(id)) else {
            self.layers.close_popup();
            return;
        };
        let pos = self.to_screen(anchor, rect) + egui::vec2(10.0, -10.0);

        let mut close = false;
        egui::Area::new(egui::Id::new("map_popup"))
            .order(egui::Order::Foreground)
            .fixed_pos(pos)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(260.0);
                    ui.horizontal(|ui| {
                        ui.strong(&popup.title);
                        if ui.small_button("✖").clicked() {
                            close = true;
                        }
                    });
                    for line in &popup.lines {
                        ui.label(line);
                    }
                });
            });
        if close {
            self.layers.close_popup();
        }
    }
}

impl RenderSurface for EguiMapSurface {
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

fn load_color_image(path: &Path) -> anyhow::Result<egui::ColorImage> {
    let rgba = image::open(path)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

fn to_viewport(pos: egui::Pos2, rect: egui::Rect) -> DVec2 {
    DVec2::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
}

fn color(rgba: Rgba, opacity: f32) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3] * opacity).into()
}

fn marker_radius(style: &MarkerStyle) -> f32 {
    match style {
        MarkerStyle::Circle { radius, .. } => *radius,
        MarkerStyle::PortalIcon { size, .. } => size / 2.0,
    }
}

fn paint_marker(painter: &egui::Painter, center: egui::Pos2, style: &MarkerStyle) {
    match style {
        MarkerStyle::Circle {
            radius,
            stroke,
            fill,
            fill_opacity,
            weight,
        } => {
            painter.circle(
                center,
                *radius,
                color(*fill, *fill_opacity),
                egui::Stroke::new(*weight, color(*stroke, 1.0)),
            );
        }
        MarkerStyle::PortalIcon { size, color: c } => {
            // Raute mit hellem Rand
            let h = size / 2.0;
            let points = vec![
                center + egui::vec2(0.0, -h),
                center + egui::vec2(h * 0.7, 0.0),
                center + egui::vec2(0.0, h),
                center + egui::vec2(-h * 0.7, 0.0),
            ];
            painter.add(egui::Shape::convex_polygon(
                points,
                color(*c, 1.0),
                egui::Stroke::new(1.5, egui::Color32::WHITE),
            ));
        }
    }
}

fn distance_to_segment(p: egui::Pos2, a: egui::Pos2, b: egui::Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
