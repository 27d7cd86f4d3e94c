//! Popup-Inhalte für POIs und Pfade.

use super::surface::Popup;
use crate::core::{PathSegment, Poi, WorldXZ};

/// Escaped `&`, `<` und `>` für die Einbettung in HTML.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Nur nicht-leere optionale Felder werden angezeigt.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Baut das Popup eines POI: Name, Kategorie, XYZ, Besitzer, Notizen.
pub fn poi_popup(poi: &Poi) -> Popup {
    let name = poi.display_name();
    let category = poi.category.as_str();
    let coords = format!("XYZ: {}, {}, {}", poi.x, poi.y, poi.z);

    let mut html = format!(
        "<strong>{}</strong><br/><em>{}</em><br/>{}",
        escape_html(name),
        escape_html(category),
        coords
    );
    let mut lines = vec![category.to_string(), coords];

    if let Some(owner) = present(&poi.owner) {
        html.push_str(&format!(
            "<div><strong>Owner:</strong> {}</div>",
            escape_html(owner)
        ));
        lines.push(format!("Owner: {owner}"));
    }
    if let Some(notes) = present(&poi.notes) {
        html.push_str(&format!(
            "<div style=\"margin-top:6px\">{}</div>",
            escape_html(notes)
        ));
        lines.push(notes.to_string());
    }

    Popup {
        html,
        title: name.to_string(),
        lines,
    }
}

fn endpoint_label(point: Option<WorldXZ>) -> String {
    point.map_or_else(|| "?".to_string(), |p| p.to_string())
}

/// Baut das Popup eines Pfads: Name, Art, Endpunkte, Notizen.
pub fn path_popup(path: &PathSegment) -> Popup {
    let name = path.display_name();
    let kind = path.kind.label();
    let route = format!(
        "From: {} → To: {}",
        endpoint_label(path.from),
        endpoint_label(path.to)
    );

    let mut html = format!(
        "<strong>{}</strong><br/><em>{}</em><br/>{}",
        escape_html(name),
        kind,
        route
    );
    let mut lines = vec![kind.to_string(), route];

    if let Some(notes) = present(&path.notes) {
        html.push_str(&format!(
            "<div style=\"margin-top:6px\">{}</div>",
            escape_html(notes)
        ));
        lines.push(notes.to_string());
    }

    Popup {
        html,
        title: name.to_string(),
        lines,
    }
}
