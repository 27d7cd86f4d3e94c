/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Fehlermeldung des Startladens; solange gesetzt, gibt es keine Karte
    pub load_error: Option<String>,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}
