//! UI-Layer mit egui: Seitenleiste mit Verzeichnis, Status-Bar, Dialoge.
//!
//! Komponenten lesen den `AppState` und liefern `AppIntent`s zurück; sie
//! mutieren nie selbst.

pub mod dialogs;
pub mod sidebar;
pub mod status;

pub use dialogs::show_load_error_dialog;
pub use sidebar::render_sidebar;
pub use status::render_status_bar;
