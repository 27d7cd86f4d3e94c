//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod directory;
pub mod events;
pub mod filter;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (geladene Daten, Ansicht, UI).
pub mod state;
pub mod store;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use directory::{build_directory, Directory, DirectoryEntry, DirectoryGroup, PathEntry};
pub use events::{AppCommand, AppIntent};
pub use filter::{passes_search, visible_paths, visible_pois, Searchable};
pub use state::{AppState, FocusTarget, UiState, ViewState};
pub use store::AtlasStore;
