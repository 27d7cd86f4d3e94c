//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::DataLoaded { data } => vec![AppCommand::ApplyLoadedData { data }],
        AppIntent::DataLoadFailed { message } => vec![AppCommand::RecordLoadFailure { message }],
        AppIntent::DimensionSelected { dimension } => {
            // Gleiche Dimension: kein Neuaufbau
            if dimension == state.view.dimension {
                Vec::new()
            } else {
                vec![AppCommand::SetDimension { dimension }]
            }
        }
        AppIntent::SearchChanged { query } => {
            if query == state.view.search_query {
                Vec::new()
            } else {
                vec![AppCommand::SetSearchQuery { query }]
            }
        }
        AppIntent::SearchCleared => vec![AppCommand::SetSearchQuery {
            query: String::new(),
        }],
        // Ohne geladene Daten gibt es nichts anzuspringen
        AppIntent::PoiEntryClicked { key } if state.store.is_some() => {
            vec![AppCommand::FocusPoi { key }]
        }
        AppIntent::PathEntryClicked { key } if state.store.is_some() => {
            vec![AppCommand::FocusPath { key }]
        }
        AppIntent::PoiEntryClicked { .. } | AppIntent::PathEntryClicked { .. } => Vec::new(),
        AppIntent::StatusDismissed => vec![AppCommand::ClearStatus],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
