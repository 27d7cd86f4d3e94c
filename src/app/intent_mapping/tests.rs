use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{Dimension, PoiKey};
use crate::data::AtlasData;
use std::sync::Arc;

use super::map_intent_to_commands;

fn loaded_state() -> AppState {
    let mut state = AppState::new();
    state.store = Some(Arc::new(crate::app::AtlasStore::new(AtlasData::default())));
    state
}

#[test]
fn selecting_current_dimension_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DimensionSelected {
            dimension: Dimension::Overworld,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn selecting_other_dimension_maps_to_set_dimension() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DimensionSelected {
            dimension: Dimension::Nether,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SetDimension {
            dimension: Dimension::Nether
        }
    ));
}

#[test]
fn search_cleared_maps_to_empty_query() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SearchCleared);

    assert!(matches!(&commands[0], AppCommand::SetSearchQuery { query } if query.is_empty()));
}

#[test]
fn unchanged_search_text_maps_to_nothing() {
    let mut state = AppState::new();
    state.view.search_query = "iron".to_string();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SearchChanged {
            query: "iron".to_string(),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn poi_click_without_data_is_ignored() {
    let state = AppState::new();
    let key = PoiKey { x: 1, z: 2 };

    assert!(map_intent_to_commands(&state, AppIntent::PoiEntryClicked { key }).is_empty());

    let commands = map_intent_to_commands(&loaded_state(), AppIntent::PoiEntryClicked { key });
    assert!(matches!(commands[0], AppCommand::FocusPoi { key: k } if k == key));
}

#[test]
fn load_failure_maps_to_record_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DataLoadFailed {
            message: "kaputt".to_string(),
        },
    );

    assert!(matches!(&commands[0], AppCommand::RecordLoadFailure { message } if message == "kaputt"));
}
