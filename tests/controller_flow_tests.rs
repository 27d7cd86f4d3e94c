use waystone_atlas::data::{parse_paths, parse_pois};
use waystone_atlas::render::LayerShape;
use waystone_atlas::{
    AppCommand, AppController, AppIntent, AppState, AtlasData, Dimension, PlotPoint, PoiKey,
    RecordingSurface, WorldBounds,
};

fn fixture_data(pois: &str, paths: &str) -> AtlasData {
    AtlasData {
        pois: parse_pois(pois).expect("POI-Fixture sollte parsebar sein"),
        paths: parse_paths(paths).expect("Pfad-Fixture sollte parsebar sein"),
    }
}

fn scenario_data() -> AtlasData {
    fixture_data(
        include_str!("fixtures/pois.json"),
        include_str!("fixtures/paths.json"),
    )
}

fn loaded(data: AtlasData) -> (AppController, AppState, RecordingSurface) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut surface = RecordingSurface::new();

    controller
        .handle_intent(&mut state, AppIntent::DataLoaded { data })
        .expect("DataLoaded sollte ohne Fehler durchlaufen");
    controller.sync_surface(&mut state, &mut surface);

    (controller, state, surface)
}

fn directory_rows(state: &AppState) -> Vec<(String, Vec<String>)> {
    state
        .view
        .directory
        .groups
        .iter()
        .map(|g| {
            (
                g.heading.clone(),
                g.entries.iter().map(|e| e.label.clone()).collect(),
            )
        })
        .collect()
}

#[test]
fn test_overworld_then_nether_shows_one_marker_and_row_each() {
    let (mut controller, mut state, mut surface) = loaded(scenario_data());

    assert_eq!(surface.marker_count(), 1);
    assert_eq!(surface.marker_titles(), vec!["Iron Shop".to_string()]);
    assert_eq!(
        directory_rows(&state),
        vec![("🛒 SHOPS".to_string(), vec!["– Iron Shop".to_string()])]
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::DimensionSelected {
                dimension: Dimension::Nether,
            },
        )
        .expect("Dimensionswechsel sollte ohne Fehler durchlaufen");
    controller.sync_surface(&mut state, &mut surface);

    assert_eq!(surface.marker_count(), 1);
    assert_eq!(surface.marker_titles(), vec!["Nether Base".to_string()]);
    assert_eq!(
        directory_rows(&state),
        vec![("🏠 BASES".to_string(), vec!["– Nether Base".to_string()])]
    );
    assert_eq!(
        surface.overlay_image(),
        Some(std::path::Path::new("data").join("nether.jpg").as_path())
    );
}

#[test]
fn test_nether_switch_installs_scaled_overlay_and_bounds() {
    let (mut controller, mut state, mut surface) = loaded(scenario_data());
    let overworld = WorldBounds::OVERWORLD.to_plot_rect();
    assert_eq!(surface.overlay_rect(), Some(overworld));
    assert_eq!(surface.max_bounds(), Some(overworld));

    controller
        .handle_intent(
            &mut state,
            AppIntent::DimensionSelected {
                dimension: Dimension::Nether,
            },
        )
        .expect("Dimensionswechsel sollte ohne Fehler durchlaufen");
    controller.sync_surface(&mut state, &mut surface);

    let nether = WorldBounds::OVERWORLD.scaled(1.0 / 8.0).to_plot_rect();
    assert_eq!(surface.overlay_count(), 1);
    assert_eq!(surface.overlay_rect(), Some(nether));
    assert_eq!(surface.max_bounds(), Some(nether));
}

#[test]
fn test_startup_fit_uses_real_canvas_size() {
    // Reihenfolge wie im Frame: erst Sync, danach kennt der Canvas seine Größe
    let (_, _, mut surface) = loaded(scenario_data());
    surface.set_viewport_size(2280.0, 1350.0);

    let (center, zoom) = surface.view();
    // 2280 / 10316 ≈ 0.221 → floor(log2) = -3
    assert_eq!(zoom, -3.0);
    assert_eq!(center, WorldBounds::OVERWORLD.to_plot_rect().center());
}

#[test]
fn test_invalid_path_endpoint_is_not_drawn() {
    let (mut controller, mut state, mut surface) = loaded(scenario_data());
    controller
        .handle_intent(
            &mut state,
            AppIntent::DimensionSelected {
                dimension: Dimension::Nether,
            },
        )
        .expect("Dimensionswechsel sollte ohne Fehler durchlaufen");
    controller.sync_surface(&mut state, &mut surface);

    // Nur "Spawn Rail": Glow + Solid
    assert_eq!(surface.polyline_count(), 2);
    assert_eq!(state.view.visible_path_count, 2);
    assert_eq!(state.view.directory.paths.len(), 1);
    assert_eq!(controller.pipeline().path_lines().len(), 1);
}

#[test]
fn test_search_changes_directory_but_not_map() {
    let (mut controller, mut state, mut surface) = loaded(fixture_data(
        include_str!("fixtures/directory_pois.json"),
        "[]",
    ));
    let markers_before = surface.marker_count();
    let layers_before: Vec<_> = surface.layers().map(|(id, _)| *id).collect();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchChanged {
                query: "steve".to_string(),
            },
        )
        .expect("Suche sollte ohne Fehler durchlaufen");
    controller.sync_surface(&mut state, &mut surface);

    // Treffer nur über den Besitzer
    assert_eq!(
        directory_rows(&state),
        vec![("🌾 FARMS".to_string(), vec!["– Melon Farm".to_string()])]
    );
    assert_eq!(surface.marker_count(), markers_before);
    let layers_after: Vec<_> = surface.layers().map(|(id, _)| *id).collect();
    assert_eq!(layers_after, layers_before);

    controller
        .handle_intent(&mut state, AppIntent::SearchCleared)
        .expect("Suche leeren sollte ohne Fehler durchlaufen");
    assert_eq!(state.view.directory.poi_rows(), markers_before);
}

#[test]
fn test_directory_group_order_with_custom_category() {
    let (_, state, _) = loaded(fixture_data(
        include_str!("fixtures/directory_pois.json"),
        "[]",
    ));

    let headings: Vec<String> = directory_rows(&state).into_iter().map(|(h, _)| h).collect();
    assert_eq!(
        headings,
        vec!["🏠 BASES", "🌾 FARMS", "🪦 OTHER", "🔥 PORTALS", "🛒 SHOPS", "STABLE"]
    );
}

#[test]
fn test_entry_click_focuses_current_marker_after_rebuild() {
    let (mut controller, mut state, mut surface) = loaded(scenario_data());
    let key = PoiKey { x: 10, z: -5 };

    // Zweimal neu aufbauen: alte Marker-IDs werden ungültig
    for dimension in [Dimension::Nether, Dimension::Overworld] {
        controller
            .handle_intent(&mut state, AppIntent::DimensionSelected { dimension })
            .expect("Dimensionswechsel sollte ohne Fehler durchlaufen");
        controller.sync_surface(&mut state, &mut surface);
    }

    controller
        .handle_intent(&mut state, AppIntent::PoiEntryClicked { key })
        .expect("Klick sollte ohne Fehler durchlaufen");
    controller.sync_surface(&mut state, &mut surface);

    let layer = controller
        .pipeline()
        .markers()
        .get(&key)
        .expect("Marker sollte registriert sein");
    assert!(matches!(surface.layer(layer), Some(LayerShape::Marker { .. })));
    assert_eq!(surface.open_popup_title().as_deref(), Some("Iron Shop"));

    let (center, zoom) = surface.view();
    assert_eq!(center, PlotPoint::new(5.0, 10.0));
    assert!(zoom >= state.options.camera_focus_min_zoom);
    assert!(state.view.pending_focus.is_none());
}

#[test]
fn test_path_click_centres_on_midpoint() {
    let (mut controller, mut state, mut surface) = loaded(scenario_data());
    controller
        .handle_intent(
            &mut state,
            AppIntent::DimensionSelected {
                dimension: Dimension::Nether,
            },
        )
        .expect("Dimensionswechsel sollte ohne Fehler durchlaufen");
    let key = state.view.directory.paths[0].key;
    // Nah genug, damit die Nether-Grenze den Mittelpunkt nicht verschiebt
    state.options.camera_focus_min_zoom = 1.0;

    controller
        .handle_intent(&mut state, AppIntent::PathEntryClicked { key })
        .expect("Klick sollte ohne Fehler durchlaufen");
    controller.sync_surface(&mut state, &mut surface);

    assert_eq!(surface.open_popup_title().as_deref(), Some("Spawn Rail"));
    assert_eq!(surface.view().0, PlotPoint::new(20.0, 60.0));
}

#[test]
fn test_load_failure_leaves_no_map_and_no_directory() {
    let (mut controller, mut state, mut surface) = loaded(scenario_data());

    controller
        .handle_intent(
            &mut state,
            AppIntent::DataLoadFailed {
                message: "POI-Dokument nicht lesbar".to_string(),
            },
        )
        .expect("DataLoadFailed sollte ohne Fehler durchlaufen");
    controller.sync_surface(&mut state, &mut surface);

    assert!(state.store.is_none());
    assert_eq!(
        state.ui.load_error.as_deref(),
        Some("POI-Dokument nicht lesbar")
    );
    assert!(state.view.directory.is_empty());
    assert_eq!(surface.layers().count(), 0);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert_eq!(state.command_log.entries().last(), Some(&"RequestExit"));
}

#[test]
fn test_focus_command_without_data_fails() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_command(
        &mut state,
        AppCommand::FocusPoi {
            key: PoiKey { x: 0, z: 0 },
        },
    );

    assert!(result.is_err());
    assert!(state.view.pending_focus.is_none());
}
