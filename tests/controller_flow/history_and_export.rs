use glam::Vec2;
use vex_path_mapper::{
    AppController, AppIntent, AppState, CoordMode, ExportedWaypoint, MapperOptions, TableField,
};

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::CanvasClicked {
                display_pos: Vec2::new(x, y),
            },
        )
        .expect("Klick auf dem Feld muss funktionieren");
}

fn export(controller: &mut AppController, state: &mut AppState) -> Vec<ExportedWaypoint> {
    controller
        .handle_intent(state, AppIntent::ExportRequested { path: None })
        .unwrap();
    let json = state.ui.take_export().expect("Export erwartet");
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_undo_and_redo_append() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 100.0, 100.0);
    click(&mut controller, &mut state, 200.0, 100.0);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    assert_eq!(state.waypoint_count(), 1);

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .unwrap();
    assert_eq!(state.waypoint_count(), 2);
}

#[test]
fn test_undo_clear_restores_waypoints() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 100.0, 100.0);
    click(&mut controller, &mut state, 200.0, 300.0);

    controller
        .handle_intent(&mut state, AppIntent::ClearRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();

    assert_eq!(state.waypoint_count(), 2);
}

#[test]
fn test_rejected_edit_records_no_undo_step() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 100.0, 100.0);
    click(&mut controller, &mut state, 200.0, 100.0);

    let _ = controller.handle_intent(
        &mut state,
        AppIntent::CellEdited {
            index: 0,
            field: TableField::Heading,
            text: "45".to_string(),
        },
    );
    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();

    // Undo nimmt den zweiten Klick zurück, nicht die abgelehnte Bearbeitung
    assert_eq!(state.waypoint_count(), 1);
}

#[test]
fn test_unchanged_values_record_no_undo_step() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 100.0, 100.0);
    click(&mut controller, &mut state, 200.0, 100.0);
    assert_eq!(state.path.waypoints()[1].heading, 0);

    for (index, field, text) in [
        (0, TableField::Speed, "100"),
        (1, TableField::Heading, "0"),
    ] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::CellEdited {
                    index,
                    field,
                    text: text.to_string(),
                },
            )
            .unwrap();
    }
    controller
        .handle_intent(
            &mut state,
            AppIntent::StartingHeadingEdited {
                text: "0".to_string(),
            },
        )
        .unwrap();

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();

    // Undo nimmt direkt den zweiten Klick zurück
    assert_eq!(state.waypoint_count(), 1);
}

#[test]
fn test_relative_export_is_offset_by_first_waypoint() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    // 720 px Fläche: 1 px = 5 mm
    click(&mut controller, &mut state, 360.0, 360.0);
    click(&mut controller, &mut state, 460.0, 360.0);

    let absolute = export(&mut controller, &mut state);
    assert_eq!(absolute[0].x, 0.0);
    assert_eq!(absolute[1].x, 19.69);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CoordModeSelected {
                mode: CoordMode::Relative,
            },
        )
        .unwrap();
    // Ursprung auf zweiten Punkt verschieben: ersten löschen
    controller
        .handle_intent(&mut state, AppIntent::DeleteRequested { index: 0 })
        .unwrap();

    let relative = export(&mut controller, &mut state);
    assert_eq!(relative.len(), 1);
    assert_eq!((relative[0].x, relative[0].y), (0.0, 0.0));
}

#[test]
fn test_export_to_file_writes_json() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 360.0, 360.0);

    let target = std::env::temp_dir().join(format!(
        "vex_path_mapper_export_{}.json",
        std::process::id()
    ));
    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportRequested {
                path: Some(target.to_string_lossy().into_owned()),
            },
        )
        .unwrap();

    let written = std::fs::read_to_string(&target).unwrap();
    let parsed: Vec<ExportedWaypoint> = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed.len(), 1);
    let _ = std::fs::remove_file(&target);
}

#[test]
fn test_compact_option_exports_single_line() {
    let mut controller = AppController::new();
    let mut options = MapperOptions::default();
    options.pretty_export = false;
    let mut state = AppState::with_options(options);
    click(&mut controller, &mut state, 360.0, 360.0);

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested { path: None })
        .unwrap();

    let json = state.ui.take_export().unwrap();
    assert!(!json.contains('\n'));
}
