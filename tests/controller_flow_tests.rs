use glam::Vec2;
use vex_path_mapper::{AppCommand, AppController, AppIntent, AppState, CoordMode, TableField};

mod controller_flow;

#[test]
fn test_export_requested_logs_export_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested { path: None })
        .expect("ExportRequested sollte ohne Fehler durchlaufen");

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::ExportPath { path } => assert!(path.is_none()),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
    assert_eq!(state.ui.take_export().as_deref(), Some("[]"));
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::RequestExit)
    ));
}

#[test]
fn test_rejected_cell_edit_creates_no_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasClicked {
                display_pos: Vec2::new(360.0, 360.0),
            },
        )
        .unwrap();
    let logged_before = state.command_log.len();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::CellEdited {
            index: 0,
            field: TableField::X,
            text: "zwölf".to_string(),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.command_log.len(), logged_before);
    assert_eq!(state.path.waypoints()[0].position_real, Vec2::ZERO);
}

#[test]
fn test_coord_mode_roundtrip_keeps_absolute_export() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for pos in [Vec2::new(100.0, 600.0), Vec2::new(300.0, 420.0), Vec2::new(512.0, 80.0)] {
        controller
            .handle_intent(&mut state, AppIntent::CanvasClicked { display_pos: pos })
            .unwrap();
    }
    let before = state.path.export();

    for mode in [CoordMode::Relative, CoordMode::Absolute] {
        controller
            .handle_intent(&mut state, AppIntent::CoordModeSelected { mode })
            .unwrap();
    }

    assert_eq!(state.path.export(), before);
}

#[test]
fn test_scene_and_table_follow_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasClicked {
                display_pos: Vec2::new(200.0, 200.0),
            },
        )
        .unwrap();

    let scene = controller.build_scene(&state);
    let table = controller.build_table(&state);
    assert_eq!(scene.markers.len(), 1);
    assert!(scene.start_arrow.is_some());
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].row, 1);
}
