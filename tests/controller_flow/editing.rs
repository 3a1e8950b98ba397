use glam::Vec2;
use std::sync::Arc;
use vex_path_mapper::{
    AppController, AppIntent, AppState, Direction, FieldTransform, PathModel, TableField,
};

/// Pfad A(0,0) → B(10,0) → C(20,0) → D(20,10) in Feld-Zoll.
fn make_test_state() -> AppState {
    let mut path = PathModel::new(FieldTransform::default(), 0.0);
    for (x, y) in [(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (20.0, 10.0)] {
        path.append_real(Vec2::new(x, y)).unwrap();
    }
    let mut state = AppState::new();
    state.path = Arc::new(path);
    state
}

fn headings(state: &AppState) -> Vec<i32> {
    state.path.waypoints().iter().map(|w| w.heading).collect()
}

#[test]
fn test_canvas_click_appends_waypoint() {
    let mut controller = AppController::new();
    let mut state = make_test_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasClicked {
                display_pos: Vec2::new(360.0, 360.0),
            },
        )
        .expect("CanvasClicked darf nicht fehlschlagen");

    assert_eq!(state.waypoint_count(), 5);
    let last = state.path.waypoints().last().unwrap();
    assert_eq!(last.position_real, Vec2::ZERO);
    // (20,10) → (0,0): Peilung ~-153.4° → Heading 153
    assert_eq!(last.heading, 153);
}

#[test]
fn test_click_outside_field_is_rejected() {
    let mut controller = AppController::new();
    let mut state = make_test_state();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::CanvasClicked {
            display_pos: Vec2::new(900.0, 10.0),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.waypoint_count(), 4);
    assert!(!state.can_undo());
}

#[test]
fn test_delete_middle_waypoint_recomputes_headings() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    assert_eq!(headings(&state), vec![0, 0, 0, -90]);

    controller
        .handle_intent(&mut state, AppIntent::DeleteRequested { index: 2 })
        .expect("DeleteRequested darf nicht fehlschlagen");

    // B(10,0) → D(20,10): 45° Peilung
    assert_eq!(headings(&state), vec![0, 0, -45]);
}

#[test]
fn test_delete_first_waypoint_keeps_start_heading_on_new_first() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    controller
        .handle_intent(
            &mut state,
            AppIntent::StartingHeadingEdited {
                text: "30".to_string(),
            },
        )
        .unwrap();

    controller
        .handle_intent(&mut state, AppIntent::DeleteRequested { index: 0 })
        .unwrap();

    assert_eq!(state.path.waypoints()[0].heading, 30);
}

#[test]
fn test_edit_y_recomputes_edited_and_downstream() {
    let mut controller = AppController::new();
    let mut state = make_test_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CellEdited {
                index: 1,
                field: TableField::Y,
                text: "10".to_string(),
            },
        )
        .unwrap();

    // A(0,0) → B(10,10) → C(20,0) → D(20,10)
    assert_eq!(headings(&state), vec![0, -45, 45, -90]);
}

#[test]
fn test_heading_override_does_not_touch_downstream() {
    let mut controller = AppController::new();
    let mut state = make_test_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CellEdited {
                index: 2,
                field: TableField::Heading,
                text: "120".to_string(),
            },
        )
        .unwrap();

    assert_eq!(headings(&state), vec![0, 0, 120, -90]);
}

#[test]
fn test_invalid_speed_keeps_prior_value() {
    let mut controller = AppController::new();
    let mut state = make_test_state();

    for text in ["", "schnell", "-5"] {
        let result = controller.handle_intent(
            &mut state,
            AppIntent::CellEdited {
                index: 0,
                field: TableField::Speed,
                text: text.to_string(),
            },
        );
        assert!(result.is_err(), "{text:?} muss abgelehnt werden");
    }

    assert_eq!(state.path.waypoints()[0].speed, 100.0);
}

#[test]
fn test_direction_change_has_no_side_effects() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    let before = headings(&state);

    controller
        .handle_intent(
            &mut state,
            AppIntent::DirectionSelected {
                index: 3,
                direction: Direction::Backward,
            },
        )
        .unwrap();

    assert_eq!(state.path.waypoints()[3].direction, Direction::Backward);
    assert_eq!(headings(&state), before);
}

#[test]
fn test_out_of_range_index_is_error() {
    let mut controller = AppController::new();
    let mut state = make_test_state();

    let result = controller.handle_intent(&mut state, AppIntent::DeleteRequested { index: 9 });

    assert!(result.is_err());
    assert_eq!(state.waypoint_count(), 4);
}

#[test]
fn test_clear_empties_path() {
    let mut controller = AppController::new();
    let mut state = make_test_state();

    controller
        .handle_intent(&mut state, AppIntent::ClearRequested)
        .unwrap();

    assert!(state.path.is_empty());
}
