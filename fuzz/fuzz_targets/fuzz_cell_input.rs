#![no_main]

use libfuzzer_sys::fuzz_target;
use vex_path_mapper::{AppController, AppIntent, AppState, TableField};

// Beliebiger Zelltext darf nie paniken und nie NaN in den Pfad schreiben.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut controller = AppController::new();
    let mut state = AppState::new();
    let _ = controller.handle_intent(
        &mut state,
        AppIntent::CanvasClicked {
            display_pos: glam::Vec2::new(360.0, 360.0),
        },
    );
    let _ = controller.handle_intent(
        &mut state,
        AppIntent::CanvasClicked {
            display_pos: glam::Vec2::new(420.0, 300.0),
        },
    );

    for field in [TableField::X, TableField::Y, TableField::Heading, TableField::Speed] {
        let _ = controller.handle_intent(
            &mut state,
            AppIntent::CellEdited {
                index: 1,
                field,
                text: text.to_string(),
            },
        );
    }

    for wp in state.path.waypoints() {
        assert!(wp.position_real.is_finite());
        assert!(wp.speed.is_finite());
        assert!(wp.heading > -180 && wp.heading <= 180);
    }
});
