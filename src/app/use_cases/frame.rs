//! Use-Cases: Koordinaten-Rahmen und Start-Heading.

use crate::app::AppState;
use crate::core::{CoordMode, PathResult};
use std::sync::Arc;

/// Wechselt den Koordinaten-Rahmen für Anzeige und Export.
///
/// Gespeicherte Feldpositionen bleiben unverändert.
pub fn set_coord_mode(state: &mut AppState, mode: CoordMode) {
    if state.path.coord_mode() == mode {
        log::debug!("Koordinatenmodus bereits {:?}", mode);
        return;
    }

    state.record_undo_snapshot();
    Arc::make_mut(&mut state.path).set_coord_mode(mode);

    match state.path.relative_origin() {
        Some(origin) => log::info!(
            "Koordinatenmodus {:?}, Ursprung ({:.2}, {:.2})",
            mode,
            origin.x,
            origin.y
        ),
        None => log::info!("Koordinatenmodus {:?}", mode),
    }
}

/// Setzt das Start-Heading und berechnet alle Headings neu.
pub fn set_starting_heading(state: &mut AppState, degrees: f64) -> PathResult<()> {
    state.mutate_path(|path| path.set_starting_heading(degrees))?;
    log::info!("Start-Heading: {}°", degrees);
    Ok(())
}
