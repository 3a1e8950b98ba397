//! Use-Case: Gesamten Pfad leeren.

use crate::app::AppState;
use std::sync::Arc;

/// Entfernt alle Wegpunkte. Ein leerer Pfad bleibt unverändert.
pub fn clear_path(state: &mut AppState) {
    if state.path.is_empty() {
        log::debug!("Pfad ist bereits leer");
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let count = state.path.len();
    Arc::make_mut(&mut state.path).clear();
    log::info!("Pfad geleert ({} Wegpunkte entfernt)", count);
}
