//! Handler für Anwendungssteuerung.

use crate::app::AppState;

/// Markiert die Sitzung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    log::info!("Beenden angefordert");
}
