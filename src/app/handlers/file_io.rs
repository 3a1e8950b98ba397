//! Handler für den Routen-Export.

use crate::app::use_cases;
use crate::app::AppState;

/// Exportiert die Route (optional in eine Datei).
pub fn export(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::export::export_path(state, path)
}
