//! Handler für Koordinaten-Rahmen und Start-Heading.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CoordMode;

/// Wechselt zwischen absolutem und relativem Rahmen.
pub fn set_coord_mode(state: &mut AppState, mode: CoordMode) {
    use_cases::frame::set_coord_mode(state, mode);
}

/// Setzt das Start-Heading.
pub fn set_starting_heading(state: &mut AppState, degrees: f64) -> anyhow::Result<()> {
    use_cases::frame::set_starting_heading(state, degrees)?;
    Ok(())
}
