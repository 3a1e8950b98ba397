//! Use-Case: Wegpunkt löschen (inkl. Heading-Neuberechnung).

use crate::app::AppState;
use crate::core::PathResult;

/// Löscht den Wegpunkt an `index`. Alle Headings werden neu berechnet,
/// der neue erste Wegpunkt erhält das Start-Heading.
pub fn delete_waypoint(state: &mut AppState, index: usize) -> PathResult<()> {
    let removed = state.mutate_path(|path| path.delete(index))?;
    log::info!(
        "Wegpunkt {} ({:.2}, {:.2}) gelöscht, {} verbleibend",
        index + 1,
        removed.position_real.x,
        removed.position_real.y,
        state.path.len()
    );
    Ok(())
}
