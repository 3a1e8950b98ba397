//! Use-Case: Neuen Wegpunkt an einer Flächenposition anhängen.

use crate::app::AppState;
use crate::core::PathResult;

/// Hängt einen Wegpunkt an der geklickten Flächenposition an.
///
/// Das Heading ergibt sich aus dem bisherigen letzten Wegpunkt, der erste
/// Wegpunkt erhält das Start-Heading.
pub fn add_waypoint_at_display(state: &mut AppState, display_pos: glam::Vec2) -> PathResult<()> {
    let index = state.mutate_path(|path| path.append_display(display_pos))?;

    let wp = &state.path.waypoints()[index];
    log::info!(
        "Wegpunkt {} bei ({:.2}, {:.2}) hinzugefügt, Heading {}°",
        index + 1,
        wp.position_real.x,
        wp.position_real.y,
        wp.heading
    );
    Ok(())
}
