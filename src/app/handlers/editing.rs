//! Handler für Wegpunkt-Editing.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Axis, Direction};

/// Hängt einen Wegpunkt an der geklickten Flächenposition an.
pub fn append_waypoint(state: &mut AppState, display_pos: glam::Vec2) -> anyhow::Result<()> {
    use_cases::editing::add_waypoint_at_display(state, display_pos)?;
    Ok(())
}

/// Löscht einen Wegpunkt.
pub fn delete_waypoint(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::editing::delete_waypoint(state, index)?;
    Ok(())
}

/// Setzt eine Koordinate im aktiven Rahmen.
pub fn edit_coordinate(
    state: &mut AppState,
    index: usize,
    axis: Axis,
    value: f64,
) -> anyhow::Result<()> {
    use_cases::editing::edit_coordinate(state, index, axis, value)?;
    Ok(())
}

/// Überschreibt das Heading eines Wegpunkts.
pub fn edit_heading(state: &mut AppState, index: usize, value: f64) -> anyhow::Result<()> {
    use_cases::editing::edit_heading(state, index, value)?;
    Ok(())
}

/// Setzt die Geschwindigkeit eines Wegpunkts.
pub fn edit_speed(state: &mut AppState, index: usize, value: f64) -> anyhow::Result<()> {
    use_cases::editing::edit_speed(state, index, value)?;
    Ok(())
}

/// Setzt die Fahrtrichtung eines Wegpunkts.
pub fn set_direction(state: &mut AppState, index: usize, direction: Direction) -> anyhow::Result<()> {
    use_cases::editing::set_direction(state, index, direction)?;
    Ok(())
}

/// Leert den Pfad.
pub fn clear_path(state: &mut AppState) {
    use_cases::editing::clear_path(state);
}
