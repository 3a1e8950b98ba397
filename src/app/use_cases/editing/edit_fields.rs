//! Use-Cases: Tabellen-Bearbeitung einzelner Wegpunkt-Felder.

use crate::app::AppState;
use crate::core::{Axis, Direction, PathResult};

/// Setzt eine Koordinate (im aktiven Rahmen) und berechnet Headings ab
/// diesem Wegpunkt neu.
pub fn edit_coordinate(state: &mut AppState, index: usize, axis: Axis, value: f64) -> PathResult<()> {
    state.mutate_path(|path| path.edit_axis(index, axis, value))?;
    log::info!("Wegpunkt {}: {:?} = {}", index + 1, axis, value);
    Ok(())
}

/// Überschreibt das Heading manuell; Folgepunkte bleiben unverändert.
pub fn edit_heading(state: &mut AppState, index: usize, value: f64) -> PathResult<()> {
    state.mutate_path(|path| path.edit_heading(index, value))?;
    log::info!("Wegpunkt {}: Heading manuell auf {}°", index + 1, value);
    Ok(())
}

/// Setzt die Geschwindigkeit.
pub fn edit_speed(state: &mut AppState, index: usize, value: f64) -> PathResult<()> {
    state.mutate_path(|path| path.edit_speed(index, value))?;
    log::info!("Wegpunkt {}: Geschwindigkeit {}", index + 1, value);
    Ok(())
}

/// Setzt die Fahrtrichtung. Unveränderte Richtung erzeugt keinen Undo-Schritt.
pub fn set_direction(state: &mut AppState, index: usize, direction: Direction) -> PathResult<()> {
    if state.path.get(index).is_some_and(|wp| wp.direction == direction) {
        log::debug!("Wegpunkt {}: Richtung bereits {:?}", index + 1, direction);
        return Ok(());
    }
    state.mutate_path(|path| path.edit_direction(index, direction))?;
    log::info!("Wegpunkt {}: Richtung {:?}", index + 1, direction);
    Ok(())
}
