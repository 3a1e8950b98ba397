//! Builder für Tabellen-Zeilen aus dem PathModel.

use crate::core::PathModel;
use crate::shared::TableRow;

/// Liefert eine Zeile pro Wegpunkt, Koordinaten im aktiven Rahmen.
pub fn build_rows(path: &PathModel) -> Vec<TableRow> {
    path.waypoints()
        .iter()
        .enumerate()
        .map(|(i, wp)| {
            let framed = path.to_frame(wp.position_real);
            TableRow {
                row: i + 1,
                x: framed.x,
                y: framed.y,
                heading: wp.heading,
                speed: wp.speed,
                direction: wp.direction,
            }
        })
        .collect()
}
