//! Export des Pfads als JSON-Route.

use super::path_model::PathModel;
use super::waypoint::Direction;
use serde::{Deserialize, Serialize};

/// Ein exportierter Wegpunkt im aktiven Koordinaten-Rahmen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedWaypoint {
    pub x: f32,
    pub y: f32,
    pub heading: i32,
    pub speed: f32,
    pub direction: Direction,
}

impl PathModel {
    /// Liefert alle Wegpunkte in Fahrreihenfolge im aktiven Rahmen.
    pub fn export(&self) -> Vec<ExportedWaypoint> {
        self.waypoints()
            .iter()
            .map(|wp| {
                let framed = self.to_frame(wp.position_real);
                ExportedWaypoint {
                    x: framed.x,
                    y: framed.y,
                    heading: wp.heading,
                    speed: wp.speed,
                    direction: wp.direction,
                }
            })
            .collect()
    }
}

/// Serialisiert die Route als JSON-Array.
///
/// `pretty` rückt mit zwei Leerzeichen ein.
pub fn write_route_json(path: &PathModel, pretty: bool) -> anyhow::Result<String> {
    let route = path.export();
    let json = if pretty {
        serde_json::to_string_pretty(&route)?
    } else {
        serde_json::to_string(&route)?
    };
    Ok(json)
}
