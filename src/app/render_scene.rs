//! Builder für Zeichen-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{PathScene, SceneMarker};
use glam::Vec2;

/// Baut eine PathScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> PathScene {
    let path = &state.path;

    let markers = path
        .waypoints()
        .iter()
        .map(|wp| {
            let framed = path.to_frame(wp.position_real);
            SceneMarker {
                position: wp.position_display,
                coord_label: format!("({},{})", framed.x, framed.y),
                heading_label: format!("H:{}°", wp.heading),
            }
        })
        .collect();

    // Pfeil in Richtung des Start-Headings (mathematischer Winkel, Y der Fläche nach unten)
    let start_arrow = path.waypoints().first().map(|first| {
        let angle = path.starting_heading().to_radians() as f32;
        let tip = first.position_display
            + state.options.start_arrow_length_px * Vec2::new(angle.cos(), -angle.sin());
        [first.position_display, tip]
    });

    PathScene {
        surface_size: path.field().surface_size(),
        polyline: path.waypoints().iter().map(|wp| wp.position_display).collect(),
        markers,
        start_arrow,
    }
}
