//! Heading-Berechnung zwischen aufeinanderfolgenden Wegpunkten.
//!
//! Headings sind roboterbezogen: 0° entspricht dem Start-Heading, positive
//! Werte drehen im Uhrzeigersinn. Wertebereich ist (-180, 180].

use glam::Vec2;

/// Bringt einen Winkel in den Bereich (-180, 180] und rundet auf ganze Grad.
///
/// Halbe Grad werden aufgerundet, auch bei negativen Winkeln.
pub fn normalize_heading(degrees: f64) -> i32 {
    let mut wrapped = degrees % 360.0;
    if wrapped > 180.0 {
        wrapped -= 360.0;
    }
    if wrapped <= -180.0 {
        wrapped += 360.0;
    }
    // .5 rundet Richtung +∞ (-89.5 → -89)
    let rounded = (wrapped + 0.5).floor() as i32;
    // -179.6 rundet auf -180, das liegt außerhalb des Bereichs
    if rounded <= -180 {
        rounded + 360
    } else {
        rounded
    }
}

/// Berechnet das Heading für die Fahrt von `from` nach `to`.
///
/// `heading = normalize(-(atan2(dy, dx)° - start_heading))`
pub fn heading_between(from: Vec2, to: Vec2, start_heading: f64) -> i32 {
    let delta = to - from;
    let bearing = f64::from(delta.y).atan2(f64::from(delta.x)).to_degrees();
    normalize_heading(-(bearing - start_heading))
}

/// Prüft ob ein manuell eingegebenes Heading gültig ist.
pub fn is_valid_heading(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value > -180.0 && value <= 180.0
}
