//! Use-Case-Funktionen für Wegpunkt-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_waypoint` — Wegpunkt per Klick anhängen
//! - `delete_waypoint` — Wegpunkt löschen
//! - `edit_fields` — Tabellen-Bearbeitung (Position, Heading, Geschwindigkeit, Richtung)
//! - `clear_path` — gesamten Pfad leeren

mod add_waypoint;
mod clear_path;
mod delete_waypoint;
mod edit_fields;

pub use add_waypoint::add_waypoint_at_display;
pub use clear_path::clear_path;
pub use delete_waypoint::delete_waypoint;
pub use edit_fields::{edit_coordinate, edit_heading, edit_speed, set_direction};
