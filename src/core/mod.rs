//! Core-Domänentypen: Wegpunkte, PathModel, Feld-Abbildung, Headings, Export.

pub mod error;
pub mod export;
pub mod field;
pub mod heading;
/// Core-Datenmodell für Pfade
///
/// - PathModel: geordnete Wegpunkte mit Koordinaten-Rahmen
/// - Waypoint: Position, Heading, Geschwindigkeit, Richtung
pub mod path_model;
pub mod waypoint;

pub use error::{parse_cell_value, PathError, PathResult};
pub use export::{write_route_json, ExportedWaypoint};
pub use field::{round_real, FieldTransform};
pub use heading::{heading_between, normalize_heading};
pub use path_model::{Axis, CoordMode, PathModel};
pub use waypoint::{Direction, Waypoint};
