//! VEX Path Mapper Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState};
pub use core::{
    parse_cell_value, write_route_json, Axis, CoordMode, Direction, ExportedWaypoint,
    FieldTransform, PathError, PathModel, Waypoint,
};
pub use shared::{MapperOptions, PathScene, TableField, TableRow};
