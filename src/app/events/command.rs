use crate::core::{Axis, CoordMode, Direction};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Wegpunkt an Flächenposition anhängen
    AppendWaypoint { display_pos: glam::Vec2 },
    /// Wegpunkt löschen
    DeleteWaypoint { index: usize },
    /// Eine Koordinate im aktiven Rahmen setzen
    EditCoordinate { index: usize, axis: Axis, value: f64 },
    /// Heading manuell überschreiben
    EditHeading { index: usize, value: f64 },
    /// Geschwindigkeit setzen
    EditSpeed { index: usize, value: f64 },
    /// Fahrtrichtung setzen
    SetDirection { index: usize, direction: Direction },
    /// Koordinaten-Rahmen wechseln
    SetCoordMode { mode: CoordMode },
    /// Start-Heading setzen (berechnet alle Headings neu)
    SetStartingHeading { degrees: f64 },
    /// Pfad leeren
    ClearPath,
    /// Route als JSON exportieren
    ExportPath { path: Option<String> },
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// Sitzung beenden
    RequestExit,
}
