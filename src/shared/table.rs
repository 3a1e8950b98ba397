//! Tabellen-Zeilen als Übergabevertrag an die Wegpunkt-Tabelle.

use crate::core::Direction;

/// Eine Zeile der Wegpunkt-Tabelle (Koordinaten im aktiven Rahmen)
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// 1-basierte Zeilennummer
    pub row: usize,
    pub x: f32,
    pub y: f32,
    pub heading: i32,
    pub speed: f32,
    pub direction: Direction,
}

/// Editierbare Spalten der Tabelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableField {
    X,
    Y,
    Heading,
    Speed,
}

impl std::str::FromStr for TableField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(TableField::X),
            "y" => Ok(TableField::Y),
            "heading" | "h" => Ok(TableField::Heading),
            "speed" | "s" => Ok(TableField::Speed),
            other => Err(format!("unbekannte Spalte: {other}")),
        }
    }
}

impl std::fmt::Display for TableRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>3} | {:>8} | {:>8} | {:>5} | {:>6} | {}",
            self.row,
            self.x,
            self.y,
            self.heading,
            self.speed,
            self.direction.as_str()
        )
    }
}
