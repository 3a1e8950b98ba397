//! Ein einzelner Wegpunkt des Pfads.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fahrtrichtung des Roboters zum Wegpunkt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Vorwärts fahren
    #[default]
    Forward,
    /// Rückwärts fahren
    Backward,
}

impl Direction {
    /// Bezeichner wie im Export (`forward`/`backward`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" | "fwd" | "f" => Ok(Direction::Forward),
            "backward" | "back" | "b" => Ok(Direction::Backward),
            other => Err(format!("unbekannte Richtung: {other}")),
        }
    }
}

/// Wegpunkt mit Position, Heading, Geschwindigkeit und Richtung
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Position auf der Anzeige-Fläche (Pixel)
    pub position_display: Vec2,
    /// Position im Feld (Zoll, absolut, auf 0.01 gerundet)
    pub position_real: Vec2,
    /// Heading in ganzen Grad, (-180, 180]
    pub heading: i32,
    /// Geschwindigkeit (Standard 100)
    pub speed: f32,
    /// Fahrtrichtung
    pub direction: Direction,
}

impl Waypoint {
    /// Standard-Geschwindigkeit neuer Wegpunkte.
    pub const DEFAULT_SPEED: f32 = 100.0;

    /// Erstellt einen Wegpunkt mit Standard-Geschwindigkeit und -Richtung.
    pub fn new(position_display: Vec2, position_real: Vec2, heading: i32) -> Self {
        Self {
            position_display,
            position_real,
            heading,
            speed: Self::DEFAULT_SPEED,
            direction: Direction::default(),
        }
    }
}
