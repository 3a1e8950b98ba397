//! Das PathModel: geordnete Wegpunkte, Koordinaten-Rahmen und Heading-Pflege.

use super::error::{PathError, PathResult};
use super::field::{round_real_vec, FieldTransform};
use super::heading::{heading_between, is_valid_heading, normalize_heading};
use super::waypoint::{Direction, Waypoint};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Koordinaten-Rahmen für Anzeige und Export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordMode {
    /// Absolute Feld-Koordinaten
    #[default]
    Absolute,
    /// Relativ zum ersten Wegpunkt
    Relative,
}

impl std::str::FromStr for CoordMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absolute" | "abs" => Ok(CoordMode::Absolute),
            "relative" | "rel" => Ok(CoordMode::Relative),
            other => Err(format!("unbekannter Koordinatenmodus: {other}")),
        }
    }
}

/// Koordinaten-Achse für Einzelwert-Bearbeitung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Geordneter Pfad aus Wegpunkten.
///
/// Positionen werden immer absolut gespeichert; der relative Modus ändert nur
/// die Rahmung in Anzeige und Export. Headings ab Index 1 werden aus den
/// Positionen abgeleitet, Index 0 trägt immer das Start-Heading.
#[derive(Debug, Clone, PartialEq)]
pub struct PathModel {
    waypoints: Vec<Waypoint>,
    coord_mode: CoordMode,
    /// Ursprung des relativen Rahmens (= erster Wegpunkt im relativen Modus)
    relative_origin: Vec2,
    /// Referenzwinkel in Grad
    starting_heading: f64,
    field: FieldTransform,
    default_speed: f32,
    default_direction: Direction,
}

impl PathModel {
    /// Erstellt einen leeren Pfad.
    pub fn new(field: FieldTransform, starting_heading: f64) -> Self {
        Self {
            waypoints: Vec::new(),
            coord_mode: CoordMode::Absolute,
            relative_origin: Vec2::ZERO,
            starting_heading: if starting_heading.is_finite() {
                starting_heading
            } else {
                0.0
            },
            field,
            default_speed: Waypoint::DEFAULT_SPEED,
            default_direction: Direction::default(),
        }
    }

    /// Setzt Geschwindigkeit und Richtung, die neue Wegpunkte erhalten.
    pub fn with_defaults(mut self, speed: f32, direction: Direction) -> Self {
        if speed.is_finite() && speed >= 0.0 {
            self.default_speed = speed;
        } else {
            log::warn!("Ungültige Standard-Geschwindigkeit {speed}, behalte {}", self.default_speed);
        }
        self.default_direction = direction;
        self
    }

    // ── Lesen ──────────────────────────────────────────────────────

    /// Anzahl der Wegpunkte.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Gibt `true` zurück, wenn der Pfad leer ist.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Alle Wegpunkte in Fahrreihenfolge.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Wegpunkt an `index`.
    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Aktiver Koordinaten-Rahmen.
    pub fn coord_mode(&self) -> CoordMode {
        self.coord_mode
    }

    /// Ursprung des relativen Rahmens, falls aktiv.
    pub fn relative_origin(&self) -> Option<Vec2> {
        match self.coord_mode {
            CoordMode::Relative if !self.waypoints.is_empty() => Some(self.relative_origin),
            _ => None,
        }
    }

    /// Konfiguriertes Start-Heading in Grad.
    pub fn starting_heading(&self) -> f64 {
        self.starting_heading
    }

    /// Abbildung Anzeige ↔ Feld.
    pub fn field(&self) -> &FieldTransform {
        &self.field
    }

    /// Rechnet eine absolute Feldposition in den aktiven Rahmen um.
    pub fn to_frame(&self, real: Vec2) -> Vec2 {
        match self.relative_origin() {
            Some(origin) => round_real_vec(real - origin),
            None => real,
        }
    }

    /// Rechnet eine Position im aktiven Rahmen in absolute Feldkoordinaten um.
    pub fn from_frame(&self, framed: Vec2) -> Vec2 {
        match self.relative_origin() {
            Some(origin) => round_real_vec(origin + framed),
            None => round_real_vec(framed),
        }
    }

    /// Position von Wegpunkt `index` im aktiven Rahmen.
    pub fn frame_position(&self, index: usize) -> PathResult<Vec2> {
        self.check_index(index)?;
        Ok(self.to_frame(self.waypoints[index].position_real))
    }

    // ── Struktur ───────────────────────────────────────────────────

    /// Hängt einen per Klick platzierten Wegpunkt an. Gibt den neuen Index zurück.
    pub fn append_display(&mut self, display: Vec2) -> PathResult<usize> {
        if !self.field.contains_display(display) {
            return Err(PathError::OutsideField {
                x: display.x,
                y: display.y,
            });
        }
        let real = self.field.display_to_real(display);
        Ok(self.push(display, real))
    }

    /// Hängt einen Wegpunkt an einer Feldposition (absolute Zoll) an.
    pub fn append_real(&mut self, real: Vec2) -> PathResult<usize> {
        let real = Self::checked_real(real)?;
        let display = self.field.real_to_display(real);
        Ok(self.push(display, real))
    }

    fn push(&mut self, display: Vec2, real: Vec2) -> usize {
        let heading = match self.waypoints.last() {
            Some(prev) => heading_between(prev.position_real, real, self.starting_heading),
            None => normalize_heading(self.starting_heading),
        };
        let mut waypoint = Waypoint::new(display, real, heading);
        waypoint.speed = self.default_speed;
        waypoint.direction = self.default_direction;
        self.waypoints.push(waypoint);
        self.sync_relative_origin();
        self.waypoints.len() - 1
    }

    /// Entfernt Wegpunkt `index` und berechnet alle Headings neu.
    pub fn delete(&mut self, index: usize) -> PathResult<Waypoint> {
        self.check_index(index)?;
        let removed = self.waypoints.remove(index);
        self.recompute_headings_from(0);
        self.sync_relative_origin();
        Ok(removed)
    }

    /// Leert den Pfad.
    pub fn clear(&mut self) {
        self.waypoints.clear();
        self.relative_origin = Vec2::ZERO;
    }

    // ── Feld-Bearbeitung ───────────────────────────────────────────

    /// Setzt die absolute Feldposition und berechnet das Heading dieses und
    /// aller folgenden Wegpunkte neu.
    pub fn edit_position(&mut self, index: usize, real: Vec2) -> PathResult<()> {
        self.check_index(index)?;
        let real = Self::checked_real(real)?;
        let waypoint = &mut self.waypoints[index];
        waypoint.position_real = real;
        waypoint.position_display = self.field.real_to_display(real);
        self.recompute_headings_from(index);
        self.sync_relative_origin();
        Ok(())
    }

    /// Setzt eine Koordinate, angegeben im aktiven Rahmen.
    pub fn edit_axis(&mut self, index: usize, axis: Axis, framed_value: f64) -> PathResult<()> {
        let mut framed = self.frame_position(index)?;
        let value = framed_value as f32;
        if !value.is_finite() {
            return Err(PathError::InvalidNumber {
                input: framed_value.to_string(),
            });
        }
        match axis {
            Axis::X => framed.x = value,
            Axis::Y => framed.y = value,
        }
        let real = self.from_frame(framed);
        self.edit_position(index, real)
    }

    /// Manueller Heading-Override ohne Neuberechnung der Folgepunkte.
    pub fn edit_heading(&mut self, index: usize, value: f64) -> PathResult<()> {
        self.check_index(index)?;
        if index == 0 {
            return Err(PathError::FirstHeadingFixed);
        }
        if !is_valid_heading(value) {
            return Err(PathError::HeadingOutOfRange { value });
        }
        self.waypoints[index].heading = value as i32;
        Ok(())
    }

    /// Setzt die Geschwindigkeit (endlich, nicht negativ).
    pub fn edit_speed(&mut self, index: usize, value: f64) -> PathResult<()> {
        self.check_index(index)?;
        if !value.is_finite() || value < 0.0 || value > f64::from(f32::MAX) {
            return Err(PathError::InvalidSpeed { value });
        }
        self.waypoints[index].speed = value as f32;
        Ok(())
    }

    /// Setzt die Fahrtrichtung.
    pub fn edit_direction(&mut self, index: usize, direction: Direction) -> PathResult<()> {
        self.check_index(index)?;
        self.waypoints[index].direction = direction;
        Ok(())
    }

    // ── Rahmen & Referenz ──────────────────────────────────────────

    /// Wechselt den Koordinaten-Rahmen. Gespeicherte Positionen bleiben unverändert.
    pub fn set_coord_mode(&mut self, mode: CoordMode) {
        self.coord_mode = mode;
        self.sync_relative_origin();
    }

    /// Setzt das Start-Heading und berechnet alle Headings neu.
    pub fn set_starting_heading(&mut self, degrees: f64) -> PathResult<()> {
        if !degrees.is_finite() {
            return Err(PathError::InvalidNumber {
                input: degrees.to_string(),
            });
        }
        self.starting_heading = degrees;
        self.recompute_headings_from(0);
        Ok(())
    }

    // ── Intern ─────────────────────────────────────────────────────

    fn check_index(&self, index: usize) -> PathResult<()> {
        if index < self.waypoints.len() {
            Ok(())
        } else {
            Err(PathError::IndexOutOfRange {
                index,
                len: self.waypoints.len(),
            })
        }
    }

    /// Rundet auf 0.01 und lehnt nicht-endliche Werte ab (auch nach dem Runden).
    fn checked_real(real: Vec2) -> PathResult<Vec2> {
        let rounded = round_real_vec(real);
        if rounded.is_finite() {
            Ok(rounded)
        } else {
            Err(PathError::InvalidNumber {
                input: format!("{real}"),
            })
        }
    }

    /// Berechnet Headings ab `start` bis zum Ende neu.
    fn recompute_headings_from(&mut self, start: usize) {
        for i in start..self.waypoints.len() {
            self.waypoints[i].heading = if i == 0 {
                normalize_heading(self.starting_heading)
            } else {
                heading_between(
                    self.waypoints[i - 1].position_real,
                    self.waypoints[i].position_real,
                    self.starting_heading,
                )
            };
        }
    }

    fn sync_relative_origin(&mut self) {
        if self.coord_mode != CoordMode::Relative {
            return;
        }
        if let Some(first) = self.waypoints.first() {
            self.relative_origin = first.position_real;
        }
    }
}

impl Default for PathModel {
    fn default() -> Self {
        Self::new(FieldTransform::default(), 0.0)
    }
}
