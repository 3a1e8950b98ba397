//! Zentrale Konfiguration für den VEX Path Mapper.
//!
//! `MapperOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CoordMode, Direction, FieldTransform, PathModel, PathResult};
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Feld ────────────────────────────────────────────────────────────

/// Standard-Größe der Anzeige-Fläche in Pixeln [Breite, Höhe].
pub const SURFACE_SIZE_PX: [f32; 2] = [720.0, 720.0];
/// Kantenlänge des Feldes in Millimetern.
pub const FIELD_EXTENT_MM: f32 = FieldTransform::DEFAULT_FIELD_EXTENT_MM;

// ── Wegpunkte ───────────────────────────────────────────────────────

/// Standard-Start-Heading in Grad.
pub const STARTING_HEADING_DEG: f64 = 0.0;
/// Standard-Geschwindigkeit neuer Wegpunkte.
pub const DEFAULT_SPEED: f32 = 100.0;

// ── Szene ───────────────────────────────────────────────────────────

/// Länge des Start-Pfeils in Pixeln.
pub const START_ARROW_LENGTH_PX: f32 = 15.0;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Mapper-Optionen.
/// Wird als `vex_path_mapper.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperOptions {
    // ── Feld ────────────────────────────────────────────────────
    /// Größe der Anzeige-Fläche in Pixeln
    pub surface_size_px: [f32; 2],
    /// Kantenlänge des Feldes in Millimetern
    pub field_extent_mm: f32,

    // ── Wegpunkte ───────────────────────────────────────────────
    /// Referenzwinkel für Headings
    pub starting_heading_deg: f64,
    /// Geschwindigkeit neuer Wegpunkte
    pub default_speed: f32,
    /// Richtung neuer Wegpunkte
    pub default_direction: Direction,
    /// Koordinaten-Rahmen beim Start
    pub coord_mode: CoordMode,

    // ── Darstellung & Export ────────────────────────────────────
    /// Länge des Start-Pfeils in Pixeln
    pub start_arrow_length_px: f32,
    /// JSON eingerückt exportieren
    pub pretty_export: bool,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    pub history_depth: usize,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            surface_size_px: SURFACE_SIZE_PX,
            field_extent_mm: FIELD_EXTENT_MM,

            starting_heading_deg: STARTING_HEADING_DEG,
            default_speed: DEFAULT_SPEED,
            default_direction: Direction::Forward,
            coord_mode: CoordMode::Absolute,

            start_arrow_length_px: START_ARROW_LENGTH_PX,
            pretty_export: true,

            history_depth: HISTORY_DEPTH,
        }
    }
}

impl MapperOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("vex_path_mapper"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("vex_path_mapper.toml")
    }

    /// Baut die Feld-Abbildung aus Flächengröße und Feldmaß.
    pub fn field_transform(&self) -> PathResult<FieldTransform> {
        FieldTransform::new(Vec2::from(self.surface_size_px), self.field_extent_mm)
    }

    /// Erstellt einen leeren Pfad mit den konfigurierten Standardwerten.
    ///
    /// Ungültige Feldmaße fallen auf die Standard-Abbildung zurück.
    pub fn new_path(&self) -> PathModel {
        let field = self.field_transform().unwrap_or_else(|e| {
            log::warn!("{e}, verwende Standard-Feld");
            FieldTransform::default()
        });
        let mut path = PathModel::new(field, self.starting_heading_deg)
            .with_defaults(self.default_speed, self.default_direction);
        path.set_coord_mode(self.coord_mode);
        path
    }
}
