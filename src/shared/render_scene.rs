//! Pfad-Szene als expliziter Übergabevertrag zwischen App und Zeichenfläche.
//!
//! Lebt im shared-Modul, da `app` sie baut und externe Renderer sie konsumieren.

use glam::Vec2;

/// Ein Wegpunkt-Marker mit Beschriftung
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMarker {
    /// Position auf der Anzeige-Fläche
    pub position: Vec2,
    /// Koordinaten-Beschriftung im aktiven Rahmen, z.B. `(12.5,-3)`
    pub coord_label: String,
    /// Heading-Beschriftung, z.B. `H:90°`
    pub heading_label: String,
}

/// Read-only Daten für einen Zeichen-Durchlauf.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathScene {
    /// Größe der Anzeige-Fläche
    pub surface_size: Vec2,
    /// Verbindungslinie durch alle Wegpunkte (Anzeige-Koordinaten)
    pub polyline: Vec<Vec2>,
    /// Marker in Fahrreihenfolge
    pub markers: Vec<SceneMarker>,
    /// Start-Pfeil am ersten Wegpunkt (Anfang, Spitze)
    pub start_arrow: Option<[Vec2; 2]>,
}

impl PathScene {
    /// Gibt zurück, ob eine Linie gezeichnet werden muss (mindestens 2 Punkte).
    pub fn has_polyline(&self) -> bool {
        self.polyline.len() > 1
    }
}
