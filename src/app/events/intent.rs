use crate::core::{CoordMode, Direction};
use crate::shared::TableField;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick auf die Zeichenfläche (Pixel-Koordinaten)
    CanvasClicked { display_pos: glam::Vec2 },
    /// Tabellenzelle wurde verlassen (Rohtext der Zelle, 0-basierter Index)
    CellEdited {
        index: usize,
        field: TableField,
        text: String,
    },
    /// Richtung im Dropdown gewählt
    DirectionSelected { index: usize, direction: Direction },
    /// Löschen-Button einer Zeile
    DeleteRequested { index: usize },
    /// Koordinatenmodus im Dropdown gewählt
    CoordModeSelected { mode: CoordMode },
    /// Eingabefeld für das Start-Heading geändert (Rohtext)
    StartingHeadingEdited { text: String },
    /// Route exportieren (optional in eine Datei)
    ExportRequested { path: Option<String> },
    /// Route leeren
    ClearRequested,
    /// Letzte Änderung rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Änderung wiederholen
    RedoRequested,
    /// Sitzung beenden
    ExitRequested,
}
