use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{PathModel, PathResult};
use crate::shared::MapperOptions;
use std::sync::Arc;

use super::UiState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktueller Pfad (Arc für O(1)-Snapshots, Mutation per `Arc::make_mut`)
    pub path: Arc<PathModel>,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: MapperOptions,
    /// Signalisiert dem Host, die Sitzung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(MapperOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen
    pub fn with_options(options: MapperOptions) -> Self {
        Self {
            path: Arc::new(options.new_path()),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Wegpunkte zurück (für UI-Anzeige)
    pub fn waypoint_count(&self) -> usize {
        self.path.len()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Führt eine Mutation am Pfad aus und legt nur dann einen Undo-Snapshot
    /// an, wenn sie erfolgreich war und den Pfad tatsächlich verändert hat.
    /// Abgelehnte Mutationen lassen den Pfad unverändert.
    pub fn mutate_path<T>(
        &mut self,
        op: impl FnOnce(&mut PathModel) -> PathResult<T>,
    ) -> PathResult<T> {
        let snap = Snapshot::from_state(self);
        let result = op(Arc::make_mut(&mut self.path));
        if result.is_ok() {
            if *snap.path == *self.path {
                // Unveränderten Pfad wieder mit dem Snapshot teilen
                self.path = snap.path;
                log::debug!("Pfad unverändert, kein Undo-Schritt");
            } else {
                self.history.record_snapshot(snap);
            }
        }
        result
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
