//! Application Controller für zentrale Event-Verarbeitung.

use super::{render_scene, table};
use super::{AppCommand, AppIntent, AppState};
use crate::shared::{PathScene, TableRow};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Ungültige Eingaben werden abgelehnt, bevor ein Command entsteht.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent)?;
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::AppendWaypoint { display_pos } => {
                handlers::editing::append_waypoint(state, display_pos)?
            }
            AppCommand::DeleteWaypoint { index } => {
                handlers::editing::delete_waypoint(state, index)?
            }
            AppCommand::EditCoordinate { index, axis, value } => {
                handlers::editing::edit_coordinate(state, index, axis, value)?
            }
            AppCommand::EditHeading { index, value } => {
                handlers::editing::edit_heading(state, index, value)?
            }
            AppCommand::EditSpeed { index, value } => {
                handlers::editing::edit_speed(state, index, value)?
            }
            AppCommand::SetDirection { index, direction } => {
                handlers::editing::set_direction(state, index, direction)?
            }
            AppCommand::ClearPath => handlers::editing::clear_path(state),

            // === Rahmen ===
            AppCommand::SetCoordMode { mode } => handlers::view::set_coord_mode(state, mode),
            AppCommand::SetStartingHeading { degrees } => {
                handlers::view::set_starting_heading(state, degrees)?
            }

            // === Export ===
            AppCommand::ExportPath { path } => handlers::file_io::export(state, path)?,

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Zeichen-Szene aus dem aktuellen AppState.
    pub fn build_scene(&self, state: &AppState) -> PathScene {
        render_scene::build(state)
    }

    /// Baut die Tabellen-Zeilen aus dem aktuellen AppState.
    pub fn build_table(&self, state: &AppState) -> Vec<TableRow> {
        table::build_rows(&state.path)
    }
}
