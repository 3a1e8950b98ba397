//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{parse_cell_value, Axis, PathResult};
use crate::shared::TableField;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Zahlen-Eingaben aus Tabellenzellen werden hier geparst; ungültiger Text
/// liefert einen Fehler und erzeugt keinen Command.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> PathResult<Vec<AppCommand>> {
    let commands = match intent {
        AppIntent::CanvasClicked { display_pos } => {
            vec![AppCommand::AppendWaypoint { display_pos }]
        }
        AppIntent::CellEdited { index, field, text } => {
            let value = parse_cell_value(&text)?;
            let command = match field {
                TableField::X => AppCommand::EditCoordinate {
                    index,
                    axis: Axis::X,
                    value,
                },
                TableField::Y => AppCommand::EditCoordinate {
                    index,
                    axis: Axis::Y,
                    value,
                },
                TableField::Heading => AppCommand::EditHeading { index, value },
                TableField::Speed => AppCommand::EditSpeed { index, value },
            };
            vec![command]
        }
        AppIntent::DirectionSelected { index, direction } => {
            vec![AppCommand::SetDirection { index, direction }]
        }
        AppIntent::DeleteRequested { index } => vec![AppCommand::DeleteWaypoint { index }],
        AppIntent::CoordModeSelected { mode } => vec![AppCommand::SetCoordMode { mode }],
        AppIntent::StartingHeadingEdited { text } => {
            let degrees = parse_cell_value(&text)?;
            vec![AppCommand::SetStartingHeading { degrees }]
        }
        AppIntent::ExportRequested { path } => vec![AppCommand::ExportPath { path }],
        AppIntent::ClearRequested => vec![AppCommand::ClearPath],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    };
    Ok(commands)
}
