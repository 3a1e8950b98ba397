//! Konsolen-Eingabe: Textzeilen → `AppIntent`s.
//!
//! Ersetzt Klick-, Blur- und Dropdown-Events der grafischen Oberfläche.
//! Zeilennummern sind 1-basiert wie in der Wegpunkt-Tabelle.

use crate::app::AppIntent;
use crate::core::{CoordMode, Direction};
use crate::shared::TableField;

/// Ergebnis einer geparsten Konsolenzeile
#[derive(Debug, Clone)]
pub enum ConsoleInput {
    /// Zeile erzeugt einen Intent für den Controller
    Intent(AppIntent),
    /// Tabelle ausgeben
    ShowTable,
    /// Hilfe ausgeben
    ShowHelp,
    /// Leerzeile oder Kommentar
    Empty,
}

/// Hilfetext für die Konsole.
pub const HELP: &str = "\
click <px> <py>                     Wegpunkt an Flächenposition anhängen
set <zeile> x|y|heading|speed <w>   Tabellenzelle bearbeiten
dir <zeile> forward|backward        Fahrtrichtung setzen
delete <zeile>                      Wegpunkt löschen
mode absolute|relative              Koordinatenmodus wechseln
start <grad>                        Start-Heading setzen
export [datei]                      Route als JSON ausgeben/speichern
clear | undo | redo | table | help | quit";

/// Parst eine Konsolenzeile. `#` leitet einen Kommentar ein.
pub fn parse_line(line: &str) -> Result<ConsoleInput, String> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        return Ok(ConsoleInput::Empty);
    };
    let args: Vec<&str> = parts.collect();

    let intent = match keyword.to_ascii_lowercase().as_str() {
        "click" => {
            let [x, y] = expect_args::<2>(keyword, &args)?;
            AppIntent::CanvasClicked {
                display_pos: glam::Vec2::new(parse_f32(x)?, parse_f32(y)?),
            }
        }
        "set" => {
            if args.len() < 3 {
                return Err("set erwartet <zeile> <spalte> <wert>".to_string());
            }
            AppIntent::CellEdited {
                index: parse_row(args[0])?,
                field: args[1].parse::<TableField>()?,
                // Rohtext: Validierung übernimmt das Intent-Mapping
                text: args[2..].join(" "),
            }
        }
        "dir" => {
            let [row, direction] = expect_args::<2>(keyword, &args)?;
            AppIntent::DirectionSelected {
                index: parse_row(row)?,
                direction: direction.parse::<Direction>()?,
            }
        }
        "delete" | "del" => {
            let [row] = expect_args::<1>(keyword, &args)?;
            AppIntent::DeleteRequested {
                index: parse_row(row)?,
            }
        }
        "mode" => {
            let [mode] = expect_args::<1>(keyword, &args)?;
            AppIntent::CoordModeSelected {
                mode: mode.parse::<CoordMode>()?,
            }
        }
        "start" => AppIntent::StartingHeadingEdited {
            text: args.join(" "),
        },
        "export" => AppIntent::ExportRequested {
            path: args.first().map(|p| p.to_string()),
        },
        "clear" => AppIntent::ClearRequested,
        "undo" => AppIntent::UndoRequested,
        "redo" => AppIntent::RedoRequested,
        "quit" | "exit" => AppIntent::ExitRequested,
        "table" => return Ok(ConsoleInput::ShowTable),
        "help" | "?" => return Ok(ConsoleInput::ShowHelp),
        other => return Err(format!("unbekannter Befehl: {other}")),
    };

    Ok(ConsoleInput::Intent(intent))
}

fn expect_args<'a, const N: usize>(keyword: &str, args: &[&'a str]) -> Result<[&'a str; N], String> {
    <[&str; N]>::try_from(args)
        .map_err(|_| format!("{keyword} erwartet {N} Argument(e), erhalten: {}", args.len()))
}

fn parse_f32(text: &str) -> Result<f32, String> {
    text.parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("ungültige Zahl: {text}"))
}

/// 1-basierte Zeilennummer → 0-basierter Index.
fn parse_row(text: &str) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row - 1),
        _ => Err(format!("ungültige Zeile: {text} (Zeilen beginnen bei 1)")),
    }
}
