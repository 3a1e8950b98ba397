//! UI-Layer: Eingabe-Quellen, die `AppIntent`s erzeugen.
//!
//! Die Konsole ersetzt Zeichenfläche und Tabelle der Web-Oberfläche.

pub mod console;

pub use console::{parse_line, ConsoleInput, HELP};
