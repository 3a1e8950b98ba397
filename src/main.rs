//! VEX Path Mapper.
//!
//! Konsolen-Host: liest Befehle (Klicks, Tabellen-Edits, Export) aus einer
//! Skript-Datei oder von stdin und gibt die Route als JSON aus.

use anyhow::Context;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use vex_path_mapper::ui::{self, ConsoleInput};
use vex_path_mapper::{AppController, AppIntent, AppState, MapperOptions};

/// Kommandozeilen-Argumente
#[derive(Debug, Parser)]
#[command(name = "vex-path-mapper", version, about = "Pfade auf dem VEX-Feld planen und als JSON exportieren")]
struct Args {
    /// Optionen-Datei (Standard: vex_path_mapper.toml neben der Binary)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Befehle aus Datei lesen statt von stdin
    #[arg(long)]
    script: Option<PathBuf>,
    /// Route am Ende in diese Datei exportieren
    #[arg(long)]
    output: Option<PathBuf>,
    /// JSON ohne Einrückung ausgeben
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("VEX Path Mapper v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(MapperOptions::config_path);
    let mut options = MapperOptions::load_from_file(&config_path);
    if args.compact {
        options.pretty_export = false;
    }

    let mut session = Session::new(options);

    match &args.script {
        Some(script) => {
            let file = std::fs::File::open(script)
                .with_context(|| format!("Skript nicht lesbar: {}", script.display()))?;
            session.run(std::io::BufReader::new(file))?;
        }
        None => session.run(std::io::stdin().lock())?,
    }

    if let Some(output) = args.output {
        session.export_to(&output)?;
    }

    Ok(())
}

/// Eine Konsolen-Sitzung über einem AppState
struct Session {
    state: AppState,
    controller: AppController,
}

impl Session {
    fn new(options: MapperOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
        }
    }

    fn run(&mut self, input: impl BufRead) -> anyhow::Result<()> {
        for (line_no, line) in input.lines().enumerate() {
            let line = line.context("Eingabe nicht lesbar")?;
            match ui::parse_line(&line) {
                Ok(ConsoleInput::Intent(intent)) => self.apply(intent),
                Ok(ConsoleInput::ShowTable) => self.print_table()?,
                Ok(ConsoleInput::ShowHelp) => println!("{}", ui::HELP),
                Ok(ConsoleInput::Empty) => {}
                Err(e) => log::warn!("Zeile {}: {}", line_no + 1, e),
            }

            self.flush_export()?;
            if self.state.should_exit {
                break;
            }
        }
        Ok(())
    }

    fn apply(&mut self, intent: AppIntent) {
        if let Err(e) = self.controller.handle_intent(&mut self.state, intent) {
            log::error!("Event handling failed: {:#}", e);
        }
    }

    /// Abschließender Export nach `--output`; Fehler beenden das Programm.
    fn export_to(&mut self, output: &std::path::Path) -> anyhow::Result<()> {
        let path = output.to_string_lossy().into_owned();
        self.controller
            .handle_intent(&mut self.state, AppIntent::ExportRequested { path: Some(path) })
            .with_context(|| format!("Export nach {} fehlgeschlagen", output.display()))?;
        self.state.ui.take_export();
        Ok(())
    }

    /// Gibt einen Export ohne Zieldatei auf stdout aus.
    fn flush_export(&mut self) -> anyhow::Result<()> {
        let Some(json) = self.state.ui.take_export() else {
            return Ok(());
        };
        if self.state.ui.last_export_path.is_none() {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
        Ok(())
    }

    fn print_table(&self) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(
            stdout,
            "  # |        x |        y |     H |  speed | direction"
        )?;
        for row in self.controller.build_table(&self.state) {
            writeln!(stdout, "{row}")?;
        }
        Ok(())
    }
}
