/// UI-bezogener Zustand, den der Host ausliest
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// JSON des letzten Exports (wird vom Host ausgegeben und geleert)
    pub last_export: Option<String>,
    /// Zielpfad des letzten Exports, falls in eine Datei geschrieben
    pub last_export_path: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entnimmt den letzten Export (z.B. zur Ausgabe auf stdout).
    pub fn take_export(&mut self) -> Option<String> {
        self.last_export.take()
    }
}
