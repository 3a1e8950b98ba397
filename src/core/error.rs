//! Fehlertypen für Pfad-Mutationen.

use thiserror::Error;

/// Ergebnis-Alias für Operationen auf dem PathModel.
pub type PathResult<T> = Result<T, PathError>;

/// Gründe, aus denen eine Mutation am Pfad abgelehnt wird.
///
/// Eine abgelehnte Mutation lässt den Pfad immer unverändert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("Wegpunkt {index} existiert nicht (Pfad hat {len} Wegpunkte)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("ungültige Zahl: {input:?}")]
    InvalidNumber { input: String },

    #[error("Heading {value} muss eine ganze Zahl in (-180, 180] sein")]
    HeadingOutOfRange { value: f64 },

    #[error("Heading des ersten Wegpunkts ist an das Start-Heading gebunden")]
    FirstHeadingFixed,

    #[error("ungültige Geschwindigkeit: {value}")]
    InvalidSpeed { value: f64 },

    #[error("Position ({x}, {y}) liegt außerhalb des Feldes")]
    OutsideField { x: f32, y: f32 },

    #[error("ungültige Feldgröße: {0}")]
    InvalidSurface(String),
}

/// Parst eine Tabellenzelle als Zahl.
///
/// Leerzeichen am Rand werden ignoriert; `NaN`, `inf` und Text werden abgelehnt.
pub fn parse_cell_value(input: &str) -> PathResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PathError::InvalidNumber {
            input: input.to_string(),
        }),
    }
}
