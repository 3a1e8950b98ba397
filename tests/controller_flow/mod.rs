mod editing;
mod history_and_export;
