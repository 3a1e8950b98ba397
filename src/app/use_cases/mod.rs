//! Use-Cases: mutierende Operationen auf dem AppState.

pub mod editing;
pub mod export;
pub mod frame;
