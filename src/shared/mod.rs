//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und externen Darstellungen (Tabelle,
//! Zeichenfläche) geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
mod table;

pub use options::MapperOptions;
pub use render_scene::{PathScene, SceneMarker};
pub use table::{TableField, TableRow};
