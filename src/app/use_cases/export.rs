//! Use-Case: Route als JSON exportieren.

use crate::app::AppState;
use crate::core::write_route_json;
use anyhow::Context;

/// Exportiert den Pfad im aktiven Rahmen als JSON.
///
/// Mit `path` wird die Route zusätzlich in die Datei geschrieben. Das JSON
/// liegt danach in `state.ui.last_export` für den Host bereit.
pub fn export_path(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let json = write_route_json(&state.path, state.options.pretty_export)?;

    if let Some(ref target) = path {
        std::fs::write(target, &json)
            .with_context(|| format!("Route konnte nicht nach {} geschrieben werden", target))?;
        log::info!(
            "Route mit {} Wegpunkten exportiert nach: {}",
            state.path.len(),
            target
        );
    } else {
        log::info!("Route mit {} Wegpunkten exportiert", state.path.len());
    }

    state.ui.last_export = Some(json);
    state.ui.last_export_path = path;
    Ok(())
}
