//! Plain-text rendering of mesa lists.

use crate::api::Mesa;

/// Shown when the list is empty.
pub const EMPTY_PLACEHOLDER: &str = "No mesas yet.";

/// One display line for a record.
pub fn render_mesa(mesa: &Mesa) -> String {
    format!(
        "Mesa {}: {} ({}) - {}",
        mesa.id, mesa.name, mesa.capacity, mesa.status
    )
}

/// Rebuild the whole list display from scratch.
pub fn render_list(mesas: &[Mesa]) -> String {
    if mesas.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    mesas.iter().map(render_mesa).collect::<Vec<_>>().join("\n")
}
