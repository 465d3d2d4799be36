//! Ships command handler for listing available ship types.

use anyhow::Result;

use maritime_lib::{ReferenceCatalog, ShipProfile};

use crate::output::{render_ships, OutputFormat};

use super::emit;

/// Handle the ships subcommand.
///
/// Lists ship profiles sorted by type key.
pub fn handle_list_ships(catalog: &ReferenceCatalog, format: OutputFormat) -> Result<()> {
    let mut ships: Vec<&ShipProfile> = catalog.ships().collect();
    ships.sort_by(|a, b| a.type_key.cmp(&b.type_key));
    emit(format, ships.as_slice(), render_ships)
}
