//! Ports command handler for listing and searching catalog ports.

use anyhow::Result;
use clap::Args;

use maritime_lib::{Port, ReferenceCatalog};

use crate::output::{render_ports, OutputFormat};

use super::emit;

#[derive(Args, Debug, Clone, Default)]
pub struct PortsArgs {
    /// Only list ports whose name contains this text (case-insensitive).
    #[arg(long)]
    pub search: Option<String>,
}

/// Handle the ports subcommand.
pub fn handle_list_ports(
    catalog: &ReferenceCatalog,
    args: &PortsArgs,
    format: OutputFormat,
) -> Result<()> {
    let ports: Vec<&Port> = catalog.search_ports(args.search.as_deref().unwrap_or(""));
    emit(format, ports.as_slice(), render_ports)
}
