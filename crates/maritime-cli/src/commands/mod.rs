// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments, loads the
// reference catalog and dispatches to these handlers.

pub mod conditions;
pub mod plan;
pub mod ports;
pub mod ships;
pub mod simulate;

use anyhow::Result;
use serde::Serialize;

use crate::output::{to_json, OutputFormat};

/// Print either the JSON form of `value` or the text produced by `render`.
pub(crate) fn emit<T, F>(format: OutputFormat, value: &T, render: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => println!("{}", to_json(value)?),
        OutputFormat::Text => print!("{}", render(value)),
    }
    Ok(())
}
