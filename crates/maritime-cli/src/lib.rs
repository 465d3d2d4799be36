//! Maritime planner CLI library.
//!
//! This crate provides the command handlers, reference data loading and
//! output formatting behind the `maritime-cli` binary.

pub mod commands;
pub mod output;
pub mod reference_data;
