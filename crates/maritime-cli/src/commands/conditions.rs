//! Conditions command handler: sea state and alerts from a weather observation.

use anyhow::{ensure, Result};
use clap::Args;

use maritime_lib::conditions::{assess_conditions, WeatherSnapshot};
use maritime_lib::{ReferenceCatalog, Waypoint};

use crate::output::{render_conditions, OutputFormat};

use super::emit;

#[derive(Args, Debug, Clone)]
pub struct ConditionsArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,
    /// Observed wind speed in meters per second.
    #[arg(long = "wind-speed")]
    pub wind_speed: f64,
    /// Observed visibility in meters.
    #[arg(long, default_value_t = 10_000.0)]
    pub visibility: f64,
    /// Wind direction in degrees, if known.
    #[arg(long = "wind-direction")]
    pub wind_direction: Option<f64>,
}

/// Handle the conditions subcommand.
pub fn handle_conditions(
    catalog: &ReferenceCatalog,
    args: &ConditionsArgs,
    format: OutputFormat,
) -> Result<()> {
    let point = Waypoint::new(args.lat, args.lng);
    ensure!(
        point.is_valid(),
        "position ({}, {}) is out of range",
        args.lat,
        args.lng
    );
    ensure!(
        args.wind_speed.is_finite() && args.wind_speed >= 0.0,
        "--wind-speed must be a non-negative number"
    );
    ensure!(
        args.visibility.is_finite() && args.visibility >= 0.0,
        "--visibility must be a non-negative number"
    );

    let snapshot = WeatherSnapshot {
        wind_speed_ms: args.wind_speed,
        wind_direction_deg: args.wind_direction,
        visibility_m: args.visibility,
    };
    let conditions = assess_conditions(catalog, point, &snapshot);
    emit(format, &conditions, render_conditions)
}
