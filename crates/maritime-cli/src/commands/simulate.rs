//! Simulate command handler: leg-by-leg voyage simulation along waypoints.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use maritime_lib::simulation::{
    simulate_voyage, CalmWeather, RandomWeather, SimulationCosts, SimulationParameters,
    SpeedAdjustment, WeatherSource,
};
use maritime_lib::{parse_timestamp, ReferenceCatalog, Waypoint};

use crate::output::{render_simulation, OutputFormat};

use super::emit;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// JSON file holding `[[lat, lng], ...]`.
    #[arg(long, conflicts_with = "waypoint")]
    pub waypoints: Option<PathBuf>,
    /// A waypoint as `LAT,LNG`; repeat for each point in order.
    #[arg(long, value_parser = parse_waypoint, allow_hyphen_values = true)]
    pub waypoint: Vec<Waypoint>,
    #[arg(long, default_value = "container")]
    pub ship: String,
    /// Commanded speed through water in knots.
    #[arg(long, default_value_t = 14.0)]
    pub stw: f64,
    /// Voyage start (RFC 3339).
    #[arg(long, default_value = "2025-09-21T00:00:00Z")]
    pub start: String,
    /// Laycan window start; defaults to the voyage start.
    #[arg(long = "laycan-start")]
    pub laycan_start: Option<String>,
    /// Laycan window end; defaults to 21 days after the voyage start.
    #[arg(long = "laycan-end")]
    pub laycan_end: Option<String>,
    /// Bunker price in USD per ton.
    #[arg(long = "bunker-price", default_value_t = SimulationCosts::default().bunker_price)]
    pub bunker_price: f64,
    /// Carbon price in USD per ton of CO2.
    #[arg(long = "co2-price", default_value_t = SimulationCosts::default().co2_price)]
    pub co2_price: f64,
    /// Per-leg speed override as `LEG=KNOTS` (leg index starts at 0).
    #[arg(long = "speed", value_parser = parse_speed_adjustment)]
    pub speed: Vec<SpeedAdjustment>,
    /// Seed for reproducible random weather.
    #[arg(long, conflicts_with = "calm")]
    pub seed: Option<u64>,
    /// Disable weather perturbation entirely.
    #[arg(long)]
    pub calm: bool,
}

impl SimulateArgs {
    fn route(&self) -> Result<Vec<Waypoint>> {
        let Some(path) = &self.waypoints else {
            return Ok(self.waypoint.clone());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read waypoints from {}", path.display()))?;
        let pairs: Vec<[f64; 2]> = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not a JSON list of [lat, lng] pairs", path.display()))?;
        Ok(pairs.into_iter().map(Waypoint::from).collect())
    }

    fn parameters(&self) -> Result<SimulationParameters> {
        let start = parse_timestamp(&self.start).context("invalid --start")?;
        let mut params = SimulationParameters::new(&self.ship).with_speed(self.stw);
        let laycan_start = match &self.laycan_start {
            Some(value) => parse_timestamp(value).context("invalid --laycan-start")?,
            None => start,
        };
        let laycan_end = match &self.laycan_end {
            Some(value) => parse_timestamp(value).context("invalid --laycan-end")?,
            None => start + chrono::Duration::days(21),
        };
        params.start_time = start;
        params = params.with_laycan(laycan_start, laycan_end);
        params.speed_adjustments = self.speed.clone();
        params.costs.bunker_price = self.bunker_price;
        params.costs.co2_price = self.co2_price;
        Ok(params)
    }

    fn weather(&self) -> Box<dyn WeatherSource> {
        if self.calm {
            Box::new(CalmWeather)
        } else if let Some(seed) = self.seed {
            Box::new(RandomWeather::seeded(seed))
        } else {
            Box::new(RandomWeather::from_entropy())
        }
    }
}

/// Handle the simulate subcommand.
pub fn handle_simulate(
    catalog: &ReferenceCatalog,
    args: &SimulateArgs,
    format: OutputFormat,
) -> Result<()> {
    ensure_route_source(args)?;
    let route = args.route()?;
    if route.len() < 2 {
        tracing::warn!(waypoints = route.len(), "fewer than two waypoints; nothing to simulate");
    }
    let params = args.parameters()?;
    let mut weather = args.weather();

    let result = simulate_voyage(catalog, &route, &params, weather.as_mut())
        .context("voyage simulation failed")?;
    emit(format, &result, render_simulation)
}

/// Parse `LAT,LNG` into a waypoint.
pub fn parse_waypoint(value: &str) -> Result<Waypoint, String> {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG but got '{value}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{lat}'"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{lng}'"))?;
    Ok(Waypoint::new(lat, lng))
}

/// Parse `LEG=KNOTS` into a speed adjustment.
pub fn parse_speed_adjustment(value: &str) -> Result<SpeedAdjustment, String> {
    let (leg, knots) = value
        .split_once('=')
        .ok_or_else(|| format!("expected LEG=KNOTS but got '{value}'"))?;
    let leg_index: usize = leg
        .trim()
        .parse()
        .map_err(|_| format!("invalid leg index '{leg}'"))?;
    let new_stw: f64 = knots
        .trim()
        .parse()
        .map_err(|_| format!("invalid speed '{knots}'"))?;
    if !new_stw.is_finite() || new_stw <= 0.0 {
        return Err(format!("speed for leg {leg_index} must be positive"));
    }
    Ok(SpeedAdjustment { leg_index, new_stw })
}

/// Require a waypoint file or inline waypoints.
fn ensure_route_source(args: &SimulateArgs) -> Result<()> {
    if args.waypoints.is_none() && args.waypoint.is_empty() {
        bail!("provide --waypoints FILE or --waypoint LAT,LNG values");
    }
    Ok(())
}
