//! Plan command handler: static cost and risk estimate for a port pair.

use anyhow::{Context, Result};
use clap::Args;

use maritime_lib::planner::{plan_route, CostModel, RoutePlanRequest};
use maritime_lib::{parse_date, ReferenceCatalog};

use crate::output::{render_plan, OutputFormat};

use super::emit;

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Origin port name.
    #[arg(long = "from", default_value = "Singapore")]
    pub from: String,
    /// Destination port name.
    #[arg(long = "to", default_value = "Rotterdam")]
    pub to: String,
    /// Ship type key (see the `ships` command).
    #[arg(long, default_value = "container")]
    pub ship: String,
    /// Deadweight tonnage.
    #[arg(long, default_value_t = 50_000.0)]
    pub deadweight: f64,
    /// Draft in meters.
    #[arg(long, default_value_t = 12.0)]
    pub draft: f64,
    /// Fuel on board at departure, metric tons.
    #[arg(long = "bunker-on-board", default_value_t = 500.0)]
    pub bunker_on_board: f64,
    /// Insured cargo value in USD.
    #[arg(long = "cargo-value", default_value_t = 2_500_000.0)]
    pub cargo_value: f64,
    /// Departure date (YYYY-MM-DD).
    #[arg(long, default_value = "2025-09-01")]
    pub departure: String,
    /// Laycan window start; defaults to the departure date.
    #[arg(long = "laycan-start")]
    pub laycan_start: Option<String>,
    /// Laycan window end; defaults to 14 days after the window start.
    #[arg(long = "laycan-end")]
    pub laycan_end: Option<String>,
    /// Assume weather routing is used for the whole voyage.
    #[arg(long = "weather-optimized")]
    pub weather_optimized: bool,
}

impl PlanArgs {
    fn to_request(&self) -> Result<RoutePlanRequest> {
        let departure = parse_date(&self.departure).context("invalid --departure")?;
        let mut request = RoutePlanRequest::new(&self.from, &self.to)
            .with_ship(&self.ship)
            .departing(departure, 14)
            .weather_optimized(self.weather_optimized);

        if let Some(start) = &self.laycan_start {
            request.laycan_start = parse_date(start).context("invalid --laycan-start")?;
            request.laycan_end = request.laycan_start + chrono::Days::new(14);
        }
        if let Some(end) = &self.laycan_end {
            request.laycan_end = parse_date(end).context("invalid --laycan-end")?;
        }
        request.deadweight = self.deadweight;
        request.draft = self.draft;
        request.bunker_on_board = self.bunker_on_board;
        request.cargo_value = self.cargo_value;
        Ok(request)
    }
}

/// Handle the plan subcommand.
pub fn handle_plan(catalog: &ReferenceCatalog, args: &PlanArgs, format: OutputFormat) -> Result<()> {
    let request = args.to_request()?;
    let plan = plan_route(catalog, &request, &CostModel::default())
        .with_context(|| format!("failed to plan route {} -> {}", args.from, args.to))?;
    emit(format, &plan, render_plan)
}
