//! Static route planning: distance, fuel, cost, risk and alternates for a port pair.
//!
//! This module provides:
//! - [`RoutePlanRequest`] - Voyage parameters supplied by the caller
//! - [`CostModel`] - Constants behind every cost step
//! - [`RoutePlanResult`] - The assembled plan
//! - [`plan_route`] - Main entry point
//!
//! # Example
//!
//! ```
//! use maritime_lib::catalog::ReferenceCatalog;
//! use maritime_lib::planner::{plan_route, CostModel, RoutePlanRequest};
//!
//! let catalog = ReferenceCatalog::builtin();
//! let request = RoutePlanRequest::new("Singapore", "Rotterdam");
//! let plan = plan_route(&catalog, &request, &CostModel::default()).unwrap();
//! assert_eq!(plan.cost_breakdown.canal_name.as_deref(), Some("Suez Canal"));
//! ```

mod alternates;
mod cost;

pub use alternates::{AlternateKind, AlternateRoute};
pub use cost::{CanalCorridor, CostBreakdown, CostModel};

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::catalog::ReferenceCatalog;
use crate::compliance::{evaluate_eca_compliance, EcaCompliance};
use crate::error::{Error, Result};
use crate::fuel::{range_nm, FuelStop};
use crate::geo::{distance_nm, interpolate, Waypoint};
use crate::risk::{assess_route_risk, RiskAssessment, RiskLevel};

use alternates::{alternate_routes, MainFigures};

/// Voyage parameters for a single planning call.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlanRequest {
    pub origin: String,
    pub destination: String,
    pub ship_type: String,
    /// Deadweight tonnage.
    pub deadweight: f64,
    /// Draft in meters.
    pub draft: f64,
    /// Fuel on board at departure, metric tons.
    pub bunker_on_board: f64,
    /// Insured cargo value in USD.
    pub cargo_value: f64,
    pub departure_date: NaiveDate,
    pub laycan_start: NaiveDate,
    pub laycan_end: NaiveDate,
    pub weather_optimized: bool,
}

impl RoutePlanRequest {
    /// Request between two ports with typical container-ship defaults.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        let departure = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap_or_default();
        Self {
            origin: origin.into(),
            destination: destination.into(),
            ship_type: "container".to_string(),
            deadweight: 50_000.0,
            draft: 12.0,
            bunker_on_board: 500.0,
            cargo_value: 2_500_000.0,
            departure_date: departure,
            laycan_start: departure,
            laycan_end: departure + Days::new(14),
            weather_optimized: false,
        }
    }

    pub fn with_ship(mut self, ship_type: impl Into<String>) -> Self {
        self.ship_type = ship_type.into();
        self
    }

    /// Set the departure date and a laycan window of `laycan_days` starting on it.
    pub fn departing(mut self, date: NaiveDate, laycan_days: u64) -> Self {
        self.departure_date = date;
        self.laycan_start = date;
        self.laycan_end = date + Days::new(laycan_days);
        self
    }

    pub fn weather_optimized(mut self, enabled: bool) -> Self {
        self.weather_optimized = enabled;
        self
    }

    fn validate(&self) -> Result<()> {
        let non_negative = [
            (self.draft, "draft"),
            (self.bunker_on_board, "bunker_on_board"),
            (self.cargo_value, "cargo_value"),
        ];
        for (value, field) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_input(format!(
                    "{field} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !self.deadweight.is_finite() || self.deadweight <= 0.0 {
            return Err(Error::invalid_input(format!(
                "deadweight must be finite and positive, got {}",
                self.deadweight
            )));
        }
        if self.laycan_start > self.laycan_end {
            return Err(Error::invalid_input(format!(
                "laycan start {} is after laycan end {}",
                self.laycan_start, self.laycan_end
            )));
        }
        if self.origin.trim().eq_ignore_ascii_case(self.destination.trim()) {
            return Err(Error::invalid_input(
                "origin and destination must be different ports",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub origin: String,
    pub destination: String,
    pub distance_nm: f64,
    pub voyage_days: u32,
    pub avg_speed_knots: f64,
    pub departure_date: NaiveDate,
    pub arrival_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VesselInfo {
    pub ship_type: String,
    pub ship_name: String,
    pub deadweight_tons: f64,
    pub draft_meters: f64,
    pub fuel_rate_per_day: f64,
    pub cargo_value: f64,
    pub bunker_on_board: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelAnalysis {
    pub consumption_tons: f64,
    pub daily_consumption: f64,
    pub weather_factor: f64,
    pub fuel_stops: Vec<FuelStop>,
    pub bunker_price_avg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainRoute {
    pub waypoints: Vec<Waypoint>,
    pub cost: f64,
    pub days: u32,
    pub risk_level: RiskLevel,
    pub fuel_consumption: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LaycanUtilization {
    #[serde(rename = "Within window")]
    WithinWindow,
    #[serde(rename = "Outside window")]
    OutsideWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaycanAnalysis {
    pub laycan_start: NaiveDate,
    pub laycan_end: NaiveDate,
    pub optimal_departure: NaiveDate,
    pub laycan_utilization: LaycanUtilization,
}

/// Complete static plan for one origin/destination pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlanResult {
    pub route_summary: RouteSummary,
    pub vessel_info: VesselInfo,
    pub fuel_analysis: FuelAnalysis,
    pub cost_breakdown: CostBreakdown,
    pub risk_assessment: RiskAssessment,
    pub regulatory_compliance: EcaCompliance,
    pub main_route: MainRoute,
    pub alternate_routes: Vec<AlternateRoute>,
    pub laycan_analysis: LaycanAnalysis,
}

/// Plan a voyage between two catalog ports.
///
/// The pipeline is fail-fast: input validation and the port and ship lookups
/// happen before any figure is computed. The reference bunkering hub is only
/// resolved when a fuel stop is needed, and a missing hub still fails the whole
/// plan, so an error never comes with a partial plan.
/// Steps:
/// 1. Validate the request and resolve ports and ship
/// 2. Distance with the routing factor, then whole voyage days at service speed
/// 3. Fuel with the seasonal weather factor
/// 4. Fuel, port, canal, insurance, compliance and fixed costs
/// 5. Risk assessment, fuel stops, waypoints and alternates
pub fn plan_route(
    catalog: &ReferenceCatalog,
    request: &RoutePlanRequest,
    model: &CostModel,
) -> Result<RoutePlanResult> {
    // Step 1: Validate and resolve references
    request.validate()?;
    let origin = catalog.require_port(&request.origin)?;
    let destination = catalog.require_port(&request.destination)?;
    let ship = catalog.require_ship(&request.ship_type)?;

    let (dwt_min, dwt_max) = ship.typical_dwt_range();
    if !(dwt_min..=dwt_max).contains(&request.deadweight) {
        tracing::warn!(
            ship = %ship.type_key,
            deadweight = request.deadweight,
            dwt_min,
            dwt_max,
            "deadweight outside the typical range for this ship type"
        );
    }

    // Step 2: Distance and duration
    let distance = distance_nm(origin.position(), destination.position()) * model.routing_factor;
    let voyage_days = (distance / (ship.avg_speed_knots * 24.0)).ceil() as u32;

    // Step 3: Fuel
    let weather_factor = model.weather_factor(request.departure_date.month(), request.weather_optimized);
    let daily_consumption = ship.daily_consumption();
    let total_fuel = f64::from(voyage_days) * daily_consumption * weather_factor;

    tracing::debug!(
        distance_nm = distance,
        voyage_days,
        weather_factor,
        total_fuel,
        "voyage figures computed"
    );

    // Step 4: Costs
    let bunker_price_avg = (origin.bunker_price + destination.bunker_price) / 2.0;
    let fuel_cost = total_fuel * bunker_price_avg;
    let port_cost = request.deadweight * (origin.port_cost_per_ton + destination.port_cost_per_ton)
        + 2.0 * model.port_handling_fee;
    let canal = model.canal_for(origin, destination);
    let insurance_cost = request.cargo_value * model.insurance_rate;
    let compliance = evaluate_eca_compliance(catalog, origin, destination, model.eca_zone_cost);
    let cost_breakdown = CostBreakdown::new(
        fuel_cost,
        port_cost,
        canal,
        insurance_cost,
        compliance.compliance_costs,
        model.other_costs,
    );

    // Step 5: Risk, fuel stops, geometry and alternates
    let risk_assessment = assess_route_risk(
        catalog,
        origin,
        destination,
        request.departure_date,
        &model.risk,
    );

    let max_range = range_nm(
        request.bunker_on_board,
        daily_consumption,
        model.range_reference_speed_knots,
    );
    let fuel_stops = if distance > max_range && distance > model.fuel_stop_min_distance_nm {
        let reference_hub = catalog.require_bunker_hub(&model.reference_bunker_hub)?;
        tracing::warn!(
            distance_nm = distance,
            range_nm = max_range,
            hub = %reference_hub.name,
            "bunkers on board do not cover the voyage; planning a fuel stop"
        );
        vec![FuelStop::at_hub(reference_hub, model.reference_stop_tons)
            .with_distance_from_origin(model.reference_stop_distance_nm)]
    } else {
        Vec::new()
    };

    let waypoints = interpolate(
        origin.position(),
        destination.position(),
        model.waypoint_segments,
    )?;

    let alternate_routes = alternate_routes(
        &MainFigures {
            waypoints: &waypoints,
            total_cost: cost_breakdown.total_cost,
            voyage_days,
            total_fuel,
            overall_risk: risk_assessment.overall_risk,
            weather_optimized: request.weather_optimized,
        },
        model,
    );

    let within_laycan = (request.laycan_start..=request.laycan_end).contains(&request.departure_date);

    let result = RoutePlanResult {
        route_summary: RouteSummary {
            origin: origin.name.clone(),
            destination: destination.name.clone(),
            distance_nm: distance,
            voyage_days,
            avg_speed_knots: ship.avg_speed_knots,
            departure_date: request.departure_date,
            arrival_date: request.departure_date + Days::new(u64::from(voyage_days)),
        },
        vessel_info: VesselInfo {
            ship_type: ship.type_key.clone(),
            ship_name: ship.name.clone(),
            deadweight_tons: request.deadweight,
            draft_meters: request.draft,
            fuel_rate_per_day: daily_consumption,
            cargo_value: request.cargo_value,
            bunker_on_board: request.bunker_on_board,
        },
        fuel_analysis: FuelAnalysis {
            consumption_tons: total_fuel,
            daily_consumption,
            weather_factor,
            fuel_stops,
            bunker_price_avg,
        },
        main_route: MainRoute {
            waypoints,
            cost: cost_breakdown.total_cost,
            days: voyage_days,
            risk_level: risk_assessment.overall_risk,
            fuel_consumption: total_fuel,
        },
        cost_breakdown,
        risk_assessment,
        regulatory_compliance: compliance,
        alternate_routes,
        laycan_analysis: LaycanAnalysis {
            laycan_start: request.laycan_start,
            laycan_end: request.laycan_end,
            optimal_departure: request.departure_date,
            laycan_utilization: if within_laycan {
                LaycanUtilization::WithinWindow
            } else {
                LaycanUtilization::OutsideWindow
            },
        },
    };

    tracing::info!(
        origin = %result.route_summary.origin,
        destination = %result.route_summary.destination,
        total_cost = result.cost_breakdown.total_cost,
        risk = %result.risk_assessment.overall_risk,
        "route plan complete"
    );

    Ok(result)
}
