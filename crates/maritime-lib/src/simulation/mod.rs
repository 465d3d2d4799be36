//! Leg-by-leg voyage simulation under weather perturbation.
//!
//! A voyage is a fold over consecutive waypoint pairs. Each leg draws a
//! [`Perturbation`] from a [`WeatherSource`], derives speed over ground and
//! duration, burns fuel by the cube law and advances a carried clock.
//!
//! # Example
//!
//! ```
//! use maritime_lib::catalog::ReferenceCatalog;
//! use maritime_lib::geo::Waypoint;
//! use maritime_lib::simulation::{simulate_voyage, CalmWeather, SimulationParameters};
//!
//! let catalog = ReferenceCatalog::builtin();
//! let route = [Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 10.0)];
//! let params = SimulationParameters::new("container");
//! let result = simulate_voyage(&catalog, &route, &params, &mut CalmWeather).unwrap();
//! assert_eq!(result.legs.len(), 1);
//! ```

mod weather;

pub use weather::{
    CalmWeather, Perturbation, RandomWeather, ScriptedWeather, WeatherSource, CURRENT_RANGE,
    WAVE_RANGE, WIND_RANGE,
};

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{ReferenceCatalog, ShipProfile};
use crate::error::{Error, ReferenceKind, Result};
use crate::fuel::{cube_law_consumption, FuelStop};
use crate::geo::{distance_nm, Waypoint};

/// Lowest speed over ground a leg may be simulated at, knots.
pub const MIN_SPEED_OVER_GROUND: f64 = 1.0;

/// Arrivals more than this many hours before laycan end count as early.
pub const EARLY_THRESHOLD_HOURS: f64 = 48.0;

/// Prices and factors used to cost a simulated voyage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationCosts {
    /// USD per metric ton of fuel.
    pub bunker_price: f64,
    /// USD per metric ton of CO2.
    pub co2_price: f64,
    /// Tons of CO2 emitted per ton of fuel burned.
    pub co2_factor: f64,
    /// Extra tons bunkered on top of the shortfall.
    pub fuel_stop_buffer_tons: f64,
}

impl Default for SimulationCosts {
    fn default() -> Self {
        Self {
            bunker_price: 650.0,
            co2_price: 90.0,
            co2_factor: 3.17,
            fuel_stop_buffer_tons: 500.0,
        }
    }
}

/// Commanded speed override for one leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedAdjustment {
    pub leg_index: usize,
    pub new_stw: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    pub ship_type: String,
    pub start_time: DateTime<Utc>,
    /// Base commanded speed through water, knots.
    pub commanded_speed: f64,
    /// Later entries win when a leg index appears twice.
    pub speed_adjustments: Vec<SpeedAdjustment>,
    pub laycan_start: DateTime<Utc>,
    pub laycan_end: DateTime<Utc>,
    pub costs: SimulationCosts,
}

impl SimulationParameters {
    /// Parameters for `ship_type` starting 2025-09-21T00:00Z at 14 knots with a three-week laycan.
    pub fn new(ship_type: impl Into<String>) -> Self {
        let start = Utc
            .with_ymd_and_hms(2025, 9, 21, 0, 0, 0)
            .single()
            .unwrap_or_default();
        Self {
            ship_type: ship_type.into(),
            start_time: start,
            commanded_speed: 14.0,
            speed_adjustments: Vec::new(),
            laycan_start: start,
            laycan_end: start + Duration::days(21),
            costs: SimulationCosts::default(),
        }
    }

    pub fn with_speed(mut self, knots: f64) -> Self {
        self.commanded_speed = knots;
        self
    }

    pub fn with_adjustment(mut self, leg_index: usize, new_stw: f64) -> Self {
        self.speed_adjustments.push(SpeedAdjustment { leg_index, new_stw });
        self
    }

    pub fn with_laycan(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.laycan_start = start;
        self.laycan_end = end;
        self
    }

    fn commanded_for(&self, leg_index: usize) -> f64 {
        self.speed_adjustments
            .iter()
            .rev()
            .find(|adj| adj.leg_index == leg_index)
            .map_or(self.commanded_speed, |adj| adj.new_stw)
    }

    fn validate(&self, waypoints: &[Waypoint]) -> Result<()> {
        if !self.commanded_speed.is_finite() || self.commanded_speed <= 0.0 {
            return Err(Error::invalid_input(format!(
                "commanded speed must be positive, got {}",
                self.commanded_speed
            )));
        }
        if let Some(adj) = self
            .speed_adjustments
            .iter()
            .find(|adj| !adj.new_stw.is_finite() || adj.new_stw <= 0.0)
        {
            return Err(Error::invalid_input(format!(
                "speed adjustment for leg {} must be positive, got {}",
                adj.leg_index, adj.new_stw
            )));
        }
        if let Some((index, point)) = waypoints.iter().enumerate().find(|(_, p)| !p.is_valid()) {
            return Err(Error::invalid_input(format!(
                "waypoint {index} ({}, {}) is not a valid position",
                point.lat, point.lng
            )));
        }
        for (field, value) in [
            ("bunker_price", self.costs.bunker_price),
            ("co2_price", self.costs.co2_price),
            ("co2_factor", self.costs.co2_factor),
            ("fuel_stop_buffer_tons", self.costs.fuel_stop_buffer_tons),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_input(format!(
                    "{field} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.laycan_start > self.laycan_end {
            return Err(Error::invalid_input(format!(
                "laycan start {} is after laycan end {}",
                self.laycan_start, self.laycan_end
            )));
        }
        Ok(())
    }
}

/// Outcome of one waypoint-to-waypoint leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegResult {
    pub leg_index: usize,
    pub from: Waypoint,
    pub to: Waypoint,
    pub distance_nm: f64,
    pub stw_commanded: f64,
    pub stw_effective: f64,
    pub sog: f64,
    pub leg_hours: f64,
    pub fuel_consumption_mt: f64,
    pub arrival_time: DateTime<Utc>,
    /// Speed lost to wind (positive means slower).
    pub wind_penalty: f64,
    /// Speed lost to waves (positive means slower).
    pub wave_penalty: f64,
    pub current_effect: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoyageTotals {
    pub distance_nm: f64,
    pub hours: f64,
    pub fuel_mt: f64,
    pub eta: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoyageCosts {
    pub bunker_cost: f64,
    pub co2_cost: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaycanStatus {
    Late,
    OnTime,
    Early,
}

impl LaycanStatus {
    /// Classify hours between laycan end and arrival (positive means before the end).
    pub fn classify(diff_hours: f64) -> Self {
        if diff_hours < 0.0 {
            LaycanStatus::Late
        } else if diff_hours > EARLY_THRESHOLD_HOURS {
            LaycanStatus::Early
        } else {
            LaycanStatus::OnTime
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LaycanStatus::Late => "late",
            LaycanStatus::OnTime => "on_time",
            LaycanStatus::Early => "early",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaycanRisk {
    pub status: LaycanStatus,
    pub diff_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoyageSimulationResult {
    pub ship_type: String,
    pub legs: Vec<LegResult>,
    pub totals: VoyageTotals,
    pub costs: VoyageCosts,
    pub laycan_risk: LaycanRisk,
    pub fuel_stops: Vec<FuelStop>,
}

/// Running state carried from leg to leg.
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    clock: DateTime<Utc>,
    distance_nm: f64,
    hours: f64,
    fuel_mt: f64,
}

/// Simulate a voyage along `waypoints`.
///
/// Fewer than two waypoints produce no legs and zero totals. All inputs are
/// validated before the first leg, so a failure never carries partial legs.
pub fn simulate_voyage<W: WeatherSource + ?Sized>(
    catalog: &ReferenceCatalog,
    waypoints: &[Waypoint],
    params: &SimulationParameters,
    weather: &mut W,
) -> Result<VoyageSimulationResult> {
    let ship = catalog.require_ship(&params.ship_type)?;
    params.validate(waypoints)?;

    let start = Accumulator {
        clock: params.start_time,
        distance_nm: 0.0,
        hours: 0.0,
        fuel_mt: 0.0,
    };

    let (legs, totals) = waypoints.windows(2).enumerate().try_fold(
        (Vec::with_capacity(waypoints.len().saturating_sub(1)), start),
        |(mut legs, acc), (index, pair)| {
            let leg = simulate_leg(ship, index, pair[0], pair[1], params, acc.clock, &mut *weather)?;
            let next = Accumulator {
                clock: leg.arrival_time,
                distance_nm: acc.distance_nm + leg.distance_nm,
                hours: acc.hours + leg.leg_hours,
                fuel_mt: acc.fuel_mt + leg.fuel_consumption_mt,
            };
            legs.push(leg);
            Ok::<_, Error>((legs, next))
        },
    )?;

    // Summed leg hours avoid the millisecond rounding of the carried clock.
    let diff_hours = hours_between(params.start_time, params.laycan_end) - totals.hours;
    let status = LaycanStatus::classify(diff_hours);
    if status == LaycanStatus::Late {
        tracing::warn!(
            eta = %totals.clock,
            laycan_end = %params.laycan_end,
            diff_hours,
            "vessel arrives after the laycan window closes"
        );
    }

    let bunker_cost = totals.fuel_mt * params.costs.bunker_price;
    let co2_cost = totals.fuel_mt * params.costs.co2_factor * params.costs.co2_price;

    let fuel_stops = if totals.fuel_mt > ship.fuel_capacity_tons {
        let hub = catalog.cheapest_bunker_hub().ok_or_else(|| Error::InvalidReference {
            kind: ReferenceKind::BunkerHub,
            name: "any bunkering hub".to_string(),
            suggestions: Vec::new(),
        })?;
        let tons = totals.fuel_mt - ship.fuel_capacity_tons + params.costs.fuel_stop_buffer_tons;
        tracing::warn!(
            fuel_mt = totals.fuel_mt,
            capacity = ship.fuel_capacity_tons,
            hub = %hub.name,
            "voyage fuel exceeds tank capacity; recommending a bunkering stop"
        );
        vec![FuelStop::at_hub(hub, tons)]
    } else {
        Vec::new()
    };

    tracing::info!(
        ship = %ship.type_key,
        legs = legs.len(),
        distance_nm = totals.distance_nm,
        hours = totals.hours,
        fuel_mt = totals.fuel_mt,
        laycan = status.as_str(),
        "voyage simulation complete"
    );

    Ok(VoyageSimulationResult {
        ship_type: ship.type_key.clone(),
        legs,
        totals: VoyageTotals {
            distance_nm: totals.distance_nm,
            hours: totals.hours,
            fuel_mt: totals.fuel_mt,
            eta: totals.clock,
        },
        costs: VoyageCosts {
            bunker_cost,
            co2_cost,
            total_cost: bunker_cost + co2_cost,
        },
        laycan_risk: LaycanRisk { status, diff_hours },
        fuel_stops,
    })
}

fn simulate_leg<W: WeatherSource + ?Sized>(
    ship: &ShipProfile,
    leg_index: usize,
    from: Waypoint,
    to: Waypoint,
    params: &SimulationParameters,
    clock: DateTime<Utc>,
    weather: &mut W,
) -> Result<LegResult> {
    let distance = distance_nm(from, to);
    let commanded = params.commanded_for(leg_index);
    let p = weather.next_perturbation(leg_index);

    let stw_effective = commanded + p.wind + p.wave;
    let sog = (stw_effective + p.current).max(MIN_SPEED_OVER_GROUND);
    let leg_hours = distance / sog;
    if !sog.is_finite() || !leg_hours.is_finite() {
        return Err(Error::ComputationDegenerate {
            message: format!("leg {leg_index} duration is {leg_hours} hours (sog {sog})"),
        });
    }

    let fuel = cube_law_consumption(
        ship.fuel_rate_tons_per_day,
        leg_hours,
        commanded,
        ship.avg_speed_knots,
    );
    let arrival_time = clock + Duration::milliseconds((leg_hours * 3_600_000.0).round() as i64);

    tracing::debug!(
        leg = leg_index,
        distance_nm = distance,
        stw = commanded,
        sog,
        hours = leg_hours,
        fuel_mt = fuel,
        "leg simulated"
    );

    Ok(LegResult {
        leg_index,
        from,
        to,
        distance_nm: distance,
        stw_commanded: commanded,
        stw_effective,
        sog,
        leg_hours,
        fuel_consumption_mt: fuel,
        arrival_time,
        wind_penalty: -p.wind,
        wave_penalty: -p.wave,
        current_effect: p.current,
    })
}

fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 3_600_000.0
}
