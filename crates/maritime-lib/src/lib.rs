//! Maritime voyage planner library entry points.
//!
//! This crate exposes the reference catalog of ports, ship types and zones,
//! the static route planning estimator, the leg-by-leg voyage simulator and
//! the sea conditions assessor. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

pub mod catalog;
pub mod compliance;
pub mod conditions;
pub mod dates;
pub mod error;
pub mod fuel;
pub mod geo;
pub mod planner;
pub mod risk;
pub mod simulation;

pub use catalog::{BunkerHub, GeoZone, Port, ReferenceCatalog, ReferenceCatalogBuilder, ShipProfile};
pub use compliance::{evaluate_eca_compliance, EcaCompliance};
pub use conditions::{assess_conditions, MaritimeConditions, WeatherSnapshot};
pub use dates::{parse_date, parse_timestamp};
pub use error::{Error, ReferenceKind, Result};
pub use fuel::FuelStop;
pub use geo::{distance_nm, interpolate, BoundingBox, Waypoint};
pub use planner::{plan_route, CostBreakdown, CostModel, RoutePlanRequest, RoutePlanResult};
pub use risk::{assess_route_risk, RiskAssessment, RiskLevel, RiskModel};
pub use simulation::{
    simulate_voyage, CalmWeather, LaycanStatus, RandomWeather, ScriptedWeather,
    SimulationCosts, SimulationParameters, SpeedAdjustment, VoyageSimulationResult,
    WeatherSource,
};
