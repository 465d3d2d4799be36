//! Alternate route offers derived from the main plan.

use serde::Serialize;

use crate::geo::Waypoint;
use crate::risk::RiskLevel;

use super::cost::CostModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlternateKind {
    /// Detour away from risk areas.
    Alternate,
    /// Weather-routed variant of the main track.
    Weather,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternateRoute {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AlternateKind,
    pub waypoints: Vec<Waypoint>,
    pub cost: f64,
    pub days: u32,
    pub risk_level: RiskLevel,
    pub description: String,
    pub fuel_consumption: f64,
}

pub(super) struct MainFigures<'a> {
    pub waypoints: &'a [Waypoint],
    pub total_cost: f64,
    pub voyage_days: u32,
    pub total_fuel: f64,
    pub overall_risk: RiskLevel,
    pub weather_optimized: bool,
}

pub(super) fn alternate_routes(main: &MainFigures<'_>, model: &CostModel) -> Vec<AlternateRoute> {
    let mut routes = Vec::with_capacity(2);

    let safety_factor = if main.overall_risk == RiskLevel::High {
        model.safety_factor_high_risk
    } else {
        model.safety_factor
    };
    routes.push(AlternateRoute {
        name: "Safety Route".to_string(),
        kind: AlternateKind::Alternate,
        waypoints: main.waypoints.to_vec(),
        cost: main.total_cost * safety_factor,
        days: main.voyage_days + model.safety_extra_days,
        risk_level: RiskLevel::Low,
        description: format!(
            "Safer route avoiding high-risk areas (+{}% cost)",
            ((safety_factor - 1.0) * 100.0).round() as i64
        ),
        fuel_consumption: main.total_fuel * safety_factor,
    });

    if !main.weather_optimized {
        let factor = model.weather_route_factor;
        routes.push(AlternateRoute {
            name: "Weather Optimized".to_string(),
            kind: AlternateKind::Weather,
            waypoints: main.waypoints.to_vec(),
            cost: main.total_cost * factor,
            days: main.voyage_days.saturating_sub(model.weather_route_days_saved),
            risk_level: RiskLevel::Medium,
            description: format!(
                "Weather-optimized routing (-{}% fuel, weather dependent)",
                ((1.0 - factor) * 100.0).round() as i64
            ),
            fuel_consumption: main.total_fuel * factor,
        });
    }

    routes
}
