//! Cost model constants, the canal corridor table and the cost breakdown.

use serde::Serialize;

use crate::catalog::Port;
use crate::compliance::DEFAULT_ECA_ZONE_COST;
use crate::risk::RiskModel;

/// A canal transit charged when a voyage links two port groups.
#[derive(Debug, Clone, PartialEq)]
pub struct CanalCorridor {
    pub name: String,
    /// Flat transit fee in USD.
    pub cost: f64,
    pub side_a: Vec<String>,
    pub side_b: Vec<String>,
}

impl CanalCorridor {
    pub fn new(name: &str, cost: f64, side_a: &[&str], side_b: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            cost,
            side_a: side_a.iter().map(|s| s.to_string()).collect(),
            side_b: side_b.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether the voyage runs from one side of the corridor to the other, in either direction.
    pub fn applies(&self, origin: &Port, destination: &Port) -> bool {
        let on = |side: &[String], port: &Port| {
            side.iter()
                .any(|name| name.eq_ignore_ascii_case(port.name.trim()))
        };
        (on(&self.side_a, origin) && on(&self.side_b, destination))
            || (on(&self.side_b, origin) && on(&self.side_a, destination))
    }

    /// Suez transit between northern Europe / the western Mediterranean and Asia / the Gulf.
    pub fn suez() -> Self {
        Self::new(
            "Suez Canal",
            222_865.0,
            &["Rotterdam", "Hamburg", "Antwerp", "Felixstowe", "Valencia"],
            &[
                "Singapore",
                "Shanghai",
                "Hong Kong",
                "Busan",
                "Tokyo",
                "Mumbai",
                "Dubai",
            ],
        )
    }
}

/// Constants driving [`plan_route`](super::plan_route).
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    /// Great-circle distance multiplier for practical (coastal, canal) routing.
    pub routing_factor: f64,
    pub optimized_weather_factor: f64,
    pub winter_months: Vec<u32>,
    pub winter_weather_factor: f64,
    pub storm_months: Vec<u32>,
    pub storm_weather_factor: f64,
    /// Fixed handling fee charged at each of the two ports.
    pub port_handling_fee: f64,
    /// Checked in order; the first matching corridor is charged.
    pub canal_corridors: Vec<CanalCorridor>,
    /// Fraction of cargo value charged as insurance.
    pub insurance_rate: f64,
    pub eca_zone_cost: f64,
    pub other_costs: f64,
    /// Speed used to turn bunkers on board into a range.
    pub range_reference_speed_knots: f64,
    /// Routes shorter than this never get a planned fuel stop.
    pub fuel_stop_min_distance_nm: f64,
    pub reference_bunker_hub: String,
    pub reference_stop_tons: f64,
    pub reference_stop_distance_nm: f64,
    pub waypoint_segments: usize,
    pub safety_factor_high_risk: f64,
    pub safety_factor: f64,
    pub safety_extra_days: u32,
    pub weather_route_factor: f64,
    pub weather_route_days_saved: u32,
    pub risk: RiskModel,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            routing_factor: 1.15,
            optimized_weather_factor: 0.95,
            winter_months: vec![11, 12, 1, 2, 3],
            winter_weather_factor: 1.15,
            storm_months: vec![6, 7, 8, 9],
            storm_weather_factor: 1.10,
            port_handling_fee: 25_000.0,
            canal_corridors: vec![CanalCorridor::suez()],
            insurance_rate: 0.001,
            eca_zone_cost: DEFAULT_ECA_ZONE_COST,
            other_costs: 50_000.0,
            range_reference_speed_knots: 14.0,
            fuel_stop_min_distance_nm: 7_000.0,
            reference_bunker_hub: "Fujairah".to_string(),
            reference_stop_tons: 800.0,
            reference_stop_distance_nm: 4_500.0,
            waypoint_segments: 10,
            safety_factor_high_risk: 1.12,
            safety_factor: 1.08,
            safety_extra_days: 2,
            weather_route_factor: 0.95,
            weather_route_days_saved: 1,
            risk: RiskModel::default(),
        }
    }
}

impl CostModel {
    /// Fuel multiplier for the departure month, or the optimized factor.
    pub fn weather_factor(&self, departure_month: u32, weather_optimized: bool) -> f64 {
        if weather_optimized {
            self.optimized_weather_factor
        } else if self.winter_months.contains(&departure_month) {
            self.winter_weather_factor
        } else if self.storm_months.contains(&departure_month) {
            self.storm_weather_factor
        } else {
            1.0
        }
    }

    /// First corridor linking the two ports.
    pub fn canal_for(&self, origin: &Port, destination: &Port) -> Option<&CanalCorridor> {
        self.canal_corridors
            .iter()
            .find(|corridor| corridor.applies(origin, destination))
    }
}

/// Monetary breakdown of a planned voyage, in USD.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub fuel_cost: f64,
    pub port_cost: f64,
    pub canal_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canal_name: Option<String>,
    pub insurance_cost: f64,
    pub compliance_cost: f64,
    pub other_costs: f64,
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Build a breakdown whose total is the sum of the six components.
    pub fn new(
        fuel_cost: f64,
        port_cost: f64,
        canal: Option<&CanalCorridor>,
        insurance_cost: f64,
        compliance_cost: f64,
        other_costs: f64,
    ) -> Self {
        let canal_cost = canal.map_or(0.0, |c| c.cost);
        let total_cost =
            fuel_cost + port_cost + canal_cost + insurance_cost + compliance_cost + other_costs;
        Self {
            fuel_cost,
            port_cost,
            canal_cost,
            canal_name: canal.map(|c| c.name.clone()),
            insurance_cost,
            compliance_cost,
            other_costs,
            total_cost,
        }
    }

    /// Recompute the total from the components.
    pub fn component_sum(&self) -> f64 {
        self.fuel_cost
            + self.port_cost
            + self.canal_cost
            + self.insurance_cost
            + self.compliance_cost
            + self.other_costs
    }
}
