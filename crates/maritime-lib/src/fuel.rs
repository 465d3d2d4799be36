//! Fuel burn models and bunkering stop records shared by the planner and the simulator.

use serde::Serialize;

use crate::catalog::BunkerHub;
use crate::geo::Waypoint;

/// A recommended bunkering call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelStop {
    pub port_name: String,
    pub coordinates: Waypoint,
    pub fuel_needed_tons: f64,
    pub fuel_price_per_ton: f64,
    pub estimated_cost: f64,
    /// Planned distance from the origin, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_from_origin_nm: Option<f64>,
}

impl FuelStop {
    pub fn at_hub(hub: &BunkerHub, fuel_needed_tons: f64) -> Self {
        Self {
            port_name: hub.name.clone(),
            coordinates: hub.position(),
            fuel_needed_tons,
            fuel_price_per_ton: hub.bunker_price,
            estimated_cost: fuel_needed_tons * hub.bunker_price,
            distance_from_origin_nm: None,
        }
    }

    pub fn with_distance_from_origin(mut self, distance_nm: f64) -> Self {
        self.distance_from_origin_nm = Some(distance_nm);
        self
    }
}

/// Fuel burned over `hours` at `commanded_knots` using the propeller cube law.
///
/// Formula: `(rate_per_day / 24) × hours × (commanded / design)³`
///
/// # Examples
///
/// ```
/// use maritime_lib::fuel::cube_law_consumption;
///
/// // At design speed a day of steaming burns exactly the daily rate.
/// assert_eq!(cube_law_consumption(48.0, 24.0, 14.0, 14.0), 48.0);
/// // Doubling speed multiplies burn per hour by eight.
/// assert_eq!(cube_law_consumption(48.0, 24.0, 28.0, 14.0), 384.0);
/// ```
pub fn cube_law_consumption(
    rate_per_day: f64,
    hours: f64,
    commanded_knots: f64,
    design_knots: f64,
) -> f64 {
    (rate_per_day / 24.0) * hours * (commanded_knots / design_knots).powi(3)
}

/// Distance a ship can cover on `fuel_tons` at a reference speed.
///
/// Returns `0.0` when the daily consumption is not positive.
pub fn range_nm(fuel_tons: f64, daily_consumption: f64, reference_speed_knots: f64) -> f64 {
    if daily_consumption.is_nan() || daily_consumption <= 0.0 {
        return 0.0;
    }
    (fuel_tons / daily_consumption) * 24.0 * reference_speed_knots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_uses_days_of_fuel_times_reference_speed() {
        // 500 t at 250 t/day is 2 days; 48 h at 14 kn is 672 nm.
        assert!((range_nm(500.0, 250.0, 14.0) - 672.0).abs() < 1e-9);
    }

    #[test]
    fn range_with_zero_consumption_is_zero() {
        assert_eq!(range_nm(500.0, 0.0, 14.0), 0.0);
    }

    #[test]
    fn stop_at_hub_prices_the_fuel() {
        let hub = BunkerHub {
            name: "Fujairah".to_string(),
            lat: 25.1164,
            lng: 56.3467,
            bunker_price: 645.0,
        };
        let stop = FuelStop::at_hub(&hub, 800.0).with_distance_from_origin(4500.0);
        assert_eq!(stop.estimated_cost, 516_000.0);
        assert_eq!(stop.distance_from_origin_nm, Some(4500.0));
    }
}
