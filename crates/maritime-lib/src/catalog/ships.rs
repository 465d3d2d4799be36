//! Ship type profiles.

use serde::{Deserialize, Serialize};

use crate::error::{Error, ReferenceKind, Result};

use super::ports::require_positive;
use super::CatalogRecord;

/// Performance and cost characteristics of a ship type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipProfile {
    /// Lookup key such as `container` or `bulk`.
    pub type_key: String,
    /// Human-readable name.
    pub name: String,
    pub fuel_rate_tons_per_day: f64,
    /// Design (service) speed in knots.
    pub avg_speed_knots: f64,
    pub cost_per_ton_fuel: f64,
    /// Multiplier applied to the daily fuel rate when planning.
    pub fuel_efficiency_factor: f64,
    pub fuel_capacity_tons: f64,
    pub dwt_min: f64,
    pub dwt_max: f64,
}

impl ShipProfile {
    /// Planning fuel burn per day with the efficiency factor applied.
    pub fn daily_consumption(&self) -> f64 {
        self.fuel_rate_tons_per_day * self.fuel_efficiency_factor
    }

    pub fn typical_dwt_range(&self) -> (f64, f64) {
        (self.dwt_min, self.dwt_max)
    }
}

impl CatalogRecord for ShipProfile {
    const KIND: ReferenceKind = ReferenceKind::ShipType;

    fn name(&self) -> &str {
        &self.type_key
    }

    fn validate(&self) -> Result<()> {
        if self.type_key.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: "ship type key must not be empty".to_string(),
            });
        }

        let fields = [
            (self.fuel_rate_tons_per_day, "fuel_rate_tons_per_day"),
            (self.avg_speed_knots, "avg_speed_knots"),
            (self.cost_per_ton_fuel, "cost_per_ton_fuel"),
            (self.fuel_efficiency_factor, "fuel_efficiency_factor"),
            (self.fuel_capacity_tons, "fuel_capacity_tons"),
            (self.dwt_min, "dwt_min"),
            (self.dwt_max, "dwt_max"),
        ];
        for (value, field) in fields {
            require_positive(&self.type_key, field, value)?;
        }

        if self.dwt_min > self.dwt_max {
            return Err(Error::CatalogValidation {
                message: format!(
                    "dwt_min exceeds dwt_max for ship type '{}'",
                    self.type_key
                ),
            });
        }

        Ok(())
    }
}
