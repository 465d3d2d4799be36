//! Emission Control Area (ECA) crossing detection and compliance cost.

use serde::Serialize;

use crate::catalog::{Port, ReferenceCatalog};

/// Per-zone compliance surcharge in USD.
pub const DEFAULT_ECA_ZONE_COST: f64 = 15_000.0;

/// Fuel sulfur rules disclosed with every compliance result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SulfurRequirements {
    pub in_eca_zones: String,
    pub outside_eca_zones: String,
    pub description: String,
}

impl Default for SulfurRequirements {
    fn default() -> Self {
        Self {
            in_eca_zones: "0.1% sulfur limit".to_string(),
            outside_eca_zones: "0.5% sulfur limit".to_string(),
            description: "Low sulfur fuel required in ECA zones".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcaCompliance {
    /// Names of ECA zones containing either endpoint, in catalog order.
    pub eca_zones_crossed: Vec<String>,
    pub fuel_sulfur_requirements: SulfurRequirements,
    pub compliance_costs: f64,
}

/// Determine which ECA zones a voyage touches and what that costs.
///
/// Only the endpoints are tested; the track between them is not intersected
/// with the zones.
pub fn evaluate_eca_compliance(
    catalog: &ReferenceCatalog,
    origin: &Port,
    destination: &Port,
    cost_per_zone: f64,
) -> EcaCompliance {
    let eca_zones_crossed: Vec<String> = catalog
        .eca_zones()
        .filter(|zone| zone.contains(origin.position()) || zone.contains(destination.position()))
        .map(|zone| zone.name.clone())
        .collect();

    let compliance_costs = eca_zones_crossed.len() as f64 * cost_per_zone;

    EcaCompliance {
        eca_zones_crossed,
        fuel_sulfur_requirements: SulfurRequirements::default(),
        compliance_costs,
    }
}
