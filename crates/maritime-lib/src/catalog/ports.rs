//! Port and bunkering hub records.

use serde::{Deserialize, Serialize};

use crate::error::{Error, ReferenceKind, Result};
use crate::geo::Waypoint;

use super::CatalogRecord;

/// A commercial port with bunker pricing and per-ton port dues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub country: String,
    /// Bunker price in USD per metric ton.
    pub bunker_price: f64,
    /// Port dues in USD per deadweight ton.
    pub port_cost_per_ton: f64,
}

impl Port {
    pub fn position(&self) -> Waypoint {
        Waypoint::new(self.lat, self.lng)
    }
}

impl CatalogRecord for Port {
    const KIND: ReferenceKind = ReferenceKind::Port;

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<()> {
        validate_named_position(&self.name, self.lat, self.lng)?;
        if self.country.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: format!("port '{}' must have a country", self.name),
            });
        }
        require_positive(&self.name, "bunker_price", self.bunker_price)?;
        require_positive(&self.name, "port_cost_per_ton", self.port_cost_per_ton)
    }
}

/// A bunkering location used for fuel-stop recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BunkerHub {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Bunker price in USD per metric ton.
    pub bunker_price: f64,
}

impl BunkerHub {
    pub fn position(&self) -> Waypoint {
        Waypoint::new(self.lat, self.lng)
    }
}

impl CatalogRecord for BunkerHub {
    const KIND: ReferenceKind = ReferenceKind::BunkerHub;

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<()> {
        validate_named_position(&self.name, self.lat, self.lng)?;
        require_positive(&self.name, "bunker_price", self.bunker_price)
    }
}

fn validate_named_position(name: &str, lat: f64, lng: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::CatalogValidation {
            message: "name must not be empty".to_string(),
        });
    }
    if !Waypoint::new(lat, lng).is_valid() {
        return Err(Error::CatalogValidation {
            message: format!("'{name}' has invalid coordinates ({lat}, {lng})"),
        });
    }
    Ok(())
}

pub(super) fn require_positive(name: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::CatalogValidation {
            message: format!("{field} for '{name}' must be a finite positive number"),
        });
    }
    Ok(())
}
