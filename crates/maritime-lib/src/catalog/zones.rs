//! Named geographic zones: emission control areas and piracy risk areas.

use serde::Serialize;

use crate::geo::{BoundingBox, Waypoint};
use crate::risk::RiskLevel;

/// What a zone regulates or warns about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ZoneCategory {
    /// Emission Control Area with a fuel sulfur cap (percent by mass).
    Eca { sulfur_limit: f64 },
    Piracy { risk_level: RiskLevel },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoZone {
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub category: ZoneCategory,
    pub bounds: BoundingBox,
}

impl GeoZone {
    pub fn eca(name: &str, description: &str, sulfur_limit: f64, bounds: BoundingBox) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            category: ZoneCategory::Eca { sulfur_limit },
            bounds,
        }
    }

    pub fn piracy(name: &str, description: &str, risk_level: RiskLevel, bounds: BoundingBox) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            category: ZoneCategory::Piracy { risk_level },
            bounds,
        }
    }

    pub fn contains(&self, point: Waypoint) -> bool {
        self.bounds.contains(point)
    }

    pub fn is_eca(&self) -> bool {
        matches!(self.category, ZoneCategory::Eca { .. })
    }

    /// Risk level when this is a piracy zone.
    pub fn piracy_level(&self) -> Option<RiskLevel> {
        match self.category {
            ZoneCategory::Piracy { risk_level } => Some(risk_level),
            ZoneCategory::Eca { .. } => None,
        }
    }
}
