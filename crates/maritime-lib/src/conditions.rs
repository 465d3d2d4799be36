//! Maritime conditions and alerts derived from an already-fetched weather observation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceCatalog;
use crate::geo::Waypoint;
use crate::risk::RiskLevel;

const KNOTS_PER_MS: f64 = 1.94384;
const METERS_PER_NM: f64 = 1852.0;

const GALE_KNOTS: f64 = 34.0;
const STORM_KNOTS: f64 = 47.0;
const POOR_VISIBILITY_NM: f64 = 2.0;
const REDUCED_VISIBILITY_NM: f64 = 5.0;
const HIGH_WAVES_M: f64 = 4.0;
const VERY_HIGH_WAVES_M: f64 = 6.0;

/// Douglas sea state labels keyed by exclusive upper wave height in meters.
const SEA_STATES: [(f64, &str); 8] = [
    (0.1, "Calm (glassy)"),
    (0.5, "Calm (rippled)"),
    (1.25, "Smooth"),
    (2.5, "Slight"),
    (4.0, "Moderate"),
    (6.0, "Rough"),
    (9.0, "Very rough"),
    (14.0, "High"),
];

/// Surface weather at a point, as reported by a weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub wind_speed_ms: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_direction_deg: Option<f64>,
    pub visibility_m: f64,
}

impl WeatherSnapshot {
    pub fn new(wind_speed_ms: f64, visibility_m: f64) -> Self {
        Self {
            wind_speed_ms,
            wind_direction_deg: None,
            visibility_m,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertSeverity {
    Info,
    Medium,
    High,
}

impl From<RiskLevel> for AlertSeverity {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::High => AlertSeverity::High,
            RiskLevel::Medium | RiskLevel::Low => AlertSeverity::Medium,
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlertSeverity::Info => "INFO",
            AlertSeverity::Medium => "MEDIUM",
            AlertSeverity::High => "HIGH",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeaAlert {
    #[serde(rename = "type")]
    pub title: String,
    pub severity: AlertSeverity,
    pub message: String,
    /// Suggested action for the watch officer.
    pub recommendation: &'static str,
}

impl SeaAlert {
    fn new(
        title: &str,
        severity: AlertSeverity,
        message: String,
        recommendation: &'static str,
    ) -> Self {
        Self {
            title: title.to_string(),
            severity,
            message,
            recommendation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaritimeConditions {
    pub position: Waypoint,
    pub wind_speed_knots: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction_deg: Option<f64>,
    pub estimated_wave_height_m: f64,
    pub sea_state: &'static str,
    pub visibility_nm: f64,
    pub alerts: Vec<SeaAlert>,
    pub eca_zones: Vec<String>,
}

/// Douglas sea state for a significant wave height in meters.
pub fn sea_state(wave_height_m: f64) -> &'static str {
    SEA_STATES
        .iter()
        .find(|(limit, _)| wave_height_m < *limit)
        .map_or("Very high", |(_, label)| label)
}

/// Wave height estimate from wind alone, rounded to a tenth of a meter.
pub fn estimated_wave_height(wind_speed_ms: f64) -> f64 {
    ((wind_speed_ms * 0.3 + 0.8) * 10.0).round() / 10.0
}

/// Derive conditions and navigation alerts at `point`.
///
/// Alerts come out in a fixed order: wind, visibility, waves, emission
/// control, then one security alert per piracy zone containing the point.
pub fn assess_conditions(
    catalog: &ReferenceCatalog,
    point: Waypoint,
    snapshot: &WeatherSnapshot,
) -> MaritimeConditions {
    let wind_knots = (snapshot.wind_speed_ms * KNOTS_PER_MS).round();
    let wave_height = estimated_wave_height(snapshot.wind_speed_ms);
    let visibility_nm = (snapshot.visibility_m / METERS_PER_NM).round();

    let mut alerts = Vec::new();

    if wind_knots > GALE_KNOTS {
        let severity = if wind_knots > STORM_KNOTS {
            AlertSeverity::High
        } else {
            AlertSeverity::Medium
        };
        alerts.push(SeaAlert::new(
            "Gale Warning",
            severity,
            format!("Wind speed {wind_knots} knots"),
            "Reduce speed and secure equipment",
        ));
    }

    if visibility_nm < POOR_VISIBILITY_NM {
        alerts.push(SeaAlert::new(
            "Poor Visibility",
            AlertSeverity::High,
            format!("Visibility {visibility_nm} nm"),
            "Use radar and reduce speed",
        ));
    } else if visibility_nm < REDUCED_VISIBILITY_NM {
        alerts.push(SeaAlert::new(
            "Reduced Visibility",
            AlertSeverity::Medium,
            format!("Visibility {visibility_nm} nm"),
            "Maintain vigilant watch",
        ));
    }

    if wave_height > HIGH_WAVES_M {
        let severity = if wave_height < VERY_HIGH_WAVES_M {
            AlertSeverity::Medium
        } else {
            AlertSeverity::High
        };
        alerts.push(SeaAlert::new(
            "High Waves",
            severity,
            format!("Estimated wave height {wave_height} m"),
            "Consider route adjustment",
        ));
    }

    let eca_zones: Vec<String> = catalog
        .eca_zones()
        .filter(|zone| zone.contains(point))
        .map(|zone| zone.name.clone())
        .collect();
    if !eca_zones.is_empty() {
        alerts.push(SeaAlert::new(
            "ECA Zone",
            AlertSeverity::Info,
            format!(
                "Inside {}: 0.1% sulfur fuel required",
                eca_zones.join(", ")
            ),
            "Switch to fuel with at most 0.1% sulfur",
        ));
    }

    for zone in catalog.piracy_zones().filter(|zone| zone.contains(point)) {
        if let Some(level) = zone.piracy_level() {
            alerts.push(SeaAlert::new(
                "Security Alert",
                level.into(),
                format!("{}: {}", zone.name, zone.description),
                "Follow BMP5 security guidelines",
            ));
        }
    }

    tracing::debug!(
        lat = point.lat,
        lng = point.lng,
        wind_knots,
        wave_height,
        alerts = alerts.len(),
        "sea conditions assessed"
    );

    MaritimeConditions {
        position: point,
        wind_speed_knots: wind_knots,
        wind_direction_deg: snapshot.wind_direction_deg,
        estimated_wave_height_m: wave_height,
        sea_state: sea_state(wave_height),
        visibility_nm,
        alerts,
        eca_zones,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_state_thresholds_are_exclusive() {
        assert_eq!(sea_state(0.0), "Calm (glassy)");
        assert_eq!(sea_state(0.1), "Calm (rippled)");
        assert_eq!(sea_state(1.3), "Slight");
        assert_eq!(sea_state(4.0), "Rough");
        assert_eq!(sea_state(13.9), "High");
        assert_eq!(sea_state(14.0), "Very high");
    }

    #[test]
    fn wave_height_from_wind() {
        assert_eq!(estimated_wave_height(0.0), 0.8);
        assert_eq!(estimated_wave_height(10.0), 3.8);
    }

    #[test]
    fn quiet_open_ocean_has_no_alerts() {
        let catalog = ReferenceCatalog::builtin();
        let conditions = assess_conditions(
            &catalog,
            Waypoint::new(-30.0, -20.0),
            &WeatherSnapshot::new(5.0, 20_000.0),
        );
        assert!(conditions.alerts.is_empty());
        assert_eq!(conditions.wind_speed_knots, 10.0);
        assert_eq!(conditions.sea_state, "Slight");
        assert_eq!(conditions.visibility_nm, 11.0);
    }

    #[test]
    fn storm_in_fog_raises_high_alerts_in_order() {
        let catalog = ReferenceCatalog::builtin();
        // 25 m/s is 49 kn and a 8.3 m estimated sea.
        let conditions = assess_conditions(
            &catalog,
            Waypoint::new(-30.0, -20.0),
            &WeatherSnapshot::new(25.0, 1_000.0),
        );
        let titles: Vec<&str> = conditions.alerts.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["Gale Warning", "Poor Visibility", "High Waves"]);
        assert!(conditions
            .alerts
            .iter()
            .all(|a| a.severity == AlertSeverity::High));
        assert_eq!(conditions.sea_state, "Very rough");
        let advice: Vec<&str> = conditions.alerts.iter().map(|a| a.recommendation).collect();
        assert_eq!(
            advice,
            [
                "Reduce speed and secure equipment",
                "Use radar and reduce speed",
                "Consider route adjustment"
            ]
        );
    }
}
