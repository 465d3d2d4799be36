//! Route risk scoring from piracy zones, season, geometry and port congestion.
//!
//! Every rule contributes independently to an additive score. Rules are
//! evaluated in a fixed order so the findings list is stable:
//!
//! 1. piracy zones containing either endpoint (catalog order)
//! 2. storm-season departure
//! 3. large latitude change
//! 4. congested endpoint port

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::catalog::{Port, ReferenceCatalog};

/// Coarse risk classification. Ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        };
        f.write_str(value)
    }
}

/// Category of an individual risk finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskKind {
    #[serde(rename = "Piracy Risk")]
    Piracy,
    #[serde(rename = "Seasonal Weather")]
    SeasonalWeather,
    #[serde(rename = "Weather Variation")]
    WeatherVariation,
    #[serde(rename = "Port Congestion")]
    PortCongestion,
}

impl RiskKind {
    pub fn label(self) -> &'static str {
        match self {
            RiskKind::Piracy => "Piracy Risk",
            RiskKind::SeasonalWeather => "Seasonal Weather",
            RiskKind::WeatherVariation => "Weather Variation",
            RiskKind::PortCongestion => "Port Congestion",
        }
    }

    /// Fixed mitigation advice attached to findings of this kind.
    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            RiskKind::Piracy => &[
                "Follow BMP5 guidelines for piracy prevention",
                "Increase watch vigilance in high-risk areas",
                "Consider naval escort if available",
            ],
            RiskKind::SeasonalWeather => &[
                "Plan flexible departure window",
                "Increase fuel reserves for weather delays",
                "Monitor tropical weather forecasts",
            ],
            RiskKind::WeatherVariation => &[],
            RiskKind::PortCongestion => &[
                "Confirm berth availability before arrival",
                "Plan for potential anchor waiting time",
            ],
        }
    }
}

impl fmt::Display for RiskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advice included in every assessment.
pub const BASELINE_RECOMMENDATION: &str = "Monitor weather updates every 6 hours";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskFinding {
    #[serde(rename = "type")]
    pub kind: RiskKind,
    pub level: RiskLevel,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub overall_risk: RiskLevel,
    /// Additive score clamped to `0..=100`.
    pub risk_score: u32,
    pub findings: Vec<RiskFinding>,
    pub recommendations: Vec<String>,
}

/// Weights and thresholds for [`assess_route_risk`].
#[derive(Debug, Clone, PartialEq)]
pub struct RiskModel {
    pub high_piracy_score: u32,
    pub other_piracy_score: u32,
    /// Departure months (1-12) in the tropical storm season.
    pub storm_season_months: Vec<u32>,
    pub storm_season_score: u32,
    /// Latitude difference in degrees above which weather variation applies.
    pub latitude_change_threshold: f64,
    pub latitude_change_score: u32,
    pub busy_ports: Vec<String>,
    pub congestion_score: u32,
    pub high_threshold: u32,
    pub medium_threshold: u32,
}

impl Default for RiskModel {
    fn default() -> Self {
        Self {
            high_piracy_score: 35,
            other_piracy_score: 20,
            storm_season_months: vec![6, 7, 8, 9, 10],
            storm_season_score: 20,
            latitude_change_threshold: 40.0,
            latitude_change_score: 15,
            busy_ports: ["Singapore", "Shanghai", "Rotterdam", "Los Angeles"]
                .into_iter()
                .map(String::from)
                .collect(),
            congestion_score: 10,
            high_threshold: 50,
            medium_threshold: 25,
        }
    }
}

impl RiskModel {
    fn level_for(&self, score: u32) -> RiskLevel {
        if score >= self.high_threshold {
            RiskLevel::High
        } else if score >= self.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    fn is_busy(&self, port: &Port) -> bool {
        self.busy_ports
            .iter()
            .any(|busy| busy.eq_ignore_ascii_case(port.name.trim()))
    }
}

/// Score the risk of a voyage between two ports departing on `departure`.
///
/// Never fails: a route with no findings is a valid `LOW` result. The overall
/// level follows the score thresholds, except that an endpoint inside a HIGH
/// piracy zone always makes the route HIGH.
pub fn assess_route_risk(
    catalog: &ReferenceCatalog,
    origin: &Port,
    destination: &Port,
    departure: NaiveDate,
    model: &RiskModel,
) -> RiskAssessment {
    let mut findings = Vec::new();
    let mut score: u32 = 0;
    let mut in_high_zone = false;

    for zone in catalog.piracy_zones() {
        let Some(level) = zone.piracy_level() else {
            continue;
        };
        if zone.contains(origin.position()) || zone.contains(destination.position()) {
            findings.push(RiskFinding {
                kind: RiskKind::Piracy,
                level,
                description: format!(
                    "Route passes through {} - {}",
                    zone.name, zone.description
                ),
                zone: Some(zone.name.clone()),
            });
            score += if level == RiskLevel::High {
                model.high_piracy_score
            } else {
                model.other_piracy_score
            };
            in_high_zone |= level == RiskLevel::High;
        }
    }

    if model.storm_season_months.contains(&departure.month()) {
        findings.push(RiskFinding {
            kind: RiskKind::SeasonalWeather,
            level: RiskLevel::Medium,
            description: "Hurricane/Typhoon season increases weather risks".to_string(),
            zone: None,
        });
        score += model.storm_season_score;
    }

    if (origin.lat - destination.lat).abs() > model.latitude_change_threshold {
        findings.push(RiskFinding {
            kind: RiskKind::WeatherVariation,
            level: RiskLevel::Medium,
            description: "Large latitude changes may encounter varied weather conditions"
                .to_string(),
            zone: None,
        });
        score += model.latitude_change_score;
    }

    if model.is_busy(origin) || model.is_busy(destination) {
        findings.push(RiskFinding {
            kind: RiskKind::PortCongestion,
            level: RiskLevel::Low,
            description: format!(
                "Potential delays at major ports ({}, {})",
                origin.name, destination.name
            ),
            zone: None,
        });
        score += model.congestion_score;
    }

    let overall_risk = if in_high_zone {
        RiskLevel::High
    } else {
        model.level_for(score)
    };
    let recommendations = recommendations_for(&findings);

    tracing::debug!(
        score,
        overall = %overall_risk,
        findings = findings.len(),
        "route risk assessed"
    );

    RiskAssessment {
        overall_risk,
        risk_score: score.min(100),
        findings,
        recommendations,
    }
}

/// Baseline advice followed by each finding's advice, first occurrence kept.
fn recommendations_for(findings: &[RiskFinding]) -> Vec<String> {
    let mut out = vec![BASELINE_RECOMMENDATION.to_string()];
    for finding in findings {
        for rec in finding.kind.recommendations() {
            if !out.iter().any(|existing| existing == rec) {
                out.push((*rec).to_string());
            }
        }
    }
    out
}
