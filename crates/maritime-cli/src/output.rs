//! Output formatting for plans, simulations and catalog listings.
//!
//! Text renderers return a `String` so they can be tested without capturing
//! stdout; JSON output goes through `serde_json` directly.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::Serialize;

use maritime_lib::conditions::MaritimeConditions;
use maritime_lib::planner::{LaycanUtilization, RoutePlanResult};
use maritime_lib::simulation::VoyageSimulationResult;
use maritime_lib::{Port, ShipProfile};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Pretty-printed JSON for any serializable result.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format a whole number with thousands separators.
pub fn format_with_separators(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Whole US dollars, e.g. `$1,234,567`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", format_with_separators(rounded.abs() as u64))
}

pub fn render_plan(plan: &RoutePlanResult) -> String {
    let mut out = String::new();
    let summary = &plan.route_summary;
    let costs = &plan.cost_breakdown;
    let fuel = &plan.fuel_analysis;
    let risk = &plan.risk_assessment;

    let _ = writeln!(
        out,
        "Route plan: {} -> {} ({})",
        summary.origin, summary.destination, plan.vessel_info.ship_name
    );
    let _ = writeln!(
        out,
        "  Distance: {:.0} nm at {:.1} kn, {} days ({} -> {})",
        summary.distance_nm,
        summary.avg_speed_knots,
        summary.voyage_days,
        summary.departure_date,
        summary.arrival_date
    );
    let _ = writeln!(
        out,
        "  Fuel: {:.1} t (weather factor {:.2}, avg bunker ${:.0}/t)",
        fuel.consumption_tons, fuel.weather_factor, fuel.bunker_price_avg
    );
    for stop in &fuel.fuel_stops {
        let _ = writeln!(
            out,
            "  Fuel stop: {} - {:.0} t at ${:.0}/t ({})",
            stop.port_name,
            stop.fuel_needed_tons,
            stop.fuel_price_per_ton,
            format_usd(stop.estimated_cost)
        );
    }

    let _ = writeln!(out, "Costs:");
    let canal_label = costs
        .canal_name
        .as_deref()
        .map_or_else(|| "Canal".to_string(), |name| format!("Canal ({name})"));
    let rows = [
        ("Fuel".to_string(), costs.fuel_cost),
        ("Port".to_string(), costs.port_cost),
        (canal_label, costs.canal_cost),
        ("Insurance".to_string(), costs.insurance_cost),
        ("Compliance".to_string(), costs.compliance_cost),
        ("Other".to_string(), costs.other_costs),
    ];
    for (label, amount) in rows {
        let _ = writeln!(out, "  {:<22} {:>16}", label, format_usd(amount));
    }
    let _ = writeln!(out, "  {:<22} {:>16}", "Total", format_usd(costs.total_cost));

    let _ = writeln!(
        out,
        "Risk: {} (score {})",
        risk.overall_risk, risk.risk_score
    );
    for finding in &risk.findings {
        let _ = writeln!(
            out,
            "  [{}] {}: {}",
            finding.level, finding.kind, finding.description
        );
    }

    let eca = &plan.regulatory_compliance;
    if eca.eca_zones_crossed.is_empty() {
        let _ = writeln!(out, "ECA zones: none");
    } else {
        let _ = writeln!(out, "ECA zones: {}", eca.eca_zones_crossed.join(", "));
    }

    if !plan.alternate_routes.is_empty() {
        let _ = writeln!(out, "Alternates:");
        for alt in &plan.alternate_routes {
            let _ = writeln!(
                out,
                "  {:<18} {:>16} {:>3} days  {}",
                alt.name,
                format_usd(alt.cost),
                alt.days,
                alt.risk_level
            );
        }
    }

    let laycan = &plan.laycan_analysis;
    let utilization = match laycan.laycan_utilization {
        LaycanUtilization::WithinWindow => "within window",
        LaycanUtilization::OutsideWindow => "outside window",
    };
    let _ = writeln!(
        out,
        "Laycan: {} to {}, departure {}",
        laycan.laycan_start, laycan.laycan_end, utilization
    );

    out
}

pub fn render_simulation(result: &VoyageSimulationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Voyage simulation ({}, {} legs)",
        result.ship_type,
        result.legs.len()
    );
    if !result.legs.is_empty() {
        let _ = writeln!(
            out,
            "{:>4} {:>10} {:>6} {:>6} {:>8} {:>9}  {}",
            "Leg", "Dist(nm)", "STW", "SOG", "Hours", "Fuel(t)", "Arrival"
        );
    }
    for leg in &result.legs {
        let _ = writeln!(
            out,
            "{:>4} {:>10.1} {:>6.1} {:>6.2} {:>8.1} {:>9.2}  {}",
            leg.leg_index,
            leg.distance_nm,
            leg.stw_commanded,
            leg.sog,
            leg.leg_hours,
            leg.fuel_consumption_mt,
            leg.arrival_time.format("%Y-%m-%d %H:%M UTC")
        );
    }

    let totals = &result.totals;
    let _ = writeln!(
        out,
        "Totals: {:.1} nm, {:.1} h, {:.2} t fuel, ETA {}",
        totals.distance_nm,
        totals.hours,
        totals.fuel_mt,
        totals.eta.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(
        out,
        "Costs: bunker {}, CO2 {}, total {}",
        format_usd(result.costs.bunker_cost),
        format_usd(result.costs.co2_cost),
        format_usd(result.costs.total_cost)
    );
    let _ = writeln!(
        out,
        "Laycan: {} ({:+.1} h)",
        result.laycan_risk.status.as_str(),
        result.laycan_risk.diff_hours
    );
    for stop in &result.fuel_stops {
        let _ = writeln!(
            out,
            "Fuel stop: {} - {:.0} t ({})",
            stop.port_name,
            stop.fuel_needed_tons,
            format_usd(stop.estimated_cost)
        );
    }
    out
}

pub fn render_conditions(conditions: &MaritimeConditions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Conditions at ({:.4}, {:.4})",
        conditions.position.lat, conditions.position.lng
    );
    let _ = writeln!(
        out,
        "  Wind {} kn, waves {} m ({}), visibility {} nm",
        conditions.wind_speed_knots,
        conditions.estimated_wave_height_m,
        conditions.sea_state,
        conditions.visibility_nm
    );
    if conditions.alerts.is_empty() {
        let _ = writeln!(out, "  No alerts");
    }
    for alert in &conditions.alerts {
        let _ = writeln!(
            out,
            "  [{}] {}: {} ({})",
            alert.severity, alert.title, alert.message, alert.recommendation
        );
    }
    out
}

pub fn render_ports(ports: &[&Port]) -> String {
    if ports.is_empty() {
        return "No matching ports.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "Ports ({}):", ports.len());
    let _ = writeln!(
        out,
        "{:<14} {:<13} {:>9} {:>10} {:>8} {:>10}",
        "Name", "Country", "Lat", "Lng", "Bunker", "Dues/t"
    );
    for port in ports {
        let _ = writeln!(
            out,
            "{:<14} {:<13} {:>9.4} {:>10.4} {:>8.0} {:>10.2}",
            port.name, port.country, port.lat, port.lng, port.bunker_price, port.port_cost_per_ton
        );
    }
    out
}

pub fn render_ships(ships: &[&ShipProfile]) -> String {
    if ships.is_empty() {
        return "No ships available in catalog.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "Available ships ({}):", ships.len());
    let _ = writeln!(
        out,
        "{:<10} {:<22} {:>9} {:>7} {:>9} {:>19}",
        "Type", "Name", "Fuel t/d", "Knots", "Tank t", "DWT range"
    );
    for ship in ships {
        let (dwt_min, dwt_max) = ship.typical_dwt_range();
        let _ = writeln!(
            out,
            "{:<10} {:<22} {:>9.0} {:>7.1} {:>9.0} {:>19}",
            ship.type_key,
            ship.name,
            ship.fuel_rate_tons_per_day,
            ship.avg_speed_knots,
            ship.fuel_capacity_tons,
            format!(
                "{}-{}",
                format_with_separators(dwt_min as u64),
                format_with_separators(dwt_max as u64)
            )
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_group_thousands() {
        assert_eq!(format_with_separators(999), "999");
        assert_eq!(format_with_separators(1_000), "1,000");
        assert_eq!(format_with_separators(1_234_567), "1,234,567");
    }

    #[test]
    fn usd_rounds_to_whole_dollars() {
        assert_eq!(format_usd(222_865.0), "$222,865");
        assert_eq!(format_usd(1_499.6), "$1,500");
        assert_eq!(format_usd(-12.0), "-$12");
    }

    #[test]
    fn ship_table_lists_every_type() {
        let catalog = maritime_lib::ReferenceCatalog::builtin();
        let ships: Vec<&ShipProfile> = catalog.ships().collect();
        let table = render_ships(&ships);
        assert!(table.starts_with("Available ships (5):"));
        assert!(table.contains("Oil Tanker"));
        assert!(table.contains("50,000-200,000"));
    }

    #[test]
    fn json_accepts_unsized_slices() {
        let catalog = maritime_lib::ReferenceCatalog::builtin();
        let ships: Vec<&ShipProfile> = catalog.ships().collect();
        let json = to_json(ships.as_slice()).expect("serialize");
        assert!(json.trim_start().starts_with('['));
        assert!(json.contains("Oil Tanker"));
    }
}
