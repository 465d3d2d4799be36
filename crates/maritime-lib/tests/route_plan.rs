mod common;

use chrono::{Datelike, Days, NaiveDate};
use maritime_lib::error::{Error, ReferenceKind};
use maritime_lib::planner::{
    plan_route, AlternateKind, CostModel, LaycanUtilization, RoutePlanRequest,
};
use maritime_lib::risk::RiskLevel;
use maritime_lib::ReferenceCatalog;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use common::{approx_eq, fixture_catalog};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn singapore_to_rotterdam_through_suez() {
    let catalog = ReferenceCatalog::builtin();
    let request = RoutePlanRequest::new("Singapore", "Rotterdam").departing(date(2025, 9, 1), 14);
    let plan = plan_route(&catalog, &request, &CostModel::default()).expect("plan succeeds");

    let summary = &plan.route_summary;
    assert!(summary.distance_nm > 6_400.0 && summary.distance_nm < 6_700.0);
    assert_eq!(summary.voyage_days, 13);
    assert_eq!(
        summary.arrival_date,
        summary.departure_date + Days::new(u64::from(summary.voyage_days))
    );

    assert_eq!(plan.fuel_analysis.weather_factor, 1.10);
    assert!(approx_eq(plan.fuel_analysis.consumption_tons, 13.0 * 250.0 * 1.10, 1e-6));
    assert!(approx_eq(plan.fuel_analysis.bunker_price_avg, 665.0, 1e-9));
    assert!(plan.fuel_analysis.fuel_stops.is_empty());

    let costs = &plan.cost_breakdown;
    assert_eq!(costs.canal_name.as_deref(), Some("Suez Canal"));
    assert_eq!(costs.canal_cost, 222_865.0);
    assert!(approx_eq(costs.port_cost, 50_000.0 * (0.8 + 0.9) + 50_000.0, 1e-6));
    assert!(approx_eq(costs.insurance_cost, 2_500.0, 1e-9));
    assert_eq!(costs.compliance_cost, 15_000.0);
    assert_eq!(costs.total_cost, costs.component_sum());

    assert_eq!(plan.risk_assessment.overall_risk, RiskLevel::High);
    assert_eq!(plan.main_route.risk_level, RiskLevel::High);
    assert_eq!(plan.main_route.waypoints.len(), 11);

    let safety = &plan.alternate_routes[0];
    assert!(approx_eq(safety.cost, costs.total_cost * 1.12, 1e-6));
    assert_eq!(safety.days, 15);

    assert_eq!(
        plan.laycan_analysis.laycan_utilization,
        LaycanUtilization::WithinWindow
    );
}

#[test]
fn december_departure_uses_winter_factor_and_offers_two_alternates() {
    let catalog = ReferenceCatalog::builtin();
    let request = RoutePlanRequest::new("Shanghai", "Los Angeles").departing(date(2025, 12, 3), 10);
    let plan = plan_route(&catalog, &request, &CostModel::default()).expect("plan succeeds");

    assert_eq!(plan.fuel_analysis.weather_factor, 1.15);
    let names: Vec<&str> = plan.alternate_routes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Safety Route", "Weather Optimized"]);
    assert_eq!(plan.alternate_routes[1].kind, AlternateKind::Weather);
    assert!(plan.cost_breakdown.canal_name.is_none());
    assert_eq!(plan.cost_breakdown.canal_cost, 0.0);
    assert_eq!(
        plan.regulatory_compliance.eca_zones_crossed,
        vec!["North American ECA"]
    );
}

#[test]
fn weather_optimized_plan_skips_weather_alternate() {
    let catalog = ReferenceCatalog::builtin();
    let request = RoutePlanRequest::new("Busan", "Tokyo")
        .departing(date(2025, 1, 10), 5)
        .weather_optimized(true);
    let plan = plan_route(&catalog, &request, &CostModel::default()).expect("plan succeeds");

    assert_eq!(plan.fuel_analysis.weather_factor, 0.95);
    assert_eq!(plan.alternate_routes.len(), 1);
    assert_eq!(plan.alternate_routes[0].kind, AlternateKind::Alternate);
}

#[test]
fn long_haul_on_low_bunkers_plans_a_fujairah_stop() {
    let catalog = ReferenceCatalog::builtin();
    let request = RoutePlanRequest::new("Los Angeles", "Singapore");
    let plan = plan_route(&catalog, &request, &CostModel::default()).expect("plan succeeds");

    assert!(plan.route_summary.distance_nm > 7_000.0);
    let stops = &plan.fuel_analysis.fuel_stops;
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].port_name, "Fujairah");
    assert_eq!(stops[0].fuel_needed_tons, 800.0);
    assert_eq!(stops[0].estimated_cost, 800.0 * 645.0);
    assert_eq!(stops[0].distance_from_origin_nm, Some(4_500.0));
}

#[test]
fn departure_outside_laycan_is_reported() {
    let catalog = ReferenceCatalog::builtin();
    let mut request = RoutePlanRequest::new("Dubai", "Mumbai");
    request.laycan_start = date(2025, 9, 5);
    request.laycan_end = date(2025, 9, 10);
    let plan = plan_route(&catalog, &request, &CostModel::default()).expect("plan succeeds");
    assert_eq!(
        plan.laycan_analysis.laycan_utilization,
        LaycanUtilization::OutsideWindow
    );
}

#[test]
fn randomized_requests_keep_total_equal_to_ordered_sum() {
    let catalog = ReferenceCatalog::builtin();
    let model = CostModel::default();
    let ports: Vec<String> = catalog.ports().map(|p| p.name.clone()).collect();
    let ships = catalog.ship_types();
    let mut rng = StdRng::seed_from_u64(2025);

    for _ in 0..100 {
        let mut pair = ports.choose_multiple(&mut rng, 2);
        let origin = pair.next().expect("origin").clone();
        let destination = pair.next().expect("destination").clone();
        let departure = date(2025, rng.gen_range(1..=12), rng.gen_range(1..=28));

        let mut request = RoutePlanRequest::new(origin, destination)
            .with_ship(ships.choose(&mut rng).expect("ship").clone())
            .departing(departure, rng.gen_range(0..30))
            .weather_optimized(rng.gen_bool(0.3));
        request.deadweight = rng.gen_range(1_000.0..300_000.0);
        request.bunker_on_board = rng.gen_range(0.0..5_000.0);
        request.cargo_value = rng.gen_range(0.0..50_000_000.0);

        let plan = plan_route(&catalog, &request, &model).expect("valid request plans");
        let c = &plan.cost_breakdown;
        let ordered = c.fuel_cost
            + c.port_cost
            + c.canal_cost
            + c.insurance_cost
            + c.compliance_cost
            + c.other_costs;
        assert_eq!(c.total_cost, ordered);
        assert!(plan.risk_assessment.risk_score <= 100);
        assert_eq!(plan.route_summary.departure_date.month(), departure.month());
    }
}

#[test]
fn unknown_ship_is_invalid_reference() {
    let catalog = ReferenceCatalog::builtin();
    let request = RoutePlanRequest::new("Singapore", "Rotterdam").with_ship("submarine");
    let err = plan_route(&catalog, &request, &CostModel::default()).expect_err("unknown ship");
    assert!(matches!(
        err,
        Error::InvalidReference {
            kind: ReferenceKind::ShipType,
            ..
        }
    ));
}

#[test]
fn unknown_destination_is_invalid_reference() {
    let catalog = ReferenceCatalog::builtin();
    let request = RoutePlanRequest::new("Singapore", "Atlantis");
    let err = plan_route(&catalog, &request, &CostModel::default()).expect_err("unknown port");
    assert!(err.to_string().starts_with("unknown port: Atlantis"));
}

#[test]
fn short_route_plans_without_reference_hub() {
    let catalog = fixture_catalog();
    let request = RoutePlanRequest::new("Santos", "Durban").with_ship("feeder");
    let plan = plan_route(&catalog, &request, &CostModel::default()).expect("plan succeeds");
    assert!(plan.route_summary.distance_nm < 7_000.0);
    assert!(plan.fuel_analysis.fuel_stops.is_empty());
    assert_eq!(plan.vessel_info.ship_name, "Feeder Container Ship");
}

#[test]
fn fuel_stop_needs_reference_hub_in_catalog() {
    let catalog = fixture_catalog();
    let request = RoutePlanRequest::new("Singapore", "Santos").with_ship("feeder");
    let err = plan_route(&catalog, &request, &CostModel::default()).expect_err("no Fujairah");
    assert!(matches!(
        err,
        Error::InvalidReference {
            kind: ReferenceKind::BunkerHub,
            ..
        }
    ));

    let model = CostModel {
        reference_bunker_hub: "Port Louis".to_string(),
        ..CostModel::default()
    };
    let plan = plan_route(&catalog, &request, &model).expect("custom hub plans");
    let stops = &plan.fuel_analysis.fuel_stops;
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].port_name, "Port Louis");
}

#[test]
fn inverted_laycan_is_invalid_input() {
    let catalog = ReferenceCatalog::builtin();
    let mut request = RoutePlanRequest::new("Singapore", "Rotterdam");
    request.laycan_start = date(2025, 9, 20);
    request.laycan_end = date(2025, 9, 1);
    let err = plan_route(&catalog, &request, &CostModel::default()).expect_err("bad laycan");
    assert!(matches!(err, Error::InvalidInput { .. }));
}
