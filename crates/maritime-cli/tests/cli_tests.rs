use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("maritime-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("MARITIME_PORT_DATA")
        .env_remove("MARITIME_SHIP_DATA")
        .env_remove("MARITIME_HUB_DATA");
    cmd
}

#[test]
fn plan_prints_cost_breakdown() {
    cli()
        .args(["plan", "--from", "Singapore", "--to", "Rotterdam"])
        .assert()
        .success()
        .stdout(contains("Route plan: Singapore -> Rotterdam"))
        .stdout(contains("Canal (Suez Canal)"))
        .stdout(contains("$222,865"))
        .stdout(contains("Risk: HIGH"))
        .stdout(contains("Safety Route"));
}

#[test]
fn plan_json_has_structured_fields() {
    let output = cli()
        .args(["--format", "json", "plan", "--from", "Shanghai", "--to", "Los Angeles"])
        .args(["--departure", "2025-12-03"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["fuel_analysis"]["weather_factor"], 1.15);
    assert_eq!(json["alternate_routes"][1]["name"], "Weather Optimized");
    assert_eq!(json["laycan_analysis"]["laycan_utilization"], "Within window");
    assert!(json["cost_breakdown"].get("canal_name").is_none());
}

#[test]
fn plan_short_route_with_hub_overrides() {
    cli()
        .arg("--hubs")
        .arg(fixture("hubs.csv"))
        .args(["plan", "--from", "Hamburg", "--to", "Antwerp"])
        .assert()
        .success()
        .stdout(contains("Route plan: Hamburg -> Antwerp"));
}

#[test]
fn plan_unknown_port_suggests_alternatives() {
    cli()
        .args(["plan", "--from", "Singapour", "--to", "Rotterdam"])
        .assert()
        .failure()
        .stderr(contains("unknown port: Singapour"))
        .stderr(contains("Singapore"));
}

#[test]
fn plan_rejects_malformed_departure() {
    cli()
        .args(["plan", "--departure", "01/09/2025"])
        .assert()
        .failure()
        .stderr(contains("invalid --departure"));
}

#[test]
fn simulate_inline_waypoints_in_calm_weather() {
    let output = cli()
        .args(["--format", "json", "simulate", "--calm", "--stw", "14"])
        .args(["--waypoint", "0,0", "--waypoint", "0,60"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let hours = json["totals"]["hours"].as_f64().expect("hours");
    assert!((hours - 257.32).abs() < 0.01, "{hours}");
    assert_eq!(json["legs"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["laycan_risk"]["status"], "early");
}

#[test]
fn simulate_from_waypoint_file_is_reproducible_with_seed() {
    let run = || {
        cli()
            .args(["--format", "json", "simulate", "--seed", "7", "--ship", "tanker"])
            .arg("--waypoints")
            .arg(fixture("waypoints.json"))
            .args(["--speed", "1=12"])
            .output()
            .expect("run cli")
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let json: serde_json::Value = serde_json::from_slice(&first.stdout).expect("valid json");
    assert_eq!(json["legs"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["legs"][1]["stw_commanded"], 12.0);
}

#[test]
fn simulate_negative_coordinates_text_output() {
    cli()
        .args(["simulate", "--calm", "--waypoint", "-33.9,18.4", "--waypoint", "-34.5,25.0"])
        .assert()
        .success()
        .stdout(contains("Voyage simulation (container, 1 legs)"))
        .stdout(contains("Laycan: early"));
}

#[test]
fn simulate_rejects_bad_waypoint_file() {
    let temp = tempdir().expect("temp dir");
    let path = temp.path().join("route.json");
    fs::write(&path, "{\"not\": \"a route\"}").expect("write file");

    cli()
        .args(["simulate", "--calm", "--waypoints"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("is not a JSON list of [lat, lng] pairs"));
}

#[test]
fn simulate_requires_a_route() {
    cli()
        .args(["simulate", "--calm"])
        .assert()
        .failure()
        .stderr(contains("--waypoints FILE"));
}

#[test]
fn ports_search_filters_by_name() {
    cli()
        .args(["ports", "--search", "long"])
        .assert()
        .success()
        .stdout(contains("Ports (1):"))
        .stdout(contains("Long Beach"));
}

#[test]
fn ships_lists_builtin_types() {
    cli()
        .arg("ships")
        .assert()
        .success()
        .stdout(contains("Available ships (5):"))
        .stdout(contains("Container Ship"))
        .stdout(contains("RoRo Vessel"));
}

#[test]
fn ship_data_from_environment() {
    cli()
        .env("MARITIME_SHIP_DATA", fixture("ships.csv"))
        .arg("ships")
        .assert()
        .success()
        .stdout(contains("Available ships (2):"))
        .stdout(contains("Capesize Bulk Carrier"));
}

#[test]
fn port_flag_overrides_environment() {
    cli()
        .env("MARITIME_PORT_DATA", "/nonexistent/ports.csv")
        .arg("--ports")
        .arg(fixture("ports.csv"))
        .arg("ports")
        .assert()
        .success()
        .stdout(contains("Santos"));
}

#[test]
fn missing_reference_file_fails_with_path() {
    cli()
        .args(["--hubs", "/nonexistent/hubs.csv", "ships"])
        .assert()
        .failure()
        .stderr(contains("/nonexistent/hubs.csv"));
}

#[test]
fn conditions_report_gale_in_gulf_of_aden() {
    cli()
        .args(["conditions", "--lat", "12.5", "--lng", "47", "--wind-speed", "18"])
        .args(["--visibility", "6000"])
        .assert()
        .success()
        .stdout(contains("[MEDIUM] Gale Warning"))
        .stdout(contains("[HIGH] Security Alert: Gulf of Aden"))
        .stdout(contains("Follow BMP5 security guidelines"));
}
