#![allow(dead_code)]

use std::fs::File;
use std::path::PathBuf;

use maritime_lib::ReferenceCatalog;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_file(name: &str) -> File {
    let path = fixtures_dir().join(name);
    File::open(&path).unwrap_or_else(|err| panic!("open fixture {}: {err}", path.display()))
}

/// Built-in catalog with the fixture ports, ships and hubs swapped in.
pub fn fixture_catalog() -> ReferenceCatalog {
    ReferenceCatalog::builder()
        .ports_from_reader(fixture_file("ports.csv"))
        .expect("fixture ports.csv loads")
        .ships_from_reader(fixture_file("ships.csv"))
        .expect("fixture ships.csv loads")
        .bunker_hubs_from_reader(fixture_file("hubs.csv"))
        .expect("fixture hubs.csv loads")
        .build()
        .expect("fixture catalog is valid")
}

pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
