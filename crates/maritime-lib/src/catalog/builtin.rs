//! Built-in reference data used when no CSV overrides are supplied.

use crate::geo::BoundingBox;
use crate::risk::RiskLevel;

use super::{BunkerHub, GeoZone, Port, ShipProfile};

fn port(name: &str, lat: f64, lng: f64, country: &str, bunker: f64, per_ton: f64) -> Port {
    Port {
        name: name.to_string(),
        lat,
        lng,
        country: country.to_string(),
        bunker_price: bunker,
        port_cost_per_ton: per_ton,
    }
}

pub(super) fn ports() -> Vec<Port> {
    vec![
        port("Singapore", 1.3521, 103.8198, "Singapore", 680.0, 0.8),
        port("Rotterdam", 51.9225, 4.4792, "Netherlands", 650.0, 0.9),
        port("Shanghai", 31.2304, 121.4737, "China", 670.0, 0.7),
        port("Hamburg", 53.5511, 9.9937, "Germany", 660.0, 0.85),
        port("Los Angeles", 33.7485, -118.2436, "USA", 720.0, 1.0),
        port("Dubai", 25.2532, 55.3657, "UAE", 640.0, 0.75),
        port("Hong Kong", 22.3193, 114.1694, "Hong Kong", 675.0, 0.8),
        port("Antwerp", 51.2194, 4.4025, "Belgium", 655.0, 0.9),
        port("Long Beach", 33.7701, -118.1937, "USA", 715.0, 1.0),
        port("Busan", 35.1796, 129.0756, "South Korea", 690.0, 0.8),
        port("Tokyo", 35.6162, 139.7431, "Japan", 700.0, 0.9),
        port("Mumbai", 19.0760, 72.8777, "India", 635.0, 0.6),
        port("Felixstowe", 51.9542, 1.3509, "UK", 665.0, 0.85),
        port("Valencia", 39.4699, -0.3763, "Spain", 645.0, 0.8),
    ]
}

pub(super) fn bunker_hubs() -> Vec<BunkerHub> {
    let hub = |name: &str, lat: f64, lng: f64, price: f64| BunkerHub {
        name: name.to_string(),
        lat,
        lng,
        bunker_price: price,
    };
    vec![
        hub("Singapore", 1.3521, 103.8198, 680.0),
        hub("Rotterdam", 51.9225, 4.4792, 650.0),
        hub("Fujairah", 25.1164, 56.3467, 645.0),
        hub("Gibraltar", 36.1408, -5.3536, 660.0),
    ]
}

#[allow(clippy::too_many_arguments)]
fn ship(
    key: &str,
    name: &str,
    rate: f64,
    speed: f64,
    cost: f64,
    efficiency: f64,
    capacity: f64,
    dwt: (f64, f64),
) -> ShipProfile {
    ShipProfile {
        type_key: key.to_string(),
        name: name.to_string(),
        fuel_rate_tons_per_day: rate,
        avg_speed_knots: speed,
        cost_per_ton_fuel: cost,
        fuel_efficiency_factor: efficiency,
        fuel_capacity_tons: capacity,
        dwt_min: dwt.0,
        dwt_max: dwt.1,
    }
}

pub(super) fn ships() -> Vec<ShipProfile> {
    vec![
        ship("container", "Container Ship", 250.0, 22.0, 8.5, 1.0, 5000.0, (50_000.0, 200_000.0)),
        ship("bulk", "Bulk Carrier", 180.0, 14.0, 7.8, 0.9, 4000.0, (10_000.0, 400_000.0)),
        ship("tanker", "Oil Tanker", 200.0, 16.0, 8.2, 0.95, 4500.0, (5_000.0, 320_000.0)),
        ship("general", "General Cargo", 120.0, 18.0, 7.5, 1.1, 3000.0, (1_000.0, 60_000.0)),
        ship("roro", "RoRo Vessel", 160.0, 20.0, 8.0, 1.05, 3500.0, (5_000.0, 80_000.0)),
    ]
}

pub(super) fn zones() -> Vec<GeoZone> {
    vec![
        GeoZone::eca(
            "North American ECA",
            "North American Emission Control Area",
            0.1,
            BoundingBox::new(25.0, 50.0, -130.0, -65.0),
        ),
        GeoZone::eca(
            "North Sea ECA",
            "North Sea and English Channel ECA",
            0.1,
            BoundingBox::new(51.0, 62.0, -5.0, 12.0),
        ),
        GeoZone::eca(
            "Baltic Sea ECA",
            "Baltic Sea ECA",
            0.1,
            BoundingBox::new(53.5, 66.0, 10.0, 30.0),
        ),
        GeoZone::piracy(
            "Gulf of Aden",
            "High piracy risk area",
            RiskLevel::High,
            BoundingBox::new(10.0, 18.0, 42.0, 52.0),
        ),
        GeoZone::piracy(
            "West Africa",
            "Gulf of Guinea piracy zone",
            RiskLevel::High,
            BoundingBox::new(-5.0, 10.0, -10.0, 8.0),
        ),
        GeoZone::piracy(
            "Strait of Malacca",
            "Moderate piracy risk",
            RiskLevel::Medium,
            BoundingBox::new(1.0, 6.0, 100.0, 105.0),
        ),
    ]
}
