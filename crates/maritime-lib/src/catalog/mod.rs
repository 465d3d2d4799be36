//! Immutable reference data: ports, bunkering hubs, ship profiles and zones.
//!
//! This module is organized into focused submodules:
//!
//! - [`ports`] - Port and bunkering hub records
//! - [`ships`] - Ship type profiles
//! - [`zones`] - Emission control and piracy zones
//!
//! A [`ReferenceCatalog`] is built once and then only read. It is passed by
//! reference into the planner and the simulator; there is no mutation API.
//!
//! # Example
//!
//! ```
//! use maritime_lib::catalog::ReferenceCatalog;
//!
//! let catalog = ReferenceCatalog::builtin();
//! let port = catalog.port("rotterdam").expect("built-in port");
//! assert_eq!(port.country, "Netherlands");
//! assert!(catalog.ship("submarine").is_none());
//! ```

mod builtin;
pub mod ports;
pub mod ships;
pub mod zones;

pub use ports::{BunkerHub, Port};
pub use ships::ShipProfile;
pub use zones::{GeoZone, ZoneCategory};

use std::collections::HashMap;
use std::io::Read;

use csv::{ReaderBuilder, Trim};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

use crate::error::{Error, ReferenceKind, Result};

/// Suggestions attached to unknown-name errors.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum Jaro-Winkler similarity for a name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

static SHARED: Lazy<ReferenceCatalog> = Lazy::new(ReferenceCatalog::builtin);

/// A record that can be loaded into the catalog from CSV.
pub trait CatalogRecord: DeserializeOwned {
    const KIND: ReferenceKind;

    /// Name used as the (case-insensitive) lookup key.
    fn name(&self) -> &str;

    fn validate(&self) -> Result<()>;
}

/// Ordered records with a case-insensitive name index.
#[derive(Debug, Clone)]
struct Table<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: CatalogRecord> Table<T> {
    fn from_records(records: Vec<T>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            record.validate()?;
            let key = normalize_name(record.name());
            if index.insert(key.clone(), position).is_some() {
                return Err(Error::DuplicateCatalogEntry {
                    kind: T::KIND,
                    name: key,
                });
            }
        }
        Ok(Self { records, index })
    }

    fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let mut records = Vec::new();
        for (row, record) in csv_reader.deserialize::<T>().enumerate() {
            let record = record.map_err(|err| Error::CatalogValidation {
                // header is line 1
                message: format!("{} data row {}: {err}", T::KIND, row + 2),
            })?;
            records.push(record);
        }

        Self::from_records(records)
    }

    fn get(&self, name: &str) -> Option<&T> {
        self.index
            .get(&normalize_name(name))
            .map(|&position| &self.records[position])
    }

    fn require(&self, name: &str) -> Result<&T> {
        self.get(name).ok_or_else(|| Error::InvalidReference {
            kind: T::KIND,
            name: name.to_string(),
            suggestions: self.fuzzy_matches(name),
        })
    }

    fn fuzzy_matches(&self, name: &str) -> Vec<String> {
        let needle = normalize_name(name);
        let mut scored: Vec<(f64, &str)> = self
            .records
            .iter()
            .map(|r| (strsim::jaro_winkler(&needle, &normalize_name(r.name())), r.name()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

/// Read-only lookup of all reference data the core consumes.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    ports: Table<Port>,
    hubs: Table<BunkerHub>,
    ships: Table<ShipProfile>,
    zones: Vec<GeoZone>,
}

impl ReferenceCatalog {
    /// The built-in reference data set.
    pub fn builtin() -> Self {
        ReferenceCatalogBuilder::new()
            .build()
            .unwrap_or_else(|err| unreachable!("built-in catalog is valid: {err}"))
    }

    /// Process-wide immutable instance of [`ReferenceCatalog::builtin`].
    pub fn shared() -> &'static ReferenceCatalog {
        &SHARED
    }

    pub fn builder() -> ReferenceCatalogBuilder {
        ReferenceCatalogBuilder::new()
    }

    /// Look up a port by name (case-insensitive).
    pub fn port(&self, name: &str) -> Option<&Port> {
        self.ports.get(name)
    }

    /// Look up a port, converting a miss into [`Error::InvalidReference`].
    pub fn require_port(&self, name: &str) -> Result<&Port> {
        self.ports.require(name)
    }

    pub fn bunker_hub(&self, name: &str) -> Option<&BunkerHub> {
        self.hubs.get(name)
    }

    pub fn require_bunker_hub(&self, name: &str) -> Result<&BunkerHub> {
        self.hubs.require(name)
    }

    /// Look up a ship profile by type key (case-insensitive).
    pub fn ship(&self, type_key: &str) -> Option<&ShipProfile> {
        self.ships.get(type_key)
    }

    pub fn require_ship(&self, type_key: &str) -> Result<&ShipProfile> {
        self.ships.require(type_key)
    }

    pub fn ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.records.iter()
    }

    pub fn bunker_hubs(&self) -> impl Iterator<Item = &BunkerHub> {
        self.hubs.records.iter()
    }

    pub fn ships(&self) -> impl Iterator<Item = &ShipProfile> {
        self.ships.records.iter()
    }

    pub fn zones(&self) -> impl Iterator<Item = &GeoZone> {
        self.zones.iter()
    }

    pub fn eca_zones(&self) -> impl Iterator<Item = &GeoZone> {
        self.zones.iter().filter(|zone| zone.is_eca())
    }

    pub fn piracy_zones(&self) -> impl Iterator<Item = &GeoZone> {
        self.zones.iter().filter(|zone| zone.piracy_level().is_some())
    }

    /// Bunkering hub with the lowest bunker price; ties keep catalog order.
    pub fn cheapest_bunker_hub(&self) -> Option<&BunkerHub> {
        self.hubs
            .records
            .iter()
            .reduce(|best, hub| if hub.bunker_price < best.bunker_price { hub } else { best })
    }

    /// Ports whose name contains `term` (case-insensitive), sorted by name.
    ///
    /// An empty term matches every port.
    pub fn search_ports(&self, term: &str) -> Vec<&Port> {
        let needle = normalize_name(term);
        let mut matches: Vec<&Port> = self
            .ports
            .records
            .iter()
            .filter(|port| normalize_name(&port.name).contains(&needle))
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        matches
    }

    /// Sorted list of ship type keys.
    pub fn ship_types(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.ships().map(|s| s.type_key.clone()).collect();
        keys.sort();
        keys
    }
}

/// Assembles a [`ReferenceCatalog`], optionally replacing built-in tables with CSV data.
///
/// Each table that is not overridden keeps the built-in records.
#[derive(Debug, Default)]
pub struct ReferenceCatalogBuilder {
    ports: Option<Vec<Port>>,
    hubs: Option<Vec<BunkerHub>>,
    ships: Option<Vec<ShipProfile>>,
    zones: Option<Vec<GeoZone>>,
}

impl ReferenceCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ports(mut self, ports: Vec<Port>) -> Self {
        self.ports = Some(ports);
        self
    }

    pub fn bunker_hubs(mut self, hubs: Vec<BunkerHub>) -> Self {
        self.hubs = Some(hubs);
        self
    }

    pub fn ships(mut self, ships: Vec<ShipProfile>) -> Self {
        self.ships = Some(ships);
        self
    }

    pub fn zones(mut self, zones: Vec<GeoZone>) -> Self {
        self.zones = Some(zones);
        self
    }

    /// Replace the port table with CSV rows
    /// (`name,lat,lng,country,bunker_price,port_cost_per_ton`).
    pub fn ports_from_reader<R: Read>(mut self, reader: R) -> Result<Self> {
        self.ports = Some(Table::<Port>::from_reader(reader)?.records);
        Ok(self)
    }

    /// Replace the bunkering hub table with CSV rows (`name,lat,lng,bunker_price`).
    pub fn bunker_hubs_from_reader<R: Read>(mut self, reader: R) -> Result<Self> {
        self.hubs = Some(Table::<BunkerHub>::from_reader(reader)?.records);
        Ok(self)
    }

    /// Replace the ship table with CSV rows (see [`ShipProfile`] for the columns).
    pub fn ships_from_reader<R: Read>(mut self, reader: R) -> Result<Self> {
        self.ships = Some(Table::<ShipProfile>::from_reader(reader)?.records);
        Ok(self)
    }

    pub fn build(self) -> Result<ReferenceCatalog> {
        let catalog = ReferenceCatalog {
            ports: Table::from_records(self.ports.unwrap_or_else(builtin::ports))?,
            hubs: Table::from_records(self.hubs.unwrap_or_else(builtin::bunker_hubs))?,
            ships: Table::from_records(self.ships.unwrap_or_else(builtin::ships))?,
            zones: self.zones.unwrap_or_else(builtin::zones),
        };

        tracing::debug!(
            ports = catalog.ports.records.len(),
            hubs = catalog.hubs.records.len(),
            ships = catalog.ships.records.len(),
            zones = catalog.zones.len(),
            "reference catalog built"
        );

        Ok(catalog)
    }
}

/// Normalize a name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn builtin_catalog_has_expected_counts() {
        let catalog = ReferenceCatalog::builtin();
        assert_eq!(catalog.ports().count(), 14);
        assert_eq!(catalog.bunker_hubs().count(), 4);
        assert_eq!(catalog.ships().count(), 5);
        assert_eq!(catalog.eca_zones().count(), 3);
        assert_eq!(catalog.piracy_zones().count(), 3);
    }

    #[test]
    fn lookups_ignore_case_and_whitespace() {
        let catalog = ReferenceCatalog::builtin();
        assert!(catalog.port("  hong kong ").is_some());
        assert!(catalog.ship("CONTAINER").is_some());
        assert!(catalog.bunker_hub("fujairah").is_some());
    }

    #[test]
    fn require_port_suggests_close_names() {
        let catalog = ReferenceCatalog::builtin();
        let err = catalog.require_port("Rotterdm").expect_err("unknown port");
        match err {
            Error::InvalidReference {
                kind,
                name,
                suggestions,
            } => {
                assert_eq!(kind, ReferenceKind::Port);
                assert_eq!(name, "Rotterdm");
                assert_eq!(suggestions.first().map(String::as_str), Some("Rotterdam"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn cheapest_hub_is_fujairah() {
        let catalog = ReferenceCatalog::builtin();
        let hub = catalog.cheapest_bunker_hub().expect("hubs present");
        assert_eq!(hub.name, "Fujairah");
    }

    #[test]
    fn search_ports_is_sorted_substring_match() {
        let catalog = ReferenceCatalog::builtin();
        let names: Vec<&str> = catalog
            .search_ports("on")
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Hong Kong", "Long Beach"]);
        assert_eq!(catalog.search_ports("").len(), 14);
    }

    #[test]
    fn ports_csv_replaces_builtin_ports_only() {
        let csv = "name,lat,lng,country,bunker_price,port_cost_per_ton\n\
                   Lagos, 6.45, 3.39, Nigeria, 700, 1.1\n";
        let catalog = ReferenceCatalog::builder()
            .ports_from_reader(Cursor::new(csv))
            .expect("valid csv")
            .build()
            .expect("valid catalog");
        assert_eq!(catalog.ports().count(), 1);
        assert_eq!(catalog.port("lagos").map(|p| p.lat), Some(6.45));
        assert_eq!(catalog.ships().count(), 5);
    }

    #[test]
    fn csv_parse_errors_report_row() {
        let csv = "name,lat,lng,bunker_price\nFujairah,25.1,56.3,abc\n";
        let err = ReferenceCatalog::builder()
            .bunker_hubs_from_reader(Cursor::new(csv))
            .expect_err("bad price");
        match err {
            Error::CatalogValidation { message } => assert!(message.contains("row 2")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
