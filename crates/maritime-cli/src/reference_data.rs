//! Resolve and load reference data overrides for the CLI.

use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use maritime_lib::ReferenceCatalog;

pub const PORT_DATA_ENV: &str = "MARITIME_PORT_DATA";
pub const SHIP_DATA_ENV: &str = "MARITIME_SHIP_DATA";
pub const HUB_DATA_ENV: &str = "MARITIME_HUB_DATA";

/// CSV files replacing built-in catalog tables. `None` keeps the built-in table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceDataPaths {
    pub ports: Option<PathBuf>,
    pub ships: Option<PathBuf>,
    pub hubs: Option<PathBuf>,
}

impl ReferenceDataPaths {
    /// Fill each path from the command line first, then its environment variable.
    pub fn resolve(ports: Option<PathBuf>, ships: Option<PathBuf>, hubs: Option<PathBuf>) -> Self {
        Self {
            ports: ports.or_else(|| env_path(PORT_DATA_ENV)),
            ships: ships.or_else(|| env_path(SHIP_DATA_ENV)),
            hubs: hubs.or_else(|| env_path(HUB_DATA_ENV)),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.ports.is_none() && self.ships.is_none() && self.hubs.is_none()
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Build the catalog the commands run against.
///
/// Without overrides this borrows the process-wide built-in catalog.
pub fn load_catalog(paths: &ReferenceDataPaths) -> Result<Cow<'static, ReferenceCatalog>> {
    if paths.is_builtin() {
        return Ok(Cow::Borrowed(ReferenceCatalog::shared()));
    }

    let mut builder = ReferenceCatalog::builder();
    if let Some(path) = &paths.ports {
        builder = builder
            .ports_from_reader(open(path)?)
            .with_context(|| format!("failed to load port data from {}", path.display()))?;
    }
    if let Some(path) = &paths.ships {
        builder = builder
            .ships_from_reader(open(path)?)
            .with_context(|| format!("failed to load ship data from {}", path.display()))?;
    }
    if let Some(path) = &paths.hubs {
        builder = builder
            .bunker_hubs_from_reader(open(path)?)
            .with_context(|| format!("failed to load bunkering hub data from {}", path.display()))?;
    }

    tracing::debug!(?paths, "loading reference data overrides");
    builder
        .build()
        .map(Cow::Owned)
        .context("reference data is inconsistent")
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("failed to open {}", path.display()))
}
