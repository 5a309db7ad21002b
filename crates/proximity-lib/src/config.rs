//! Reference location configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coord::Coordinate;
use crate::diagnostics::DiagnosticSink;
use crate::error::{Error, Result};
use crate::proximity::ProximityFilter;

/// Latitude of the default reference location (Dublin office).
pub const DEFAULT_LATITUDE: f64 = 53.339428;

/// Longitude of the default reference location (Dublin office).
pub const DEFAULT_LONGITUDE: f64 = -6.257664;

/// Default inclusion radius in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 100.0;

/// Where to measure from and how far to look.
///
/// Fields omitted from a configuration file keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceConfig {
    /// Reference latitude in decimal degrees.
    pub latitude: f64,
    /// Reference longitude in decimal degrees.
    pub longitude: f64,
    /// Inclusion radius in kilometres (inclusive).
    pub radius_km: f64,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

impl ReferenceConfig {
    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|source| Error::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), ?config, "loaded reference configuration");
        Ok(config)
    }

    /// The validated reference coordinate.
    pub fn reference(&self) -> Result<Coordinate> {
        Ok(Coordinate::from_degrees(self.latitude, self.longitude)?)
    }

    /// Validate and build a [`ProximityFilter`] reporting to `diagnostics`.
    pub fn into_filter<S: DiagnosticSink>(self, diagnostics: S) -> Result<ProximityFilter<S>> {
        ProximityFilter::new(self.reference()?, self.radius_km, diagnostics)
    }
}
