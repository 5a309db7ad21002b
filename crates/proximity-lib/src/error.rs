use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::coord::{MAX_LATITUDE, MAX_LONGITUDE};

/// Convenient result alias for the proximity library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which half of a latitude/longitude pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest legal magnitude in degrees for this axis.
    pub fn limit_degrees(self) -> f64 {
        match self {
            Axis::Latitude => MAX_LATITUDE,
            Axis::Longitude => MAX_LONGITUDE,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Failure to turn a latitude/longitude pair into a [`Coordinate`](crate::Coordinate).
///
/// Both variants are recoverable: the proximity filter treats either as
/// "not near" and keeps going.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// The text is not a finite decimal numeral.
    #[error("could not parse {axis} {value:?} as a finite number")]
    Parse { axis: Axis, value: String },

    /// The numeral is valid but outside the geographic range for its axis.
    #[error("{axis} {value} is out of range (must be within ±{})", .axis.limit_degrees())]
    Range { axis: Axis, value: f64 },
}

impl CoordinateError {
    /// Axis the error was raised for.
    pub fn axis(&self) -> Axis {
        match self {
            CoordinateError::Parse { axis, .. } | CoordinateError::Range { axis, .. } => *axis,
        }
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a configured reference location is not a valid coordinate.
    #[error("invalid reference location: {0}")]
    Coordinate(#[from] CoordinateError),

    /// Raised when the configured search radius is negative or not finite.
    #[error("invalid radius {radius_km} km; expected a finite, non-negative distance")]
    InvalidRadius { radius_km: f64 },

    /// Raised when a configuration file cannot be read.
    #[error("failed to read configuration from {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a configuration file is not a valid reference configuration.
    #[error("failed to parse configuration from {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Raised when serializing a report to JSON fails.
    #[error("failed to render report: {0}")]
    Render(#[source] serde_json::Error),

    /// Wrapper for IO errors raised by the input stream.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_error_mentions_axis_limit() {
        let err = CoordinateError::Range {
            axis: Axis::Longitude,
            value: 180.5,
        };
        assert_eq!(
            err.to_string(),
            "longitude 180.5 is out of range (must be within ±180)"
        );
        assert_eq!(err.axis(), Axis::Longitude);
    }

    #[test]
    fn parse_error_quotes_the_input() {
        let err = CoordinateError::Parse {
            axis: Axis::Latitude,
            value: "23N".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not parse latitude \"23N\" as a finite number"
        );
    }

    #[test]
    fn coordinate_errors_convert_into_library_errors() {
        let err: Error = CoordinateError::Range {
            axis: Axis::Latitude,
            value: 91.0,
        }
        .into();
        assert!(matches!(err, Error::Coordinate(_)));
        assert!(err.to_string().starts_with("invalid reference location"));
    }
}
