//! Validated geographic coordinates.
//!
//! A [`Coordinate`] can only be obtained through [`Coordinate::parse`] or
//! [`Coordinate::from_degrees`], so every value in circulation satisfies
//! `|latitude| <= 90` and `|longitude| <= 180`. Angles are stored in radians to
//! feed the trigonometry in [`crate::distance`] directly.

use std::f64::consts::PI;
use std::fmt;

use crate::distance::distance_km;
use crate::error::{Axis, CoordinateError};

/// Maximum latitude magnitude in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// Maximum longitude magnitude in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// A point on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat_rad: f64,
    lon_rad: f64,
}

impl Coordinate {
    /// Parse a latitude/longitude pair given as decimal degree strings.
    ///
    /// The text must be a plain decimal numeral (`"53.339428"`, `"-6.25"`,
    /// `"1e1"`). Surrounding whitespace, comma decimal separators, hexadecimal,
    /// cardinal suffixes and degree/minute/second notation are all rejected.
    /// Numerals that evaluate to NaN or infinity are parse failures rather
    /// than range failures.
    ///
    /// # Errors
    ///
    /// * [`CoordinateError::Parse`] when either value is not a finite numeral.
    /// * [`CoordinateError::Range`] when latitude exceeds ±90 or longitude
    ///   exceeds ±180.
    ///
    /// # Examples
    ///
    /// ```
    /// use proximity_lib::Coordinate;
    ///
    /// let dublin = Coordinate::parse("53.339428", "-6.257664").unwrap();
    /// assert!((dublin.latitude() - 53.339428).abs() < 1e-12);
    /// assert!(Coordinate::parse("91", "0").is_err());
    /// ```
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, CoordinateError> {
        let lat = parse_degrees(Axis::Latitude, latitude)?;
        let lon = parse_degrees(Axis::Longitude, longitude)?;
        Self::from_degrees(lat, lon)
    }

    /// Build a coordinate from numeric degrees, applying the same validation
    /// as [`Coordinate::parse`].
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        let lat = check_range(Axis::Latitude, latitude)?;
        let lon = check_range(Axis::Longitude, longitude)?;
        Ok(Self {
            lat_rad: lat * PI / 180.0,
            lon_rad: lon * PI / 180.0,
        })
    }

    /// Latitude in radians, within `[-π/2, π/2]`.
    pub fn lat_rad(&self) -> f64 {
        self.lat_rad
    }

    /// Longitude in radians, within `[-π, π]`.
    pub fn lon_rad(&self) -> f64 {
        self.lon_rad
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.lat_rad * 180.0 / PI
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.lon_rad * 180.0 / PI
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_km_to(&self, other: &Coordinate) -> f64 {
        distance_km(self, other)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude(), self.longitude())
    }
}

fn parse_degrees(axis: Axis, text: &str) -> Result<f64, CoordinateError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CoordinateError::Parse {
            axis,
            value: text.to_string(),
        })
}

fn check_range(axis: Axis, value: f64) -> Result<f64, CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::Parse {
            axis,
            value: value.to_string(),
        });
    }
    if value.abs() > axis.limit_degrees() {
        return Err(CoordinateError::Range { axis, value });
    }
    Ok(value)
}
