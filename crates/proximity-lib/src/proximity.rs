//! Radius filter around a fixed reference location.

use crate::coord::Coordinate;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{CoordinateError, Error, Result};
use crate::record::Record;

/// Decides whether a [`Record`] lies within `radius_km` of a reference point.
///
/// Records whose coordinates cannot be parsed are reported to the diagnostic
/// sink and classified as not near; [`ProximityFilter::is_near`] never fails.
#[derive(Debug, Clone)]
pub struct ProximityFilter<S> {
    reference: Coordinate,
    radius_km: f64,
    diagnostics: S,
}

impl<S: DiagnosticSink> ProximityFilter<S> {
    /// Create a filter around `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadius`] when `radius_km` is negative or not
    /// finite.
    pub fn new(reference: Coordinate, radius_km: f64, diagnostics: S) -> Result<Self> {
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(Error::InvalidRadius { radius_km });
        }
        Ok(Self {
            reference,
            radius_km,
            diagnostics,
        })
    }

    pub fn reference(&self) -> Coordinate {
        self.reference
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Distance from the reference point to the record, in kilometres.
    pub fn distance_to(&self, record: &Record) -> std::result::Result<f64, CoordinateError> {
        let location = record.coordinate()?;
        Ok(self.reference.distance_km_to(&location))
    }

    /// `true` when the record is at most `radius_km` from the reference.
    pub fn is_near(&self, record: &Record) -> bool {
        match self.distance_to(record) {
            Ok(distance) => distance <= self.radius_km,
            Err(error) => {
                self.diagnostics.report(&Diagnostic::InvalidCoordinate {
                    user_id: record.user_id,
                    name: record.name.clone(),
                    error,
                });
                false
            }
        }
    }
}
