//! Customer proximity report library entry points.
//!
//! This crate validates geographic coordinates, computes great-circle
//! distances, and streams line-delimited customer JSON into a report of the
//! customers within a radius of a reference location. Higher-level consumers
//! (the CLI) should only depend on the items exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod config;
pub mod coord;
pub mod diagnostics;
pub mod distance;
pub mod error;
pub mod output;
pub mod proximity;
pub mod record;
pub mod report;

pub use config::ReferenceConfig;
pub use coord::Coordinate;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, NoopSink, TracingSink};
pub use distance::{distance_km, EARTH_MEAN_RADIUS_KM};
pub use error::{Axis, CoordinateError, Error, Result};
pub use output::{ReportRow, ReportSummary};
pub use proximity::ProximityFilter;
pub use record::{RawRecord, Record, UserId};
pub use report::{build_report, scan_report, Report, ReportStats};
