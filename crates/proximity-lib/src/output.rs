use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::record::{Record, UserId};

/// Header line of the text report.
pub const TEXT_HEADER: &str = "user_id\tname";

/// One customer line of a rendered report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportRow {
    pub user_id: UserId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl ReportRow {
    pub fn from_record(record: &Record) -> Self {
        Self {
            user_id: record.user_id,
            name: record.name.clone(),
            distance_km: None,
        }
    }

    pub fn with_distance(mut self, distance_km: Option<f64>) -> Self {
        self.distance_km = distance_km;
        self
    }
}

/// Structured report that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportSummary {
    pub count: usize,
    pub customers: Vec<ReportRow>,
}

impl ReportSummary {
    pub fn new(customers: Vec<ReportRow>) -> Self {
        Self {
            count: customers.len(),
            customers,
        }
    }

    pub fn from_records(records: &[Record]) -> Self {
        Self::new(records.iter().map(ReportRow::from_record).collect())
    }

    /// Tab-separated rendering with a `user_id\tname` header.
    ///
    /// Names are written as JSON strings so embedded tabs or newlines cannot
    /// break the columns. When any row carries a distance, a `distance_km`
    /// column is added.
    pub fn render_text(&self) -> String {
        let with_distance = self.customers.iter().any(|row| row.distance_km.is_some());
        let mut buffer = String::from(TEXT_HEADER);
        if with_distance {
            buffer.push_str("\tdistance_km");
        }
        buffer.push('\n');

        for row in &self.customers {
            let _ = write!(buffer, "{}\t{}", row.user_id, quote(&row.name));
            if with_distance {
                match row.distance_km {
                    Some(distance) => {
                        let _ = write!(buffer, "\t{:.3}", distance);
                    }
                    None => buffer.push_str("\t-"),
                }
            }
            buffer.push('\n');
        }
        buffer
    }

    /// Pretty-printed JSON rendering.
    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Render)
    }
}

fn quote(name: &str) -> String {
    serde_json::Value::from(name).to_string()
}
