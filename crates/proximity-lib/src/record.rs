//! Customer record shapes.
//!
//! [`RawRecord`] mirrors one JSON input line as-is; [`Record`] is the
//! validated form that only exists when the line carried a `user_id`.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coord::Coordinate;
use crate::error::CoordinateError;

/// Customer identifier as it appears in the `user_id` field.
pub type UserId = i64;

/// One decoded input line before validation.
///
/// Missing string fields decode as empty strings; a missing or `null`
/// `user_id` decodes as `None`. Unknown fields are ignored; keys are matched
/// case-sensitively, so `User_ID` is an unknown field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl RawRecord {
    /// Decode one input line.
    ///
    /// The line must hold a JSON object. Arrays are refused explicitly because
    /// a derived struct decoder would otherwise accept them positionally.
    pub fn from_json(line: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(line)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom(format_args!(
                "expected a JSON object, found {}",
                describe(&value)
            )));
        }
        Self::deserialize(value)
    }

    /// Promote to a [`Record`], or `None` when the line had no identifier.
    ///
    /// Coordinates are copied verbatim; their validity is only checked when a
    /// filter actually needs the location.
    pub fn into_record(self) -> Option<Record> {
        let user_id = self.user_id?;
        Some(Record {
            latitude: self.latitude,
            longitude: self.longitude,
            name: self.name,
            user_id,
        })
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A customer entry that carries an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub latitude: String,
    pub longitude: String,
    pub name: String,
    pub user_id: UserId,
}

impl Record {
    /// Parse this record's location.
    pub fn coordinate(&self) -> Result<Coordinate, CoordinateError> {
        Coordinate::parse(&self.latitude, &self.longitude)
    }
}
