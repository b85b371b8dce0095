//! Row types for the observations database.
//!
//! The database is owned by someone else; these types declare the tables and
//! columns this server relies on so they can be checked once at startup.

use rusqlite::Row;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

/// A table this server reads from.
pub trait Table {
    /// Table name in the database.
    const NAME: &'static str;

    /// Columns that must be present.
    const COLUMNS: &'static [&'static str];
}

/// A weather station.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Station code, e.g. "USC00519397"
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl Table for Station {
    const NAME: &'static str = "station";
    const COLUMNS: &'static [&'static str] =
        &["station", "name", "latitude", "longitude", "elevation"];
}

impl Station {
    /// Build a station from a row selected in `COLUMNS` order.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            station: row.get(0)?,
            name: row.get(1)?,
            latitude: row.get(2)?,
            longitude: row.get(3)?,
            elevation: row.get(4)?,
        })
    }
}

/// One daily observation at a station.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub station: String,
    /// ISO-8601 date, compared as a string
    pub date: String,
    /// Precipitation, absent on days without a reading
    pub prcp: Option<f64>,
    /// Observed temperature
    pub tobs: Temperature,
}

impl Table for Measurement {
    const NAME: &'static str = "measurement";
    const COLUMNS: &'static [&'static str] = &["station", "date", "prcp", "tobs"];
}

/// A temperature value as stored.
///
/// SQLite keeps integers and reals apart, and `MIN`/`MAX` return whichever
/// storage class the winning row has. Keeping the distinction means a whole
/// number stored as an integer serializes as `81`, not `81.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Temperature {
    Whole(i64),
    Decimal(f64),
}

impl Temperature {
    pub fn as_f64(self) -> f64 {
        match self {
            Temperature::Whole(t) => t as f64,
            Temperature::Decimal(t) => t,
        }
    }
}

impl FromSql for Temperature {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(t) => Ok(Temperature::Whole(t)),
            ValueRef::Real(t) => Ok(Temperature::Decimal(t)),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

/// Minimum, average and maximum temperature over a date range.
///
/// Every field is `None` when no measurement falls in the range.
/// Serializes as the array `[min, avg, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemperatureSummary {
    pub min: Option<Temperature>,
    pub avg: Option<f64>,
    pub max: Option<Temperature>,
}

impl TemperatureSummary {
    /// True when no measurement matched.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

impl Serialize for TemperatureSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.min)?;
        tuple.serialize_element(&self.avg)?;
        tuple.serialize_element(&self.max)?;
        tuple.end()
    }
}

/// First and last measurement dates in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRange {
    pub earliest: String,
    pub latest: String,
}

impl DatasetRange {
    /// Number of days covered, if both ends parse as `YYYY-MM-DD`.
    pub fn span_days(&self) -> Option<i64> {
        let earliest = chrono::NaiveDate::parse_from_str(&self.earliest, "%Y-%m-%d").ok()?;
        let latest = chrono::NaiveDate::parse_from_str(&self.latest, "%Y-%m-%d").ok()?;
        Some((latest - earliest).num_days())
    }
}
