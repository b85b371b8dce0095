//! A read-only session against the observations database.
//!
//! Date arguments are opaque strings: they are bound into `>=`/`<=`
//! comparisons as-is, so a malformed date simply matches nothing.

use std::collections::BTreeMap;
use std::path::Path;

use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use tracing::trace;

use super::error::{StoreError, StoreResult};
use super::models::{DatasetRange, Station, Table, Temperature, TemperatureSummary};

/// One short-lived connection. Closed when dropped.
pub struct Session {
    conn: Connection,
}

impl Session {
    /// Open a read-only session. Fails if the file does not exist.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        trace!(path = %path.display(), "opened session");
        Ok(Self { conn })
    }

    /// Names of the columns of `table`, empty if the table does not exist.
    pub fn column_names(&self, table: &str) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM pragma_table_info(?1)")?;
        let names = stmt
            .query_map([table], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }

    /// The latest measurement date minus one calendar year.
    ///
    /// Uses SQLite's date arithmetic, so `2016-02-29` becomes `2015-03-01`.
    /// `None` when there are no measurements.
    pub fn latest_date_minus_one_year(&self) -> StoreResult<Option<String>> {
        let date = self.conn.query_row(
            "SELECT DATE(MAX(date), '-1 year') FROM measurement",
            [],
            |row| row.get(0),
        )?;
        Ok(date)
    }

    /// Average precipitation across all stations for each date on or after `since`.
    pub fn precipitation_by_date(
        &self,
        since: &str,
    ) -> StoreResult<BTreeMap<String, Option<f64>>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, AVG(prcp) FROM measurement
             WHERE date >= ?1
             GROUP BY date
             ORDER BY date",
        )?;
        let rows = stmt
            .query_map([since], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<BTreeMap<String, Option<f64>>, _>>()?;
        Ok(rows)
    }

    /// Distinct stations that have at least one measurement.
    ///
    /// Rows without a station code are skipped.
    pub fn list_stations(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT station FROM measurement
             WHERE station IS NOT NULL
             GROUP BY station
             ORDER BY station",
        )?;
        let stations = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(stations)
    }

    /// The station with the most measurements.
    ///
    /// Equal counts go to the lexicographically smallest station code.
    /// Rows without a station code are not counted.
    pub fn busiest_station(&self) -> StoreResult<Option<String>> {
        let station = self
            .conn
            .query_row(
                "SELECT station FROM measurement
                 WHERE station IS NOT NULL
                 GROUP BY station
                 ORDER BY COUNT(*) DESC, station ASC
                 LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(station)
    }

    /// Temperatures recorded at `station` on or after `since`, keyed by date.
    pub fn temperature_observations_by_date(
        &self,
        station: &str,
        since: &str,
    ) -> StoreResult<BTreeMap<String, Option<Temperature>>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, tobs FROM measurement
             WHERE date >= ?1 AND station = ?2
             ORDER BY date",
        )?;
        let rows = stmt
            .query_map(params![since, station], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .collect::<Result<BTreeMap<String, Option<Temperature>>, _>>()?;
        Ok(rows)
    }

    /// Minimum, average and maximum temperature from `start`, up to `end` inclusive if given.
    pub fn temperature_summary(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> StoreResult<TemperatureSummary> {
        let summary = self.conn.query_row(
            "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement
             WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)",
            params![start, end],
            |row| {
                Ok(TemperatureSummary {
                    min: row.get(0)?,
                    avg: row.get(1)?,
                    max: row.get(2)?,
                })
            },
        )?;
        Ok(summary)
    }

    /// First and last measurement dates, `None` when there are no measurements.
    pub fn dataset_range(&self) -> StoreResult<Option<DatasetRange>> {
        let (earliest, latest): (Option<String>, Option<String>) = self.conn.query_row(
            "SELECT MIN(date), MAX(date) FROM measurement",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(earliest
            .zip(latest)
            .map(|(earliest, latest)| DatasetRange { earliest, latest }))
    }

    /// All rows of the station table, ordered by station code.
    pub fn station_records(&self) -> StoreResult<Vec<Station>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY station",
            Station::COLUMNS.join(", "),
            Station::NAME
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let stations = stmt
            .query_map([], Station::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(stations)
    }
}
