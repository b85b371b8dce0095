//! Test databases.

use std::path::PathBuf;

use rusqlite::{Connection, params};
use tempfile::TempDir;

use super::models::{Measurement, Station, Temperature};

/// A throwaway database on disk. The file lives as long as this value.
pub struct TestDb {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestDb {
    /// Create both tables with the column layout of the Hawaii dataset.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hawaii.sqlite");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE station (
                id INTEGER PRIMARY KEY,
                station TEXT,
                name TEXT,
                latitude FLOAT,
                longitude FLOAT,
                elevation FLOAT
            );
            CREATE TABLE measurement (
                id INTEGER PRIMARY KEY,
                station TEXT,
                date TEXT,
                prcp FLOAT,
                tobs INTEGER
            );",
        )
        .unwrap();
        Self { _dir: dir, path }
    }

    pub fn with_measurements(rows: &[Measurement]) -> Self {
        let db = Self::empty();
        db.insert_measurements(rows);
        db
    }

    pub fn insert_measurements(&self, rows: &[Measurement]) {
        let conn = Connection::open(&self.path).unwrap();
        for m in rows {
            let tobs: Box<dyn rusqlite::ToSql> = match m.tobs {
                Temperature::Whole(t) => Box::new(t),
                Temperature::Decimal(t) => Box::new(t),
            };
            conn.execute(
                "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
                params![m.station, m.date, m.prcp, tobs],
            )
            .unwrap();
        }
    }

    /// Insert a measurement whose station code is NULL.
    pub fn insert_unattributed(&self, date: &str, tobs: i64) {
        let conn = Connection::open(&self.path).unwrap();
        conn.execute(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES (NULL, ?1, NULL, ?2)",
            params![date, tobs],
        )
        .unwrap();
    }

    pub fn insert_stations(&self, rows: &[Station]) {
        let conn = Connection::open(&self.path).unwrap();
        for s in rows {
            conn.execute(
                "INSERT INTO station (station, name, latitude, longitude, elevation)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![s.station, s.name, s.latitude, s.longitude, s.elevation],
            )
            .unwrap();
        }
    }
}

/// Shorthand for a measurement with a whole-degree temperature.
pub fn measurement(station: &str, date: &str, prcp: Option<f64>, tobs: i64) -> Measurement {
    Measurement {
        station: station.to_string(),
        date: date.to_string(),
        prcp,
        tobs: Temperature::Whole(tobs),
    }
}

pub fn station(code: &str, name: &str) -> Station {
    Station {
        station: code.to_string(),
        name: name.to_string(),
        latitude: 21.2716,
        longitude: -157.8168,
        elevation: 3.0,
    }
}
