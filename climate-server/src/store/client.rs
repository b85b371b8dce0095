//! Async access to the observations database.
//!
//! Every call opens its own [`Session`] on the blocking pool and drops it
//! before returning. Nothing is shared between calls except the file path.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::StoreResult;
use super::models::{DatasetRange, Station, Temperature, TemperatureSummary};
use super::schema::check_schema;
use super::session::Session;

/// Handle to the observations database.
#[derive(Debug, Clone)]
pub struct ClimateStore {
    path: Arc<PathBuf>,
}

impl ClimateStore {
    /// Create a handle for the database at `path`. Nothing is opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `f` inside a fresh session.
    pub async fn with_session<T, F>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Session) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || {
            let session = Session::open(&path)?;
            f(&session)
        })
        .await?
    }

    /// Fail if either table or any declared column is missing.
    pub async fn verify_schema(&self) -> StoreResult<()> {
        self.with_session(check_schema).await
    }

    pub async fn dataset_range(&self) -> StoreResult<Option<DatasetRange>> {
        self.with_session(Session::dataset_range).await
    }

    pub async fn station_records(&self) -> StoreResult<Vec<Station>> {
        self.with_session(Session::station_records).await
    }

    /// Average daily precipitation over the last twelve months of data.
    pub async fn last_year_precipitation(&self) -> StoreResult<BTreeMap<String, Option<f64>>> {
        self.with_session(|session| match session.latest_date_minus_one_year()? {
            Some(since) => session.precipitation_by_date(&since),
            None => Ok(BTreeMap::new()),
        })
        .await
    }

    pub async fn stations(&self) -> StoreResult<Vec<String>> {
        self.with_session(Session::list_stations).await
    }

    /// Temperatures over the last twelve months at the most-observed station.
    pub async fn busiest_station_last_year_temperatures(
        &self,
    ) -> StoreResult<BTreeMap<String, Option<Temperature>>> {
        self.with_session(|session| {
            let since = session.latest_date_minus_one_year()?;
            let station = session.busiest_station()?;
            match (since, station) {
                (Some(since), Some(station)) => {
                    session.temperature_observations_by_date(&station, &since)
                }
                _ => Ok(BTreeMap::new()),
            }
        })
        .await
    }

    pub async fn temperature_summary(
        &self,
        start: String,
        end: Option<String>,
    ) -> StoreResult<TemperatureSummary> {
        self.with_session(move |session| session.temperature_summary(&start, end.as_deref()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use crate::store::fixtures::{TestDb, measurement};

    #[tokio::test]
    async fn last_year_precipitation_uses_window() {
        let db = TestDb::with_measurements(&[
            measurement("A", "2016-08-22", Some(1.0), 70),
            measurement("A", "2016-08-23", Some(0.2), 71),
            measurement("A", "2017-08-23", Some(0.4), 81),
        ]);
        let store = ClimateStore::new(&db.path);

        let precipitation = store.last_year_precipitation().await.unwrap();
        let dates: Vec<_> = precipitation.keys().map(String::as_str).collect();
        assert_eq!(dates, ["2016-08-23", "2017-08-23"]);
    }

    #[tokio::test]
    async fn empty_database_gives_empty_results() {
        let db = TestDb::empty();
        let store = ClimateStore::new(&db.path);

        assert!(store.last_year_precipitation().await.unwrap().is_empty());
        assert!(store.stations().await.unwrap().is_empty());
        assert!(
            store
                .busiest_station_last_year_temperatures()
                .await
                .unwrap()
                .is_empty()
        );
        assert!(
            store
                .temperature_summary("2017-01-01".into(), None)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn busiest_station_temperatures_exclude_other_stations() {
        let db = TestDb::with_measurements(&[
            measurement("A", "2017-08-20", None, 75),
            measurement("A", "2017-08-21", None, 76),
            measurement("B", "2017-08-21", None, 60),
        ]);
        let store = ClimateStore::new(&db.path);

        let temperatures = store.busiest_station_last_year_temperatures().await.unwrap();
        assert_eq!(temperatures.len(), 2);
        assert_eq!(temperatures["2017-08-21"], Some(Temperature::Whole(76)));
    }

    #[tokio::test]
    async fn missing_database_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ClimateStore::new(dir.path().join("missing.sqlite"));

        let err = store.verify_schema().await.unwrap_err();
        assert!(matches!(err, StoreError::Open { .. }));
    }
}
