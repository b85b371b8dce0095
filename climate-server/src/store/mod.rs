//! Read-only access to the weather observations database.
//!
//! The database holds a `station` table of site metadata and a
//! `measurement` table of daily readings. All queries are aggregates
//! evaluated by SQLite.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod fixtures;
mod models;
mod schema;
mod session;

pub use client::ClimateStore;
pub use error::{StoreError, StoreResult};
pub use models::{
    DatasetRange, Measurement, Station, Table, Temperature, TemperatureSummary,
};
pub use schema::{check_schema, check_table};
pub use session::Session;
