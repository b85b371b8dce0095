//! Climate API server.
//!
//! Read-only JSON endpoints over a SQLite database of weather stations and
//! their daily measurements: precipitation history, station lists,
//! temperature observations and min/avg/max temperature summaries.

pub mod config;
pub mod store;
pub mod web;
