//! Web layer for the climate API.
//!
//! Provides the JSON endpoints over the observations database and an HTML
//! landing page listing them.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
