//! Response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::store::Temperature;

/// Date → average precipitation across stations.
pub type PrecipitationResponse = BTreeMap<String, Option<f64>>;

/// Station codes.
pub type StationsResponse = Vec<String>;

/// A single date → temperature object, wrapped in a one-element array.
pub type TobsResponse = [BTreeMap<String, Option<Temperature>>; 1];

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
