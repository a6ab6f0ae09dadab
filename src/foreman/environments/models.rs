//! Environment data models

use serde::Deserialize;

/// Response wrapper for the environments listing endpoint
#[derive(Deserialize, Debug)]
pub struct EnvironmentsResponse {
    pub results: Vec<Environment>,
}

/// One configured Foreman environment
///
/// Names carry no uniqueness guarantee - duplicates accumulate under the
/// same key when grouped.
#[derive(Deserialize, Debug, Clone)]
pub struct Environment {
    pub name: String,
    pub id: i64,
}
