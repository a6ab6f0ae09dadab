//! Environment API operations

use crate::error::Result;
use crate::foreman::ForemanClient;

use super::models::{Environment, EnvironmentsResponse};

impl ForemanClient {
    /// Get all configured environments from the listing endpoint
    pub async fn get_environments(&self) -> Result<Vec<Environment>> {
        let url = self.base_url().to_string();
        let response: EnvironmentsResponse = self.get_json(&url, "environments").await?;
        Ok(response.results)
    }
}
