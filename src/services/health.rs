//! Client for the asset health service.

use super::{ApiError, ServiceClient};
use crate::auth::CliAuth;
use crate::model::{HealthStatus, RecordsPage};
use std::sync::Arc;

pub struct HealthService {
    client: ServiceClient,
}

impl HealthService {
    pub const BASE_URL: &'static str = "https://health.api.ndustrial.io/v1";

    pub fn new(auth: Arc<CliAuth>) -> Result<HealthService, ApiError> {
        Ok(HealthService {
            client: ServiceClient::new(Self::BASE_URL, auth)?,
        })
    }

    pub async fn list_statuses(
        &self,
        organization_id: &str,
    ) -> Result<Vec<HealthStatus>, ApiError> {
        let page: RecordsPage<HealthStatus> = self
            .client
            .get(&format!("{organization_id}/assets"))
            .await?;
        Ok(page.records)
    }
}
