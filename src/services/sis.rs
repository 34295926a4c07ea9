//! Client for the system integration service.

use super::{ApiError, ServiceClient};
use crate::auth::CliAuth;
use crate::model::{IntegrationJob, RecordsPage};
use std::sync::Arc;

pub struct SisService {
    client: ServiceClient,
}

impl SisService {
    pub const BASE_URL: &'static str = "https://sis.api.ndustrial.io/v1";

    pub fn new(auth: Arc<CliAuth>) -> Result<SisService, ApiError> {
        Ok(SisService {
            client: ServiceClient::new(Self::BASE_URL, auth)?,
        })
    }

    pub async fn list_jobs(
        &self,
        organization_id: &str,
    ) -> Result<Vec<IntegrationJob>, ApiError> {
        let page: RecordsPage<IntegrationJob> = self
            .client
            .get(&format!("organizations/{organization_id}/jobs"))
            .await?;
        Ok(page.records)
    }
}
