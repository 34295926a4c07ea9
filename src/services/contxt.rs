//! Client for the core Contxt platform service (organizations and users).

use super::{ApiError, ServiceClient};
use crate::auth::CliAuth;
use crate::model::{Organization, RecordsPage, User};
use std::sync::Arc;

pub struct ContxtService {
    client: ServiceClient,
}

impl ContxtService {
    pub const BASE_URL: &'static str = "https://contxt.api.ndustrial.io/v1";

    pub fn new(auth: Arc<CliAuth>) -> Result<ContxtService, ApiError> {
        Ok(ContxtService {
            client: ServiceClient::new(Self::BASE_URL, auth)?,
        })
    }

    pub async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError> {
        self.client.get("organizations").await
    }

    pub async fn list_users(&self, organization_id: &str) -> Result<Vec<User>, ApiError> {
        let page: RecordsPage<User> = self
            .client
            .get(&format!("organizations/{organization_id}/users"))
            .await?;
        Ok(page.records)
    }
}
