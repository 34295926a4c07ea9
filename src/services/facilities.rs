//! Client for the facilities service.

use super::{ApiError, ServiceClient};
use crate::auth::CliAuth;
use crate::model::Facility;
use std::sync::Arc;

pub struct FacilitiesService {
    client: ServiceClient,
}

impl FacilitiesService {
    pub const BASE_URL: &'static str = "https://facilities.api.ndustrial.io/v1";

    pub fn new(auth: Arc<CliAuth>) -> Result<FacilitiesService, ApiError> {
        Ok(FacilitiesService {
            client: ServiceClient::new(Self::BASE_URL, auth)?,
        })
    }

    pub async fn list_facilities(
        &self,
        organization_id: &str,
    ) -> Result<Vec<Facility>, ApiError> {
        self.client
            .get(&format!("organizations/{organization_id}/facilities"))
            .await
    }

    pub async fn get_facility(&self, facility_id: u64) -> Result<Facility, ApiError> {
        self.client.get(&format!("facilities/{facility_id}")).await
    }
}
