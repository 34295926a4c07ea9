//! Client for the energy management service.

use super::{ApiError, ServiceClient};
use crate::auth::CliAuth;
use crate::model::{MainService, RecordsPage, UtilitySpend};
use chrono::NaiveDate;
use std::sync::Arc;

pub struct EmsService {
    client: ServiceClient,
}

impl EmsService {
    pub const BASE_URL: &'static str = "https://ems.api.ndustrial.io/v1";

    pub fn new(auth: Arc<CliAuth>) -> Result<EmsService, ApiError> {
        Ok(EmsService {
            client: ServiceClient::new(Self::BASE_URL, auth)?,
        })
    }

    pub async fn list_main_services(
        &self,
        facility_id: u64,
    ) -> Result<Vec<MainService>, ApiError> {
        let page: RecordsPage<MainService> = self
            .client
            .get(&format!("facilities/{facility_id}/services"))
            .await?;
        Ok(page.records)
    }

    /// Monthly utility spend over an inclusive date window. Only whole days
    /// are meaningful to this API; time of day never enters the query.
    pub async fn get_monthly_utility_spend(
        &self,
        facility_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<UtilitySpend, ApiError> {
        let query = [
            ("type", "monthly".to_string()),
            ("date_start", start.format("%Y-%m-%d").to_string()),
            ("date_end", end.format("%Y-%m-%d").to_string()),
        ];
        self.client
            .get_with_query(&format!("facilities/{facility_id}/utility-spend"), &query)
            .await
    }
}
