//! Client for the IoT service (feeds and their fields).

use super::{ApiError, ServiceClient};
use crate::auth::CliAuth;
use crate::model::{Feed, FeedField, RecordsPage};
use std::sync::Arc;

pub struct IotService {
    client: ServiceClient,
}

impl IotService {
    pub const BASE_URL: &'static str = "https://feeds.api.ndustrial.io/v1";

    pub fn new(auth: Arc<CliAuth>) -> Result<IotService, ApiError> {
        Ok(IotService {
            client: ServiceClient::new(Self::BASE_URL, auth)?,
        })
    }

    pub async fn list_feeds(&self, facility_id: Option<u64>) -> Result<Vec<Feed>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(facility_id) = facility_id {
            query.push(("facility_id", facility_id.to_string()));
        }
        let page: RecordsPage<Feed> = self.client.get_with_query("feeds", &query).await?;
        Ok(page.records)
    }

    pub async fn list_fields(&self, feed_id: u64) -> Result<Vec<FeedField>, ApiError> {
        let page: RecordsPage<FeedField> = self
            .client
            .get(&format!("feeds/{feed_id}/fields"))
            .await?;
        Ok(page.records)
    }
}
