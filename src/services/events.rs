//! Client for the events service.

use super::{ApiError, ServiceClient};
use crate::auth::CliAuth;
use crate::model::{Event, EventType, RecordsPage};
use std::sync::Arc;

pub struct EventsService {
    client: ServiceClient,
}

impl EventsService {
    pub const BASE_URL: &'static str = "https://events.api.ndustrial.io/v1";

    pub fn new(auth: Arc<CliAuth>) -> Result<EventsService, ApiError> {
        Ok(EventsService {
            client: ServiceClient::new(Self::BASE_URL, auth)?,
        })
    }

    pub async fn list_event_types(&self) -> Result<Vec<EventType>, ApiError> {
        let page: RecordsPage<EventType> = self.client.get("types").await?;
        Ok(page.records)
    }

    pub async fn list_events(&self, event_type_id: Option<&str>) -> Result<Vec<Event>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(type_id) = event_type_id {
            query.push(("event_type_id", type_id.to_string()));
        }
        let page: RecordsPage<Event> = self.client.get_with_query("events", &query).await?;
        Ok(page.records)
    }
}
