//! Client for the asset registry service.

use super::{ApiError, ServiceClient};
use crate::auth::CliAuth;
use crate::model::{Asset, AssetType, RecordsPage};
use std::sync::Arc;

pub struct AssetsService {
    client: ServiceClient,
}

impl AssetsService {
    pub const BASE_URL: &'static str = "https://assets.api.ndustrial.io/v1";

    pub fn new(auth: Arc<CliAuth>) -> Result<AssetsService, ApiError> {
        Ok(AssetsService {
            client: ServiceClient::new(Self::BASE_URL, auth)?,
        })
    }

    pub async fn list_asset_types(
        &self,
        organization_id: &str,
    ) -> Result<Vec<AssetType>, ApiError> {
        let page: RecordsPage<AssetType> = self
            .client
            .get(&format!("organizations/{organization_id}/assettypes"))
            .await?;
        Ok(page.records)
    }

    pub async fn list_assets(
        &self,
        organization_id: &str,
        asset_type_id: Option<&str>,
    ) -> Result<Vec<Asset>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(type_id) = asset_type_id {
            query.push(("asset_type_id", type_id.to_string()));
        }
        let page: RecordsPage<Asset> = self
            .client
            .get_with_query(&format!("organizations/{organization_id}/assets"), &query)
            .await?;
        Ok(page.records)
    }

    pub async fn get_asset(&self, asset_id: &str) -> Result<Asset, ApiError> {
        self.client.get(&format!("assets/{asset_id}")).await
    }
}
