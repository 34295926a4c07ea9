//! Typed clients for the Contxt platform services.
//!
//! Each service module wraps the shared [`ServiceClient`] HTTP core with the
//! operations the CLI consumes. All clients are constructed with the same
//! [`CliAuth`] context and attach its bearer token to every request.

use crate::auth::CliAuth;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;
use url::Url;

pub mod assets;
pub mod contxt;
pub mod ems;
pub mod events;
pub mod facilities;
pub mod health;
pub mod iot;
pub mod sis;

pub use assets::AssetsService;
pub use contxt::ContxtService;
pub use ems::EmsService;
pub use events::EventsService;
pub use facilities::FacilitiesService;
pub use health::HealthService;
pub use iot::IotService;
pub use sis::SisService;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error emitted by the Contxt platform APIs
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("authentication error: {0}")]
    AuthError(#[from] crate::auth::AuthError),
    #[error("invalid service endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("unexpected response from server: {0}")]
    UnexpectedResponse(StatusCode),
}

/// Shared HTTP core for one service: base URL, HTTP connection pool and the
/// session authentication context.
pub(crate) struct ServiceClient {
    auth: Arc<CliAuth>,
    http: reqwest::Client,
    base_url: Url,
}

impl ServiceClient {
    pub fn new(base_url: &str, auth: Arc<CliAuth>) -> Result<ServiceClient, ApiError> {
        let base_url = Url::parse(base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(crate::auth::USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(ServiceClient {
            auth,
            http,
            base_url,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_with_query(path, &[]).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let token = self.auth.access_token().await?;
        let url = format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path);

        trace!("GET {}", &url);

        let mut request = self.http.get(&url).bearer_auth(token);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(ApiError::UnexpectedResponse(status))
        }
    }
}
