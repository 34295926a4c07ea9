//! Authentication context shared by every API client.
//!
//! A [`CliAuth`] holds the OAuth2 client credentials for one CLI session and
//! exchanges them for an access token on first use. The token is kept for
//! the lifetime of the session; persistent token storage and refresh are the
//! responsibility of the platform, not this client.

use crate::configuration::Configuration;
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const USER_AGENT: &str = concat!("contxt-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Authentication failed: {0}")]
    AuthFailed(String),
    #[error("invalid client ID in configuration")]
    InvalidClientId,
    #[error("invalid client secret in configuration")]
    InvalidClientSecret,
    #[error("no stored credentials; run 'contxt auth login' first")]
    MissingCredentials,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
    pub token_type: String,
}

/// Credential/session handle for one CLI invocation.
///
/// The token cell is deliberately unsynchronized; a `CliAuth` lives on the
/// single CLI task and is shared read-only by the service clients.
pub struct CliAuth {
    token_url: Url,
    client_id: String,
    client_secret: String,
    token: OnceCell<String>,
}

impl CliAuth {
    pub fn new(client_id: String, client_secret: String, token_url: Url) -> CliAuth {
        CliAuth {
            token_url,
            client_id,
            client_secret,
            token: OnceCell::new(),
        }
    }

    /// Build an authentication context from the stored configuration.
    pub fn from_configuration(configuration: &Configuration) -> Result<CliAuth, AuthError> {
        let (client_id, client_secret) = configuration
            .credentials()
            .ok_or(AuthError::MissingCredentials)?;
        Ok(CliAuth::new(
            client_id.to_string(),
            client_secret.to_string(),
            configuration.auth_token_url(),
        ))
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Return the session access token, fetching it on first use.
    pub async fn access_token(&self) -> Result<String, AuthError> {
        if let Some(token) = self.token.get() {
            return Ok(token.clone());
        }
        let token = self.request_token().await?;
        let _ = self.token.set(token.clone());
        Ok(token)
    }

    /// Exchange the client credentials for an access token.
    async fn request_token(&self) -> Result<String, AuthError> {
        if self.client_id.is_empty() {
            return Err(AuthError::InvalidClientId);
        }
        if self.client_secret.is_empty() {
            return Err(AuthError::InvalidClientSecret);
        }

        tracing::debug!("Requesting access token from {}", &self.token_url);

        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        let params = [("grant_type", "client_credentials")];
        let response = client
            .post(self.token_url.clone())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .form(&params)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Token endpoint responded with status {}", status);

        if status.is_success() {
            let token_response: TokenResponse = response.json().await?;
            Ok(token_response.access_token)
        } else {
            let error_body = response.text().await.unwrap_or_default();
            let details = match serde_json::from_str::<serde_json::Value>(&error_body) {
                Ok(error_json) => match error_json.get("error").and_then(|e| e.as_str()) {
                    Some("invalid_client") => {
                        "invalid client credentials; check your client ID and secret".to_string()
                    }
                    Some(other) => other.to_string(),
                    None => error_body,
                },
                Err(_) => error_body,
            };
            tracing::error!("Token request failed with status {}: {}", status, &details);
            Err(AuthError::AuthFailed(format!("HTTP {} {}", status, details)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(id: &str, secret: &str) -> CliAuth {
        CliAuth::new(
            id.to_string(),
            secret.to_string(),
            Url::parse("https://contxt.auth0.com/oauth/token").unwrap(),
        )
    }

    #[tokio::test]
    async fn empty_client_id_is_rejected_before_any_request() {
        let err = auth("", "secret").access_token().await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidClientId));
    }

    #[tokio::test]
    async fn empty_client_secret_is_rejected_before_any_request() {
        let err = auth("id", "").access_token().await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidClientSecret));
    }
}
