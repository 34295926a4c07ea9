//! Configuration management for the Contxt CLI.
//!
//! The configuration lives as a YAML file under the platform configuration
//! directory (`contxt/config.yml`), overridable with `CONTXT_CONFIG_DIR`.
//! It stores the OAuth client credentials, an optional token endpoint
//! override and the active organization.

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};
use tracing::debug;
use url::Url;

pub const DEFAULT_APPLICATION_ID: &str = "contxt";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";
pub const DEFAULT_AUTH_TOKEN_URL: &str = "https://contxt.auth0.com/oauth/token";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data, because of: {cause:?}")]
    FailedToLoadData { cause: Box<dyn std::error::Error> },
    #[error("failed to write configuration data to file, because of: {cause:?}")]
    FailedToWriteData { cause: Box<dyn std::error::Error> },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth_token_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_organization_id: Option<String>,
}

impl Configuration {
    /// Stored client credentials, if the user has logged in.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret.as_str())),
            _ => None,
        }
    }

    pub fn set_credentials(&mut self, client_id: String, client_secret: String) {
        self.client_id = Some(client_id);
        self.client_secret = Some(client_secret);
    }

    pub fn clear_credentials(&mut self) {
        self.client_id = None;
        self.client_secret = None;
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Token endpoint, falling back to the platform default.
    pub fn auth_token_url(&self) -> Url {
        self.auth_token_url
            .clone()
            .unwrap_or_else(|| Url::parse(DEFAULT_AUTH_TOKEN_URL).expect("default token URL"))
    }

    pub fn set_auth_token_url(&mut self, url: Url) {
        self.auth_token_url = Some(url);
    }

    pub fn active_organization_id(&self) -> Option<&str> {
        self.active_organization_id.as_deref()
    }

    pub fn set_active_organization(&mut self, organization_id: String) {
        self.active_organization_id = Some(organization_id);
    }

    pub fn clear_active_organization(&mut self) {
        self.active_organization_id = None;
    }

    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        // CONTXT_CONFIG_DIR takes precedence over the platform directory
        if let Ok(config_dir_str) = std::env::var("CONTXT_CONFIG_DIR") {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match config_dir() {
            Some(configuration_directory) => {
                let mut default_config_file_path = configuration_directory;
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    pub fn load_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        debug!("Loading configuration from {:?}...", &default_file_path);
        Configuration::load_from_file(default_file_path)
    }

    /// Load the default configuration, creating an empty one if none exists.
    pub fn load_or_create_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        match Configuration::load_from_file(default_file_path.clone()) {
            Ok(configuration) => Ok(configuration),
            Err(ConfigurationError::FailedToLoadData { cause })
                if cause
                    .downcast_ref::<std::io::Error>()
                    .map(|e| e.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false) =>
            {
                debug!("Configuration file not found, creating default configuration");
                let default_configuration = Configuration::default();
                default_configuration.save(&default_file_path)?;
                Ok(default_configuration)
            }
            Err(e) => Err(e),
        }
    }

    pub fn load_from_file(path: PathBuf) -> Result<Configuration, ConfigurationError> {
        let contents = fs::read_to_string(path)
            .map_err(|cause| ConfigurationError::FailedToLoadData {
                cause: Box::new(cause),
            })?;
        serde_yaml::from_str(&contents).map_err(|cause| ConfigurationError::FailedToLoadData {
            cause: Box::new(cause),
        })
    }

    pub fn write(&self, writer: Box<dyn Write>) -> Result<(), ConfigurationError> {
        serde_yaml::to_writer(writer, self).map_err(|cause| {
            ConfigurationError::FailedToWriteData {
                cause: Box::new(cause),
            }
        })
    }

    pub fn save(&self, path: &PathBuf) -> Result<(), ConfigurationError> {
        match path.parent() {
            Some(parent) => fs::create_dir_all(parent)
                .map_err(|_| ConfigurationError::FailedToFindConfigurationDirectory)?,
            None => return Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }

        let file = File::create(path).map_err(|cause| ConfigurationError::FailedToWriteData {
            cause: Box::new(cause),
        })?;
        self.write(Box::new(file))
    }

    pub fn save_to_default(&self) -> Result<(), ConfigurationError> {
        self.save(&Self::get_default_configuration_file_path()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_round_trips_through_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIGURATION_FILE_NAME);

        let mut configuration = Configuration::default();
        configuration.set_credentials("id".to_string(), "secret".to_string());
        configuration.set_active_organization("org-1".to_string());
        configuration.save(&path).unwrap();

        let loaded = Configuration::load_from_file(path).unwrap();
        assert_eq!(loaded, configuration);
        assert_eq!(loaded.credentials(), Some(("id", "secret")));
        assert_eq!(loaded.active_organization_id(), Some("org-1"));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Configuration::load_from_file(dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, ConfigurationError::FailedToLoadData { .. }));
    }

    #[test]
    fn default_token_url_is_used_when_not_overridden() {
        let configuration = Configuration::default();
        assert_eq!(
            configuration.auth_token_url().as_str(),
            DEFAULT_AUTH_TOKEN_URL
        );
    }
}
