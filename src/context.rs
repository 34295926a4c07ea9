//! Execution context builder for CLI commands.
//!
//! Centralizes the common initialization every data-fetching command needs:
//! load the configuration, build the authentication context, and hand out
//! the per-session client registry.

use crate::{
    actions::CliActionError, auth::CliAuth, clients::Clients,
    commands::params::PARAMETER_ORGANIZATION, configuration::Configuration,
};
use clap::ArgMatches;
use std::sync::Arc;

/// Execution context containing the common resources needed by CLI commands.
pub struct ExecutionContext {
    pub configuration: Configuration,
    pub clients: Clients,
}

impl ExecutionContext {
    pub fn new() -> Result<ExecutionContext, CliActionError> {
        let configuration = Configuration::load_or_create_default()?;
        let auth = CliAuth::from_configuration(&configuration)?;
        let clients = Clients::new(Arc::new(auth));
        Ok(ExecutionContext {
            configuration,
            clients,
        })
    }

    /// Resolve the organization for a command: an explicit `--org` wins,
    /// otherwise the configured active organization.
    pub fn organization_id(&self, sub_matches: &ArgMatches) -> Result<String, CliActionError> {
        if let Some(organization_id) = sub_matches.get_one::<String>(PARAMETER_ORGANIZATION) {
            return Ok(organization_id.clone());
        }
        self.configuration
            .active_organization_id()
            .map(str::to_string)
            .ok_or_else(|| {
                CliActionError::MissingRequiredArgument(
                    "organization: pass --org or set one with 'contxt config set --org <id>'"
                        .to_string(),
                )
            })
    }
}
