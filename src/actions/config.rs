//! Configuration command handlers.

use super::CliActionError;
use crate::commands::params::{PARAMETER_ORGANIZATION, PARAMETER_OUTPUT};
use crate::configuration::Configuration;
use crate::format::warn;
use clap::ArgMatches;
use std::path::PathBuf;
use tracing::trace;

/// Show the configuration; with `--output`, export it to a file instead.
pub fn show_configuration(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'config get' command");

    let configuration = Configuration::load_or_create_default()?;

    if let Some(path) = sub_matches.get_one::<PathBuf>(PARAMETER_OUTPUT) {
        configuration.save(path)?;
        return Ok(());
    }

    // never echo the stored secret to the console
    let mut display = configuration;
    if let Some(client_id) = display.credentials().map(|(id, _)| id.to_string()) {
        display.set_credentials(client_id, "*".repeat(8));
    }
    print!("{}", serde_yaml::to_string(&display)?);
    Ok(())
}

pub fn show_path() -> Result<(), CliActionError> {
    trace!("Executing 'config path' command");

    let path = Configuration::get_default_configuration_file_path()?;
    println!("{}", path.display());
    Ok(())
}

pub fn set_values(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'config set' command");

    let mut configuration = Configuration::load_or_create_default()?;
    match sub_matches.get_one::<String>(PARAMETER_ORGANIZATION) {
        Some(organization_id) => {
            configuration.set_active_organization(organization_id.clone());
            configuration.save_to_default()?;
            Ok(())
        }
        None => {
            warn("Nothing to set. Pass --org <id>.");
            Ok(())
        }
    }
}
