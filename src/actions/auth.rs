//! Authentication command handlers.

use super::CliActionError;
use crate::auth::CliAuth;
use crate::commands::params::{PARAMETER_CLIENT_ID, PARAMETER_CLIENT_SECRET};
use crate::configuration::Configuration;
use clap::ArgMatches;
use tracing::trace;

/// Login with client credentials, prompting for whatever was not passed on
/// the command line. The credentials are validated against the token
/// endpoint before they are stored.
pub async fn login(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'auth login' command");

    let mut configuration = Configuration::load_or_create_default()?;

    let client_id = match sub_matches.get_one::<String>(PARAMETER_CLIENT_ID) {
        Some(client_id) => client_id.clone(),
        None => inquire::Text::new("Client ID:").prompt()?,
    };
    let client_secret = match sub_matches.get_one::<String>(PARAMETER_CLIENT_SECRET) {
        Some(client_secret) => client_secret.clone(),
        None => inquire::Password::new("Client secret:")
            .without_confirmation()
            .prompt()?,
    };

    let auth = CliAuth::new(
        client_id.clone(),
        client_secret.clone(),
        configuration.auth_token_url(),
    );
    auth.access_token().await?;

    configuration.set_credentials(client_id, client_secret);
    configuration.save_to_default()?;
    println!("Login successful.");
    Ok(())
}

pub fn logout() -> Result<(), CliActionError> {
    trace!("Executing 'auth logout' command");

    let mut configuration = Configuration::load_or_create_default()?;
    configuration.clear_credentials();
    configuration.save_to_default()?;
    println!("Logged out.");
    Ok(())
}
