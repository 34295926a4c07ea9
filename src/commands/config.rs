//! Configuration command definitions.

use crate::commands::params::{
    organization_parameter, output_file_parameter, COMMAND_CONFIG, COMMAND_GET, COMMAND_PATH,
    COMMAND_SET,
};
use clap::Command;

/// Create the config command with all its subcommands.
pub fn config_command() -> Command {
    Command::new(COMMAND_CONFIG)
        .about("Manage the CLI configuration")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Show the current configuration")
                .arg(output_file_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_SET)
                .about("Set configuration values")
                .arg(organization_parameter().help("Organization ID to make active")),
        )
        .subcommand(Command::new(COMMAND_PATH).about("Show the configuration file path"))
}
