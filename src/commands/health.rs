//! Health command definitions.

use crate::commands::params::{
    fields_parameter, format_parameter, format_pretty_parameter, organization_parameter,
    sort_parameter, FieldSelection, COMMAND_HEALTH, COMMAND_LIST,
};
use crate::model::HealthStatus;
use clap::Command;

/// Create the health command with all its subcommands.
pub fn health_command() -> Command {
    Command::new(COMMAND_HEALTH)
        .about("Asset health")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List asset health statuses")
                .visible_alias("ls")
                .arg(organization_parameter())
                .arg(fields_parameter(FieldSelection::new(
                    HealthStatus::FIELDS.iter().copied(),
                )))
                .arg(sort_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}
