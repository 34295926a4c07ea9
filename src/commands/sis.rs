//! System integration command definitions.

use crate::commands::params::{
    fields_parameter, format_parameter, format_pretty_parameter, organization_parameter,
    sort_parameter, FieldSelection, COMMAND_JOBS, COMMAND_SIS,
};
use crate::model::IntegrationJob;
use clap::Command;

/// Create the system integration command with all its subcommands.
pub fn sis_command() -> Command {
    Command::new(COMMAND_SIS)
        .about("System integration")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_JOBS)
                .about("List integration jobs")
                .arg(organization_parameter())
                .arg(fields_parameter(FieldSelection::new(
                    IntegrationJob::FIELDS.iter().copied(),
                )))
                .arg(sort_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}
