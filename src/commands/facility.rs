//! Facility command definitions.

use crate::commands::params::{
    facility_parameter, fields_parameter, format_parameter, format_pretty_parameter,
    organization_parameter, sort_parameter, FieldSelection, COMMAND_FACILITY, COMMAND_GET,
    COMMAND_LIST,
};
use crate::model::Facility;
use clap::Command;

/// Create the facility command with all its subcommands.
pub fn facility_command() -> Command {
    Command::new(COMMAND_FACILITY)
        .about("Manage facilities")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List facilities")
                .visible_alias("ls")
                .arg(organization_parameter())
                .arg(fields_parameter(FieldSelection::new(
                    Facility::FIELDS.iter().copied(),
                )))
                .arg(sort_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get a single facility")
                .arg(facility_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}
