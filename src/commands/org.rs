//! Organization command definitions.

use crate::commands::params::{
    fields_parameter, format_parameter, format_pretty_parameter, organization_parameter,
    sort_parameter, FieldSelection, COMMAND_LIST, COMMAND_ORG, COMMAND_USERS,
};
use crate::model::{Organization, User};
use clap::Command;

/// Create the organization command with all its subcommands.
pub fn org_command() -> Command {
    Command::new(COMMAND_ORG)
        .about("Manage organizations")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List your organizations")
                .visible_alias("ls")
                .arg(fields_parameter(FieldSelection::new(
                    Organization::FIELDS.iter().copied(),
                )))
                .arg(sort_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_USERS)
                .about("List the users of an organization")
                .arg(organization_parameter())
                .arg(fields_parameter(FieldSelection::new(
                    User::FIELDS.iter().copied(),
                )))
                .arg(sort_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}
