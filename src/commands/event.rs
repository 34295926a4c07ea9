//! Event command definitions.

use crate::commands::params::{
    fields_parameter, format_parameter, format_pretty_parameter, sort_parameter, type_parameter,
    FieldSelection, COMMAND_EVENT, COMMAND_LIST, COMMAND_TYPES,
};
use crate::model::{Event, EventType};
use clap::Command;

/// Create the event command with all its subcommands.
pub fn event_command() -> Command {
    Command::new(COMMAND_EVENT)
        .about("Manage events")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_TYPES)
                .about("List event types")
                .arg(fields_parameter(FieldSelection::new(
                    EventType::FIELDS.iter().copied(),
                )))
                .arg(sort_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List events")
                .visible_alias("ls")
                .arg(type_parameter().help("Restrict to one event type ID"))
                .arg(fields_parameter(FieldSelection::new(
                    Event::FIELDS.iter().copied(),
                )))
                .arg(sort_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}
