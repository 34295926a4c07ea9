//! IoT command definitions.

use crate::commands::params::{
    feed_parameter, fields_parameter, format_parameter, format_pretty_parameter,
    optional_facility_parameter, sort_parameter, FieldSelection, COMMAND_FEEDS, COMMAND_FIELDS,
    COMMAND_IOT,
};
use crate::model::{Feed, FeedField};
use clap::Command;

/// Create the IoT command with all its subcommands.
pub fn iot_command() -> Command {
    Command::new(COMMAND_IOT)
        .about("IoT feeds and fields")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_FEEDS)
                .about("List feeds")
                .arg(optional_facility_parameter())
                .arg(fields_parameter(FieldSelection::new(
                    Feed::FIELDS.iter().copied(),
                )))
                .arg(sort_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_FIELDS)
                .about("List the fields of a feed")
                .arg(feed_parameter())
                .arg(fields_parameter(FieldSelection::new(
                    FeedField::FIELDS.iter().copied(),
                )))
                .arg(sort_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}
