//! Energy management command definitions.

use crate::commands::params::{
    end_date_parameter, facility_parameter, fields_parameter, format_parameter,
    format_pretty_parameter, sort_parameter, start_date_parameter, FieldSelection, COMMAND_EMS,
    COMMAND_SERVICES, COMMAND_SPEND,
};
use crate::model::{MainService, SpendPeriod};
use clap::Command;

/// Create the energy management command with all its subcommands.
pub fn ems_command() -> Command {
    Command::new(COMMAND_EMS)
        .about("Energy management")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_SERVICES)
                .about("List the main services of a facility")
                .arg(facility_parameter())
                .arg(fields_parameter(FieldSelection::new(
                    MainService::FIELDS.iter().copied(),
                )))
                .arg(sort_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_SPEND)
                .about("Monthly utility spend for a facility")
                .arg(facility_parameter())
                .arg(start_date_parameter())
                .arg(end_date_parameter())
                .arg(fields_parameter(FieldSelection::new(
                    SpendPeriod::FIELDS.iter().copied(),
                )))
                .arg(sort_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}
