//! Asset command definitions.

use crate::commands::params::{
    fields_parameter, format_parameter, format_pretty_parameter, id_parameter,
    organization_parameter, sort_parameter, type_parameter, FieldSelection, COMMAND_ASSET,
    COMMAND_GET, COMMAND_LIST, COMMAND_TYPES,
};
use crate::model::{Asset, AssetType};
use clap::Command;

/// Create the asset command with all its subcommands.
pub fn asset_command() -> Command {
    Command::new(COMMAND_ASSET)
        .about("Manage assets")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_TYPES)
                .about("List asset types")
                .arg(organization_parameter())
                .arg(fields_parameter(FieldSelection::new(
                    AssetType::FIELDS.iter().copied(),
                )))
                .arg(sort_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List assets")
                .visible_alias("ls")
                .arg(organization_parameter())
                .arg(type_parameter().help("Restrict to one asset type ID"))
                .arg(fields_parameter(FieldSelection::new(
                    Asset::FIELDS.iter().copied(),
                )))
                .arg(sort_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get a single asset")
                .arg(id_parameter().help("Asset ID"))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}
