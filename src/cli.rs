use clap::ArgMatches;
use contxt_cli::actions;
use contxt_cli::commands::{
    create_cli_commands,
    params::{
        COMMAND_ASSET, COMMAND_AUTH, COMMAND_CONFIG, COMMAND_EMS, COMMAND_EVENT, COMMAND_FACILITY,
        COMMAND_FEEDS, COMMAND_FIELDS, COMMAND_GET, COMMAND_HEALTH, COMMAND_IOT, COMMAND_JOBS,
        COMMAND_LIST, COMMAND_LOGIN, COMMAND_LOGOUT, COMMAND_ORG, COMMAND_PATH, COMMAND_SERVICES,
        COMMAND_SET, COMMAND_SIS, COMMAND_SPEND, COMMAND_TYPES, COMMAND_USERS,
    },
};
pub use contxt_cli::error::CliError;

fn extract_subcommand_name(sub_matches: &ArgMatches) -> String {
    match sub_matches.subcommand() {
        Some((name, _)) => name.to_string(),
        None => "unknown".to_string(),
    }
}

/// Parse the command line and execute the selected command.
pub async fn execute_command() -> Result<(), CliError> {
    let commands = create_cli_commands();

    match commands.subcommand() {
        Some((COMMAND_AUTH, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LOGIN, sub_matches)) => Ok(actions::auth::login(sub_matches).await?),
            Some((COMMAND_LOGOUT, _)) => Ok(actions::auth::logout()?),
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        Some((COMMAND_CONFIG, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_GET, sub_matches)) => Ok(actions::config::show_configuration(sub_matches)?),
            Some((COMMAND_SET, sub_matches)) => Ok(actions::config::set_values(sub_matches)?),
            Some((COMMAND_PATH, _)) => Ok(actions::config::show_path()?),
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        Some((COMMAND_ORG, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, sub_matches)) => {
                Ok(actions::orgs::list_organizations(sub_matches).await?)
            }
            Some((COMMAND_USERS, sub_matches)) => {
                Ok(actions::orgs::list_users(sub_matches).await?)
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        Some((COMMAND_ASSET, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_TYPES, sub_matches)) => {
                Ok(actions::assets::list_asset_types(sub_matches).await?)
            }
            Some((COMMAND_LIST, sub_matches)) => {
                Ok(actions::assets::list_assets(sub_matches).await?)
            }
            Some((COMMAND_GET, sub_matches)) => Ok(actions::assets::get_asset(sub_matches).await?),
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        Some((COMMAND_EVENT, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_TYPES, sub_matches)) => {
                Ok(actions::events::list_event_types(sub_matches).await?)
            }
            Some((COMMAND_LIST, sub_matches)) => {
                Ok(actions::events::list_events(sub_matches).await?)
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        Some((COMMAND_FACILITY, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, sub_matches)) => {
                Ok(actions::facilities::list_facilities(sub_matches).await?)
            }
            Some((COMMAND_GET, sub_matches)) => {
                Ok(actions::facilities::get_facility(sub_matches).await?)
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        Some((COMMAND_HEALTH, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, sub_matches)) => {
                Ok(actions::health::list_statuses(sub_matches).await?)
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        Some((COMMAND_IOT, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_FEEDS, sub_matches)) => Ok(actions::iot::list_feeds(sub_matches).await?),
            Some((COMMAND_FIELDS, sub_matches)) => {
                Ok(actions::iot::list_fields(sub_matches).await?)
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        Some((COMMAND_SIS, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_JOBS, sub_matches)) => Ok(actions::sis::list_jobs(sub_matches).await?),
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        Some((COMMAND_EMS, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_SERVICES, sub_matches)) => {
                Ok(actions::ems::list_main_services(sub_matches).await?)
            }
            Some((COMMAND_SPEND, sub_matches)) => {
                Ok(actions::ems::utility_spend(sub_matches).await?)
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        None => Err(CliError::UnsupportedSubcommand(String::from("unknown"))),
        _ => unreachable!(),
    }
}
