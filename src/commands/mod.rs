//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using the
//! clap crate, one module per command topic.

use clap::{ArgMatches, Command};

pub mod params;

pub mod asset;
pub mod auth;
pub mod config;
pub mod ems;
pub mod event;
pub mod facility;
pub mod health;
pub mod iot;
pub mod org;
pub mod sis;

pub const APP_NAME: &str = "contxt";

/// Create and configure all CLI commands and their arguments.
pub fn create_cli_commands() -> ArgMatches {
    build_cli().get_matches()
}

/// The full command tree, separate from matching so tests can inspect it.
pub fn build_cli() -> Command {
    Command::new(APP_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(auth::auth_command())
        .subcommand(config::config_command())
        .subcommand(org::org_command())
        .subcommand(asset::asset_command())
        .subcommand(event::event_command())
        .subcommand(facility::facility_command())
        .subcommand(health::health_command())
        .subcommand(iot::iot_command())
        .subcommand(sis::sis_command())
        .subcommand(ems::ems_command())
}
