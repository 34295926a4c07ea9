//! Asset command handlers.

use super::{render, render_one, CliActionError};
use crate::commands::params::{PARAMETER_ID, PARAMETER_TYPE};
use crate::context::ExecutionContext;
use clap::ArgMatches;
use tracing::trace;

pub async fn list_asset_types(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'asset types' command");

    let context = ExecutionContext::new()?;
    let organization_id = context.organization_id(sub_matches)?;
    let asset_types = context
        .clients
        .assets()?
        .list_asset_types(&organization_id)
        .await?;
    render(&asset_types, sub_matches)
}

pub async fn list_assets(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'asset list' command");

    let context = ExecutionContext::new()?;
    let organization_id = context.organization_id(sub_matches)?;
    let asset_type_id = sub_matches
        .get_one::<String>(PARAMETER_TYPE)
        .map(String::as_str);
    let assets = context
        .clients
        .assets()?
        .list_assets(&organization_id, asset_type_id)
        .await?;
    render(&assets, sub_matches)
}

pub async fn get_asset(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'asset get' command");

    let context = ExecutionContext::new()?;
    let asset_id = sub_matches.get_one::<String>(PARAMETER_ID).unwrap(); // mandatory, enforced by clap
    let asset = context.clients.assets()?.get_asset(asset_id).await?;
    render_one(&asset, sub_matches)
}
