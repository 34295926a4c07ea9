//! Facility command handlers.

use super::{render, render_one, CliActionError};
use crate::commands::params::PARAMETER_FACILITY;
use crate::context::ExecutionContext;
use clap::ArgMatches;
use tracing::trace;

pub async fn list_facilities(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'facility list' command");

    let context = ExecutionContext::new()?;
    let organization_id = context.organization_id(sub_matches)?;
    let facilities = context
        .clients
        .facilities()?
        .list_facilities(&organization_id)
        .await?;
    render(&facilities, sub_matches)
}

pub async fn get_facility(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'facility get' command");

    let context = ExecutionContext::new()?;
    let facility_id = *sub_matches.get_one::<u64>(PARAMETER_FACILITY).unwrap(); // mandatory, enforced by clap
    let facility = context
        .clients
        .facilities()?
        .get_facility(facility_id)
        .await?;
    render_one(&facility, sub_matches)
}
