//! IoT command handlers.

use super::{render, CliActionError};
use crate::commands::params::{PARAMETER_FACILITY, PARAMETER_FEED};
use crate::context::ExecutionContext;
use clap::ArgMatches;
use tracing::trace;

pub async fn list_feeds(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'iot feeds' command");

    let context = ExecutionContext::new()?;
    let facility_id = sub_matches.get_one::<u64>(PARAMETER_FACILITY).copied();
    let feeds = context.clients.iot()?.list_feeds(facility_id).await?;
    render(&feeds, sub_matches)
}

pub async fn list_fields(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'iot fields' command");

    let context = ExecutionContext::new()?;
    let feed_id = *sub_matches.get_one::<u64>(PARAMETER_FEED).unwrap(); // mandatory, enforced by clap
    let fields = context.clients.iot()?.list_fields(feed_id).await?;
    render(&fields, sub_matches)
}
