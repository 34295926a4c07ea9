//! Health command handlers.

use super::{render, CliActionError};
use crate::context::ExecutionContext;
use clap::ArgMatches;
use tracing::trace;

pub async fn list_statuses(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'health list' command");

    let context = ExecutionContext::new()?;
    let organization_id = context.organization_id(sub_matches)?;
    let statuses = context
        .clients
        .health()?
        .list_statuses(&organization_id)
        .await?;
    render(&statuses, sub_matches)
}
