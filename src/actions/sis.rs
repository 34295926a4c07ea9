//! System integration command handlers.

use super::{render, CliActionError};
use crate::context::ExecutionContext;
use clap::ArgMatches;
use tracing::trace;

pub async fn list_jobs(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'sis jobs' command");

    let context = ExecutionContext::new()?;
    let organization_id = context.organization_id(sub_matches)?;
    let jobs = context.clients.sis()?.list_jobs(&organization_id).await?;
    render(&jobs, sub_matches)
}
