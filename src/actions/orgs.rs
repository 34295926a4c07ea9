//! Organization command handlers.

use super::{render, CliActionError};
use crate::context::ExecutionContext;
use clap::ArgMatches;
use tracing::trace;

pub async fn list_organizations(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'org list' command");

    let context = ExecutionContext::new()?;
    let organizations = context.clients.contxt()?.list_organizations().await?;
    render(&organizations, sub_matches)
}

pub async fn list_users(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'org users' command");

    let context = ExecutionContext::new()?;
    let organization_id = context.organization_id(sub_matches)?;
    let users = context
        .clients
        .contxt()?
        .list_users(&organization_id)
        .await?;
    render(&users, sub_matches)
}
