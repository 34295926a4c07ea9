//! Event command handlers.

use super::{render, CliActionError};
use crate::commands::params::PARAMETER_TYPE;
use crate::context::ExecutionContext;
use clap::ArgMatches;
use tracing::trace;

pub async fn list_event_types(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'event types' command");

    let context = ExecutionContext::new()?;
    let event_types = context.clients.events()?.list_event_types().await?;
    render(&event_types, sub_matches)
}

pub async fn list_events(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'event list' command");

    let context = ExecutionContext::new()?;
    let event_type_id = sub_matches
        .get_one::<String>(PARAMETER_TYPE)
        .map(String::as_str);
    let events = context.clients.events()?.list_events(event_type_id).await?;
    render(&events, sub_matches)
}
