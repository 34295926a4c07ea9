//! Energy management command handlers.

use super::{render, CliActionError};
use crate::commands::params::{PARAMETER_END, PARAMETER_FACILITY, PARAMETER_START};
use crate::context::ExecutionContext;
use chrono::{Duration, Local, NaiveDate};
use clap::ArgMatches;
use tracing::trace;

/// Default spend window: the trailing year ending today.
fn default_window(start: Option<NaiveDate>, end: Option<NaiveDate>) -> (NaiveDate, NaiveDate) {
    let end = end.unwrap_or_else(|| Local::now().date_naive());
    let start = start.unwrap_or_else(|| end - Duration::days(365));
    (start, end)
}

pub async fn list_main_services(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'ems services' command");

    let context = ExecutionContext::new()?;
    let facility_id = *sub_matches.get_one::<u64>(PARAMETER_FACILITY).unwrap(); // mandatory, enforced by clap
    let services = context
        .clients
        .ems()?
        .list_main_services(facility_id)
        .await?;
    render(&services, sub_matches)
}

pub async fn utility_spend(sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    trace!("Executing 'ems spend' command");

    let context = ExecutionContext::new()?;
    let facility_id = *sub_matches.get_one::<u64>(PARAMETER_FACILITY).unwrap(); // mandatory, enforced by clap
    let (start, end) = default_window(
        sub_matches.get_one::<NaiveDate>(PARAMETER_START).copied(),
        sub_matches.get_one::<NaiveDate>(PARAMETER_END).copied(),
    );

    let spend = context
        .clients
        .ems()?
        .get_monthly_utility_spend(facility_id, start, end)
        .await?;
    render(&spend.periods, sub_matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_defaults_to_the_trailing_year() {
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let (start, end_out) = default_window(None, Some(end));
        assert_eq!(end_out, end);
        assert_eq!(end - start, Duration::days(365));
    }

    #[test]
    fn explicit_bounds_are_kept() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(default_window(Some(start), Some(end)), (start, end));
    }
}
