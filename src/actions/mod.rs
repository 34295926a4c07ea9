//! Command handlers.
//!
//! Each module implements the handlers for one command topic. The shared
//! [`render`]/[`render_one`] helpers take care of the `--fields`, `--sort`
//! and `--format` plumbing so the handlers only fetch data.

use crate::commands::params::{
    FieldList, PARAMETER_FIELDS, PARAMETER_FORMAT, PARAMETER_PRETTY, PARAMETER_SORT,
};
use crate::format::{self, OutputFormat};
use crate::projection::{print_table, project_for_display};
use clap::ArgMatches;
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

pub mod assets;
pub mod auth;
pub mod config;
pub mod ems;
pub mod events;
pub mod facilities;
pub mod health;
pub mod iot;
pub mod orgs;
pub mod sis;

#[derive(Debug, Error)]
pub enum CliActionError {
    #[error("{0}")]
    ApiError(#[from] crate::services::ApiError),

    #[error("{0}")]
    AuthError(#[from] crate::auth::AuthError),

    #[error("{0}")]
    ConfigurationError(#[from] crate::configuration::ConfigurationError),

    #[error("{0}")]
    FormattingError(#[from] crate::format::FormattingError),

    #[error("{0}")]
    ProjectionError(#[from] crate::projection::ProjectionError),

    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    PromptError(#[from] inquire::InquireError),

    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),
}

fn output_format(sub_matches: &ArgMatches) -> Result<OutputFormat, CliActionError> {
    let format_str = sub_matches
        .get_one::<String>(PARAMETER_FORMAT)
        .map(String::as_str)
        .unwrap_or(format::TABLE);
    Ok(OutputFormat::from_str(format_str)?)
}

/// Print a listing in the requested format, honoring `--fields` and
/// `--sort`. Table output ends with a count line.
pub(crate) fn render<T: Serialize>(
    items: &[T],
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let fields = sub_matches
        .get_one::<FieldList>(PARAMETER_FIELDS)
        .map(|f| f.as_slice());
    let sort_by = sub_matches
        .get_one::<String>(PARAMETER_SORT)
        .map(String::as_str);
    let pretty = sub_matches.get_flag(PARAMETER_PRETTY);

    match output_format(sub_matches)? {
        OutputFormat::Table => print_table(items, fields, sort_by, true)?,
        OutputFormat::Json => match fields {
            Some(_) => {
                let (rows, _) = project_for_display(items, fields, None)?;
                println!("{}", format::to_json(&rows, pretty)?);
            }
            None => println!("{}", format::to_json(items, pretty)?),
        },
        OutputFormat::Csv => {
            let (rows, _) = project_for_display(items, fields, None)?;
            print!("{}", format::to_csv(&rows)?);
        }
    }
    Ok(())
}

/// Print a single entity in the requested format (no field list, no count).
pub(crate) fn render_one<T: Serialize>(
    item: &T,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let pretty = sub_matches.get_flag(PARAMETER_PRETTY);
    match output_format(sub_matches)? {
        OutputFormat::Table => {
            print_table(std::slice::from_ref(item), None, None, false)?
        }
        OutputFormat::Json => {
            if pretty {
                println!("{}", serde_json::to_string_pretty(item)?);
            } else {
                println!("{}", serde_json::to_string(item)?);
            }
        }
        OutputFormat::Csv => {
            let (rows, _) = project_for_display(std::slice::from_ref(item), None, None)?;
            print!("{}", format::to_csv(&rows)?);
        }
    }
    Ok(())
}
