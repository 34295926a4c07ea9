//! Shared command parameters for all CLI commands.
//!
//! This module defines the command and parameter name constants used across
//! the command modules, the common argument builders, and the validation
//! logic behind the `--fields` option.

use crate::format::OutputFormat;
use chrono::NaiveDate;
use clap::{Arg, ArgAction};
use std::path::PathBuf;

// Session commands
pub const COMMAND_AUTH: &str = "auth";
pub const COMMAND_LOGIN: &str = "login";
pub const COMMAND_LOGOUT: &str = "logout";

// Config commands
pub const COMMAND_CONFIG: &str = "config";
pub const COMMAND_GET: &str = "get";
pub const COMMAND_SET: &str = "set";
pub const COMMAND_PATH: &str = "path";

// Service commands
pub const COMMAND_ORG: &str = "org";
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_USERS: &str = "users";
pub const COMMAND_ASSET: &str = "asset";
pub const COMMAND_TYPES: &str = "types";
pub const COMMAND_EVENT: &str = "event";
pub const COMMAND_FACILITY: &str = "facility";
pub const COMMAND_HEALTH: &str = "health";
pub const COMMAND_IOT: &str = "iot";
pub const COMMAND_FEEDS: &str = "feeds";
pub const COMMAND_FIELDS: &str = "fields";
pub const COMMAND_SIS: &str = "sis";
pub const COMMAND_JOBS: &str = "jobs";
pub const COMMAND_EMS: &str = "ems";
pub const COMMAND_SERVICES: &str = "services";
pub const COMMAND_SPEND: &str = "spend";

// Parameter names
pub const PARAMETER_FIELDS: &str = "fields";
pub const PARAMETER_SORT: &str = "sort";
pub const PARAMETER_FORMAT: &str = "format";
pub const PARAMETER_PRETTY: &str = "pretty";
pub const PARAMETER_ORGANIZATION: &str = "org";
pub const PARAMETER_ID: &str = "id";
pub const PARAMETER_TYPE: &str = "type";
pub const PARAMETER_FACILITY: &str = "facility";
pub const PARAMETER_FEED: &str = "feed";
pub const PARAMETER_START: &str = "start";
pub const PARAMETER_END: &str = "end";
pub const PARAMETER_OUTPUT: &str = "output";
pub const PARAMETER_CLIENT_ID: &str = "client-id";
pub const PARAMETER_CLIENT_SECRET: &str = "client-secret";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated `--fields` value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldList(pub Vec<String>);

impl FieldList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Validation state for a comma-separated field option: the set of allowed
/// field names, plus an optional override for what the literal `all`
/// expands to (the full option set when absent).
#[derive(Debug, Clone)]
pub struct FieldSelection {
    options: Vec<String>,
    all: Option<Vec<String>>,
}

impl FieldSelection {
    pub fn new<I, S>(options: I) -> FieldSelection
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldSelection {
            options: options.into_iter().map(Into::into).collect(),
            all: None,
        }
    }

    pub fn with_all<I, S>(mut self, all: I) -> FieldSelection
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.all = Some(all.into_iter().map(Into::into).collect());
        self
    }

    /// Parse and validate one raw option value. Tokens are trimmed; any
    /// token outside the allowed set fails with a message naming it and
    /// listing the valid choices.
    pub fn parse(&self, value: &str) -> Result<FieldList, String> {
        let fields: Vec<String> = if value == "all" {
            match &self.all {
                Some(all) => all.clone(),
                None => self.options.clone(),
            }
        } else {
            value.split(',').map(|f| f.trim().to_string()).collect()
        };

        for field in &fields {
            if !self.options.contains(field) {
                return Err(format!(
                    "'{}' is not valid. Choose from {}.",
                    field,
                    self.options.join(", ")
                ));
            }
        }
        Ok(FieldList(fields))
    }
}

/// Create the `--fields` parameter, validated against `selection`.
pub fn fields_parameter(selection: FieldSelection) -> Arg {
    Arg::new(PARAMETER_FIELDS)
        .long(PARAMETER_FIELDS)
        .num_args(1)
        .required(false)
        .help("Comma-delimited list of fields to return, or 'all'")
        .value_parser(move |value: &str| selection.parse(value))
}

/// Create the `--sort` parameter.
pub fn sort_parameter() -> Arg {
    Arg::new(PARAMETER_SORT)
        .long(PARAMETER_SORT)
        .num_args(1)
        .required(false)
        .help("Field to sort by")
}

/// Create the global format parameter.
pub fn format_parameter() -> Arg {
    Arg::new(PARAMETER_FORMAT)
        .short('f')
        .long(PARAMETER_FORMAT)
        .num_args(1)
        .required(false)
        .env("CONTXT_FORMAT")
        .default_value("table")
        .global(true)
        .help("Output data format")
        .value_parser(OutputFormat::names())
}

pub fn format_pretty_parameter() -> Arg {
    Arg::new(PARAMETER_PRETTY)
        .long(PARAMETER_PRETTY)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Format JSON output pretty")
}

/// Create the organization parameter.
pub fn organization_parameter() -> Arg {
    Arg::new(PARAMETER_ORGANIZATION)
        .long(PARAMETER_ORGANIZATION)
        .num_args(1)
        .required(false)
        .help("Organization ID (defaults to the active organization)")
}

pub fn id_parameter() -> Arg {
    Arg::new(PARAMETER_ID)
        .long(PARAMETER_ID)
        .num_args(1)
        .required(true)
        .help("Resource ID")
}

pub fn type_parameter() -> Arg {
    Arg::new(PARAMETER_TYPE)
        .long(PARAMETER_TYPE)
        .num_args(1)
        .required(false)
        .help("Restrict to one type ID")
}

pub fn facility_parameter() -> Arg {
    Arg::new(PARAMETER_FACILITY)
        .long(PARAMETER_FACILITY)
        .num_args(1)
        .required(true)
        .value_parser(clap::value_parser!(u64))
        .help("Facility ID")
}

pub fn optional_facility_parameter() -> Arg {
    facility_parameter()
        .required(false)
        .help("Restrict to one facility ID")
}

pub fn feed_parameter() -> Arg {
    Arg::new(PARAMETER_FEED)
        .long(PARAMETER_FEED)
        .num_args(1)
        .required(true)
        .value_parser(clap::value_parser!(u64))
        .help("Feed ID")
}

/// Parse a date-only value; time of day never enters the type.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| format!("'{value}' is not a valid date. Expected format: YYYY-MM-DD."))
}

pub fn start_date_parameter() -> Arg {
    Arg::new(PARAMETER_START)
        .long(PARAMETER_START)
        .num_args(1)
        .required(false)
        .value_parser(parse_date)
        .help("Start date (YYYY-MM-DD)")
}

pub fn end_date_parameter() -> Arg {
    Arg::new(PARAMETER_END)
        .long(PARAMETER_END)
        .num_args(1)
        .required(false)
        .value_parser(parse_date)
        .help("End date (YYYY-MM-DD)")
}

/// Create the output file parameter.
pub fn output_file_parameter() -> Arg {
    Arg::new(PARAMETER_OUTPUT)
        .short('o')
        .long(PARAMETER_OUTPUT)
        .num_args(1)
        .required(false)
        .help("Output file path")
        .value_parser(clap::value_parser!(PathBuf))
}

pub fn client_id_parameter() -> Arg {
    Arg::new(PARAMETER_CLIENT_ID)
        .long(PARAMETER_CLIENT_ID)
        .num_args(1)
        .required(false)
        .help("Client ID for OAuth2 authentication")
}

pub fn client_secret_parameter() -> Arg {
    Arg::new(PARAMETER_CLIENT_SECRET)
        .long(PARAMETER_CLIENT_SECRET)
        .num_args(1)
        .required(false)
        .help("Client secret for OAuth2 authentication")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> FieldSelection {
        FieldSelection::new(["a", "b", "c"])
    }

    #[test]
    fn all_expands_to_the_full_option_set() {
        assert_eq!(
            selection().parse("all").unwrap(),
            FieldList(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn all_expands_to_the_override_when_given() {
        let selection = selection().with_all(["b"]);
        assert_eq!(
            selection.parse("all").unwrap(),
            FieldList(vec!["b".to_string()])
        );
    }

    #[test]
    fn tokens_are_split_and_trimmed() {
        assert_eq!(
            selection().parse("a, b").unwrap(),
            FieldList(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn unknown_token_is_named_in_the_error() {
        let err = selection().parse("a,z").unwrap_err();
        assert!(err.contains("'z' is not valid"));
        assert!(err.contains("a, b, c"));
    }

    #[test]
    fn date_parses_date_only_values() {
        assert_eq!(
            parse_date("2024-03-09").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
    }

    #[test]
    fn date_rejects_other_formats() {
        assert!(parse_date("03/09/2024").is_err());
        assert!(parse_date("2024-03-09T10:00:00").is_err());
    }
}
