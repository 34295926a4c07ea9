use thiserror::Error;

use crate::{actions::CliActionError, exit_codes::CliExitCode, services::ApiError};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand")]
    UnsupportedSubcommand(String),
    /// Error related to configuration loading or management
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] crate::configuration::ConfigurationError),

    #[error("{0}")]
    ActionError(#[from] CliActionError),
}

impl CliError {
    /// Get the appropriate process exit code for this error
    pub fn exit_code(&self) -> CliExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => CliExitCode::UsageError,
            CliError::ConfigurationError(_) => CliExitCode::ConfigError,
            CliError::ActionError(action_error) => match action_error {
                CliActionError::AuthError(_) => CliExitCode::AuthError,
                CliActionError::ApiError(ApiError::AuthError(_)) => CliExitCode::AuthError,
                CliActionError::ApiError(_) => CliExitCode::ApiError,
                CliActionError::ConfigurationError(_) => CliExitCode::ConfigError,
                CliActionError::MissingRequiredArgument(_) => CliExitCode::UsageError,
                CliActionError::IoError(_) => CliExitCode::OSError,
                CliActionError::PromptError(_) => CliExitCode::SoftwareError,
                _ => CliExitCode::DataError,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_maps_to_usage_error() {
        let err = CliError::ActionError(CliActionError::MissingRequiredArgument(
            "organization".to_string(),
        ));
        assert_eq!(err.exit_code(), CliExitCode::UsageError);
    }

    #[test]
    fn auth_failures_map_to_the_auth_exit_code() {
        let err = CliError::ActionError(CliActionError::AuthError(
            crate::auth::AuthError::MissingCredentials,
        ));
        assert_eq!(err.exit_code(), CliExitCode::AuthError);
    }
}
