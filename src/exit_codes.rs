//! Custom exit codes for the Contxt CLI.
//!
//! These follow the BSD sysexits.h conventions where possible (via the
//! `exitcode` constants), with application-specific codes from 100 up.

/// Process exit codes for the `contxt` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliExitCode {
    /// Command completed successfully
    Success,
    /// Command line usage error
    UsageError,
    /// Input or output data was incorrect
    DataError,
    /// Internal software error
    SoftwareError,
    /// OS-level error
    OSError,
    /// Application configuration issue
    ConfigError,
    /// Login or token issues
    AuthError,
    /// Remote API returned an error
    ApiError,
}

impl CliExitCode {
    /// Convert to a numeric process exit code
    pub fn code(&self) -> i32 {
        match self {
            CliExitCode::Success => exitcode::OK,
            CliExitCode::UsageError => exitcode::USAGE,
            CliExitCode::DataError => exitcode::DATAERR,
            CliExitCode::SoftwareError => exitcode::SOFTWARE,
            CliExitCode::OSError => exitcode::OSERR,
            CliExitCode::ConfigError => exitcode::CONFIG,
            CliExitCode::AuthError => 100,
            CliExitCode::ApiError => 102,
        }
    }
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sysexits_range_matches_the_convention() {
        assert_eq!(CliExitCode::Success.code(), 0);
        assert_eq!(CliExitCode::UsageError.code(), 64);
        assert_eq!(CliExitCode::DataError.code(), 65);
        assert_eq!(CliExitCode::ConfigError.code(), 78);
    }
}
