use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): something was resolved or written
/// - `Failure` (1): the command ran but produced nothing (missing resource,
///   empty discovery, config file already present)
/// - `Error` (2): the command could not run (bad config, missing resources
///   directory, invalid arguments)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
