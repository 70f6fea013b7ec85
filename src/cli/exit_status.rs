use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): command completed
/// - `Failure` (1): command completed but the request could not be satisfied
///   (e.g. an unresolvable interface)
/// - `Error` (2): command failed due to an internal error (bad root, config
///   error, etc.)
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
