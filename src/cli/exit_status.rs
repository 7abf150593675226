use std::process::ExitCode;

/// Exit status for the hotenv CLI.
///
/// - `Success` (0): run completed, including a successful dry run
/// - `Failure` (1): no candidate files found, an unresolved collision, or
///   an error while executing the plan
/// - `Error` (2): internal error (malformed config, dispatch failure)
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
