use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): run completed; in dry-run mode, nothing left to rewrite
/// - `Failure` (1): dry-run found comment blocks that would be rewritten
/// - `Error` (2): run aborted (I/O, config, detection or translation error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed; nothing pending.
    Success,
    /// Dry-run found blocks that would change.
    Failure,
    /// Run aborted with an error.
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
