use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and produced output
/// - `Failure` (1): Nothing to analyze, or the command refused to run (e.g. config exists)
/// - `Error` (2): Command failed due to internal error (I/O error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and produced output.
    Success,
    /// Nothing to analyze, or the command refused to run.
    Failure,
    /// Command failed due to internal error (I/O error, config error, etc.).
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
