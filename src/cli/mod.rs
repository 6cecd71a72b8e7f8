//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument model
//! - `commands`: One handler per subcommand
//! - `report`: Colored terminal output
//! - `exit_status`: Process exit codes

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{AnalyzeCommand, Arguments, BatchCommand, Command, CommonArgs, OutputFormat};
pub use exit_status::ExitStatus;
pub use report::{FAILURE_MARK, SUCCESS_MARK, report, report_to};

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = run::run(args)?;
    Ok(status.into())
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// events from this crate with `-v`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,truthpulse=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
