use super::{
    args::{Arguments, Command},
    commands::{analyze::analyze, batch::batch, init::init},
    exit_status::ExitStatus,
};
use anyhow::Result;

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(ExitStatus)` describing how the command finished
/// - `Err` if the command fails (e.g., unreadable input, invalid config)
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Analyze(cmd)) => analyze(cmd),
        Some(Command::Batch(cmd)) => batch(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
