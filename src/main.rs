use std::process::ExitCode;

use clap::Parser;
use truthpulse::cli::{Arguments, Command, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    truthpulse::cli::init_logging(args.verbose());

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = truthpulse::mcp::run_server() {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match truthpulse::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
