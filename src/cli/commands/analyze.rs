use anyhow::Result;

use super::super::args::AnalyzeCommand;
use super::super::exit_status::ExitStatus;
use super::helper::{load_analyzer, print_analysis_error, print_result, read_source};

pub fn analyze(cmd: AnalyzeCommand) -> Result<ExitStatus> {
    let analyzer = load_analyzer(&cmd.common)?;

    let text = if cmd.text.is_empty() {
        read_source(cmd.file.as_deref())?
    } else {
        cmd.text.join(" ")
    };

    match analyzer.run_all(&text) {
        Ok(result) => {
            print_result(&result, cmd.format, &cmd.sections)?;
            Ok(ExitStatus::Success)
        }
        Err(err) => {
            print_analysis_error(&err);
            Ok(ExitStatus::Failure)
        }
    }
}
