use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::super::args::{BatchCommand, OutputFormat};
use super::super::exit_status::ExitStatus;
use super::helper::{load_analyzer, print_analysis_error, print_result, read_source};
use crate::core::{AnalysisError, AnalysisResult};

/// One analyzed line of a batch file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchEntry<'a> {
    /// 1-based line number in the input.
    line: usize,
    text: &'a str,
    result: AnalysisResult,
}

pub fn batch(cmd: BatchCommand) -> Result<ExitStatus> {
    let analyzer = load_analyzer(&cmd.common)?;
    let content = read_source(Some(cmd.file.as_path()))?;

    let total_lines = content.lines().count();
    let statements: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
        .collect();

    let skipped = total_lines - statements.len();
    if skipped > 0 {
        tracing::warn!(skipped, "blank lines skipped");
    }

    if statements.is_empty() {
        print_analysis_error(&AnalysisError::InvalidInput);
        return Ok(ExitStatus::Failure);
    }

    let texts: Vec<&str> = statements.iter().map(|(_, text)| *text).collect();
    let results = analyzer.run_batch(&texts);

    for (&(line, text), result) in statements.iter().zip(results) {
        let result = match result {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(line, error = %err, "line not analyzed");
                continue;
            }
        };

        match cmd.format {
            OutputFormat::Json => {
                let entry = BatchEntry { line, text, result };
                let json = serde_json::to_string(&entry)
                    .with_context(|| format!("Failed to serialize result for line {}", line))?;
                println!("{}", json);
            }
            OutputFormat::Text => {
                println!("{} {}", format!("line {}:", line).bold(), text.trim());
                println!();
                print_result(&result, cmd.format, &cmd.sections)?;
            }
            OutputFormat::Markdown => {
                println!("## Line {}: {}", line, text.trim());
                println!();
                print_result(&result, cmd.format, &cmd.sections)?;
            }
        }
    }

    Ok(ExitStatus::Success)
}
