use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};

use super::super::args::{CommonArgs, OutputFormat};
use super::super::report::{self, print_invalid_input};
use crate::{
    config::{CONFIG_FILE_NAME, load_config},
    core::{AnalysisError, AnalysisResult, Analyzer, ReferenceTables},
    findings::{Finding, SectionKind},
    render::render_markdown,
};

/// Load the config (file or built-in) and build the analyzer once.
pub fn load_analyzer(common: &CommonArgs) -> Result<Analyzer> {
    let config_result = load_config(&common.path)?;

    // In verbose mode, inform user if using default config
    if common.verbose && !config_result.from_file {
        eprintln!("Note: No {} found, using built-in tables", CONFIG_FILE_NAME);
    }

    Ok(Analyzer::new(ReferenceTables::from_config(config_result.config)))
}

/// Read a file, or stdin when the path is `-`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            Ok(buf)
        }
    }
}

/// Print one result in the requested format.
pub fn print_result(
    result: &AnalysisResult,
    format: OutputFormat,
    sections: &[SectionKind],
) -> Result<()> {
    match format {
        OutputFormat::Text => report::report(&Finding::select(result, sections)),
        OutputFormat::Markdown => {
            print!("{}", render_markdown(&Finding::select(result, sections)));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result)
                .context("Failed to serialize analysis result")?;
            println!("{}", json);
        }
    }
    Ok(())
}

pub fn print_analysis_error(err: &AnalysisError) {
    print_invalid_input(&err.to_string());
}
