//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all TruthPulse commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `analyze`: Analyze one statement (arguments, file or stdin)
//! - `batch`: Analyze a file with one statement per line
//! - `init`: Write a .truthpulserc.json with the built-in tables
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::findings::SectionKind;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Analyze(cmd)) => cmd.common.verbose,
            Some(Command::Batch(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by the analysis commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to start the .truthpulserc.json search from
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal sections
    #[default]
    Text,
    /// Markdown sections
    Markdown,
    /// The full analysis record as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    /// Text to analyze; read from --file or stdin when omitted
    pub text: Vec<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Sections to show (default: all; ignored for JSON)
    /// Can be specified multiple times: --section bias --section glossary
    #[arg(long = "section", value_enum)]
    pub sections: Vec<SectionKind>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct BatchCommand {
    /// File with one statement per line ("-" reads stdin)
    pub file: PathBuf,

    /// Output format (JSON emits one object per line)
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Sections to show (default: all; ignored for JSON)
    #[arg(long = "section", value_enum)]
    pub sections: Vec<SectionKind>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rate credibility, flag charged language, explain economic terms and offer support
    Analyze(AnalyzeCommand),
    /// Analyze every non-blank line of a file
    Batch(BatchCommand),
    /// Initialize a new .truthpulserc.json with the built-in tables
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
