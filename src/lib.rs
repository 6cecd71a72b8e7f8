//! TruthPulse - rule-based annotator for headlines and statements
//!
//! TruthPulse is a CLI tool and library that runs four independent lexical
//! passes over a short passage of text: a credibility lookup against known
//! claims, emotional-language detection with a neutral rewrite, an economic
//! term glossary, and a supportive message when anxiety is detected.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Reference tables and the analysis coordinator
//! - `findings`: Display sections built from an analysis result
//! - `mcp`: Model Context Protocol server implementation
//! - `render`: Markdown rendering
//! - `rules`: The four matching passes
//! - `utils`: Shared token helpers

pub mod cli;
pub mod config;
pub mod core;
pub mod findings;
pub mod mcp;
pub mod render;
pub mod rules;
pub mod utils;
