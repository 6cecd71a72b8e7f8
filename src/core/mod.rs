//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `tables`: Typed reference tables (fact patterns, lexicons, glossary)
//! - `defaults`: Built-in table contents
//! - `analysis`: The coordinator that runs every pass and assembles the result
//! - `error`: Errors signalled by the coordinator

pub mod analysis;
pub mod defaults;
pub mod error;
pub mod tables;

pub use analysis::{AnalysisResult, Analyzer, run_all};
pub use error::AnalysisError;
pub use tables::{
    Credibility, EconomicTerm, FactPattern, KeywordMatch, ReferenceTables, SentimentLexicons,
};
