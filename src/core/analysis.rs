//! Analysis coordinator.
//!
//! Runs the four independent passes over the same raw input and assembles a
//! single [`AnalysisResult`]. The passes share nothing but the read-only
//! tables, so batches are analyzed in parallel with rayon.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::AnalysisError;
use super::tables::{Credibility, EconomicTerm, ReferenceTables};
use crate::rules::{
    bias::{Sentiment, analyze_bias},
    credibility::match_credibility,
    glossary::lookup_terms,
    support::check_support,
};

/// Combined output of all passes for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub credibility: Credibility,
    pub explanation: String,
    pub sources: Vec<String>,
    pub bias_words_found: Vec<String>,
    pub sentiment: Sentiment,
    pub neutral_rewrite: String,
    pub economic_explanations: Vec<EconomicTerm>,
    /// `None` when no anxiety keyword was found.
    pub support_message: Option<String>,
}

/// Run every pass over `text`.
///
/// Empty or whitespace-only text is refused with [`AnalysisError::InvalidInput`]
/// before any pass runs.
pub fn run_all(text: &str, tables: &ReferenceTables) -> Result<AnalysisResult, AnalysisError> {
    if text.trim().is_empty() {
        tracing::debug!("empty input, nothing to analyze");
        return Err(AnalysisError::InvalidInput);
    }

    let verdict = match_credibility(text, &tables.fact_patterns, &tables.default_explanation);
    let bias = analyze_bias(text, &tables.emotional_words, &tables.lexicons);
    let economic_explanations = lookup_terms(text, &tables.economic_terms);
    let support_message = check_support(text, &tables.anxiety_keywords, &tables.support_message);

    Ok(AnalysisResult {
        credibility: verdict.credibility,
        explanation: verdict.explanation,
        sources: verdict.sources,
        bias_words_found: bias.bias_words_found,
        sentiment: bias.sentiment,
        neutral_rewrite: bias.neutral_rewrite,
        economic_explanations,
        support_message,
    })
}

/// Owns the reference tables for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    tables: ReferenceTables,
}

impl Analyzer {
    pub fn new(tables: ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn run_all(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        run_all(text, &self.tables)
    }

    /// Analyze many inputs in parallel. Results keep the input order.
    pub fn run_batch<S>(&self, texts: &[S]) -> Vec<Result<AnalysisResult, AnalysisError>>
    where
        S: AsRef<str> + Sync,
    {
        tracing::debug!(count = texts.len(), "analyzing batch");
        texts
            .par_iter()
            .map(|text| self.run_all(text.as_ref()))
            .collect()
    }
}
