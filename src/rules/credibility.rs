//! Credibility lookup.
//!
//! Scans the text against the fact pattern table. Patterns are tried in table
//! order and the first one that matches wins; later patterns are never
//! consulted, even if they would also match.

use serde::Serialize;

use crate::core::tables::{Credibility, FactPattern};

/// Rating, explanation and citations for a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredibilityVerdict {
    pub credibility: Credibility,
    pub explanation: String,
    pub sources: Vec<String>,
}

impl CredibilityVerdict {
    fn from_pattern(pattern: &FactPattern) -> Self {
        Self {
            credibility: pattern.credibility,
            explanation: pattern.explanation.clone(),
            sources: pattern.sources.clone(),
        }
    }

    fn unknown(default_explanation: &str) -> Self {
        Self {
            credibility: Credibility::NotEnoughInformation,
            explanation: default_explanation.to_string(),
            sources: Vec::new(),
        }
    }
}

/// Rate `text` against `patterns`, first match wins.
///
/// Falls back to "Not enough information" with `default_explanation` and no
/// sources when nothing matches (including for empty text).
pub fn match_credibility(
    text: &str,
    patterns: &[FactPattern],
    default_explanation: &str,
) -> CredibilityVerdict {
    let lowered = text.to_lowercase();

    match patterns
        .iter()
        .enumerate()
        .find(|(_, pattern)| pattern.matches(&lowered))
    {
        Some((index, pattern)) => {
            tracing::debug!(
                pattern = index,
                credibility = %pattern.credibility,
                "fact pattern matched"
            );
            CredibilityVerdict::from_pattern(pattern)
        }
        None => {
            tracing::debug!("no fact pattern matched");
            CredibilityVerdict::unknown(default_explanation)
        }
    }
}
