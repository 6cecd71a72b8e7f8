//! Economic term glossary lookup.

use crate::core::tables::EconomicTerm;

/// Every glossary term that occurs in `text`, in table order.
///
/// Matching is a case-insensitive substring test, so `gdp` also fires on
/// "GDP-linked". Terms are returned as written in the table.
pub fn lookup_terms(text: &str, terms: &[EconomicTerm]) -> Vec<EconomicTerm> {
    let lowered = text.to_lowercase();

    let found: Vec<EconomicTerm> = terms
        .iter()
        .filter(|entry| lowered.contains(&entry.term.to_lowercase()))
        .cloned()
        .collect();

    tracing::debug!(hits = found.len(), "glossary pass done");
    found
}
