//! Typed reference tables.
//!
//! Tables are built once from a [`Config`] and are read-only afterwards. All
//! lookup keys (fact keywords, emotional words, lexicon words, anxiety
//! keywords) are lowercased on construction so the passes only lowercase the
//! input.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Verdict attached to a fact pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Credibility {
    #[serde(rename = "False")]
    False,
    #[serde(rename = "Unclear")]
    Unclear,
    #[serde(rename = "Moderately credible")]
    ModeratelyCredible,
    #[serde(rename = "Highly credible")]
    HighlyCredible,
    #[serde(rename = "Not enough information")]
    NotEnoughInformation,
}

impl Credibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Credibility::False => "False",
            Credibility::Unclear => "Unclear",
            Credibility::ModeratelyCredible => "Moderately credible",
            Credibility::HighlyCredible => "Highly credible",
            Credibility::NotEnoughInformation => "Not enough information",
        }
    }
}

impl fmt::Display for Credibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a fact pattern's keywords combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMatch {
    /// Any single keyword triggers the pattern.
    #[default]
    Any,
    /// Every keyword must occur somewhere in the text.
    All,
}

impl KeywordMatch {
    pub fn is_any(&self) -> bool {
        matches!(self, KeywordMatch::Any)
    }
}

/// A static rule mapping trigger keywords to a prewritten verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactPattern {
    pub keywords: Vec<String>,
    pub credibility: Credibility,
    pub explanation: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "KeywordMatch::is_any")]
    pub match_mode: KeywordMatch,
}

impl FactPattern {
    /// Check the pattern against already-lowercased text.
    ///
    /// Keywords are matched as substrings, so `crisis` also fires inside
    /// `crises-crisis` or `midcrisis`.
    pub fn matches(&self, lowered: &str) -> bool {
        match self.match_mode {
            KeywordMatch::Any => self.keywords.iter().any(|kw| lowered.contains(kw.as_str())),
            KeywordMatch::All => {
                !self.keywords.is_empty()
                    && self.keywords.iter().all(|kw| lowered.contains(kw.as_str()))
            }
        }
    }
}

/// A glossary entry. `term` is kept as written for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicTerm {
    pub term: String,
    pub definition: String,
}

/// Positive and negative indicator words. Disjoint by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentimentLexicons {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl SentimentLexicons {
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = String>,
        N: IntoIterator<Item = String>,
    {
        Self {
            positive: positive.into_iter().map(|w| w.to_lowercase()).collect(),
            negative: negative.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Score contribution of a lowercased token: +1, -1 or 0.
    pub fn polarity(&self, token: &str) -> i32 {
        if self.positive.contains(token) {
            1
        } else if self.negative.contains(token) {
            -1
        } else {
            0
        }
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }
}

/// All static data the four passes read.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub fact_patterns: Vec<FactPattern>,
    pub default_explanation: String,
    pub emotional_words: HashMap<String, String>,
    pub lexicons: SentimentLexicons,
    pub economic_terms: Vec<EconomicTerm>,
    pub anxiety_keywords: Vec<String>,
    pub support_message: String,
}

impl ReferenceTables {
    /// Tables built from the built-in defaults.
    pub fn builtin() -> Self {
        Self::from_config(Config::default())
    }

    /// Build normalized tables from a (validated) configuration.
    pub fn from_config(config: Config) -> Self {
        let fact_patterns = config
            .fact_patterns
            .into_iter()
            .map(|pattern| FactPattern {
                keywords: pattern.keywords.iter().map(|kw| kw.to_lowercase()).collect(),
                ..pattern
            })
            .collect();

        let emotional_words = config
            .emotional_words
            .into_iter()
            .map(|(word, neutral)| (word.to_lowercase(), neutral))
            .collect();

        let mut anxiety_keywords: Vec<String> = Vec::new();
        for keyword in config.anxiety_keywords {
            let keyword = keyword.to_lowercase();
            if !anxiety_keywords.contains(&keyword) {
                anxiety_keywords.push(keyword);
            }
        }

        let tables = Self {
            fact_patterns,
            default_explanation: config.default_explanation,
            emotional_words,
            lexicons: SentimentLexicons::new(config.positive_words, config.negative_words),
            economic_terms: config.economic_terms,
            anxiety_keywords,
            support_message: config.support_message,
        };

        tracing::debug!(
            fact_patterns = tables.fact_patterns.len(),
            emotional_words = tables.emotional_words.len(),
            economic_terms = tables.economic_terms.len(),
            anxiety_keywords = tables.anxiety_keywords.len(),
            "reference tables built"
        );

        tables
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builtin()
    }
}
