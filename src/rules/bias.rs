//! Charged-language detection, sentiment scoring and neutral rewrite.
//!
//! The text is split on whitespace. Each raw token has its edge punctuation
//! stripped to get the core word, which is lowercased for every lookup.
//! Tokens that are only punctuation take part in no lookup but survive
//! verbatim in the rewrite.
//!
//! The rewrite rejoins tokens with single spaces, so runs of whitespace,
//! tabs and newlines in the input collapse to one space.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::tables::SentimentLexicons;
use crate::utils::{capitalize_first, clean_tokens, is_title_case, split_affixes};

/// Overall polarity of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s > 0 => Sentiment::Positive,
            s if s < 0 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasReport {
    pub bias_words_found: Vec<String>,
    pub sentiment: Sentiment,
    pub neutral_rewrite: String,
}

pub fn analyze_bias(
    text: &str,
    emotional_words: &HashMap<String, String>,
    lexicons: &SentimentLexicons,
) -> BiasReport {
    let tokens = clean_tokens(text);

    let bias_words_found = detect_charged_words(&tokens, emotional_words);
    let score = sentiment_score(&tokens, lexicons);
    let neutral_rewrite = neutral_rewrite(text, emotional_words);

    tracing::debug!(
        tokens = tokens.len(),
        charged = bias_words_found.len(),
        score,
        "bias pass done"
    );

    BiasReport {
        bias_words_found,
        sentiment: Sentiment::from_score(score),
        neutral_rewrite,
    }
}

/// Every charged token in order of appearance, repeats included.
pub fn detect_charged_words(
    tokens: &[String],
    emotional_words: &HashMap<String, String>,
) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| emotional_words.contains_key(token.as_str()))
        .cloned()
        .collect()
}

/// +1 per positive token, -1 per negative token.
pub fn sentiment_score(tokens: &[String], lexicons: &SentimentLexicons) -> i32 {
    tokens.iter().map(|token| lexicons.polarity(token)).sum()
}

/// Replace charged words with their neutral counterparts.
///
/// Punctuation around a replaced word is kept as-is, and a title-cased word
/// gets a capitalized replacement. Tokens without a mapping are emitted
/// unchanged. Replacements are not themselves looked up again, so a rewrite
/// applied twice can differ from one applied once when the table chains.
pub fn neutral_rewrite(text: &str, emotional_words: &HashMap<String, String>) -> String {
    text.split_whitespace()
        .map(|raw| rewrite_token(raw, emotional_words))
        .collect::<Vec<_>>()
        .join(" ")
}

fn rewrite_token(raw: &str, emotional_words: &HashMap<String, String>) -> String {
    let (prefix, core, suffix) = split_affixes(raw);
    if core.is_empty() {
        return raw.to_string();
    }

    match emotional_words.get(&core.to_lowercase()) {
        Some(neutral) => {
            let neutral = if is_title_case(core) {
                capitalize_first(neutral)
            } else {
                neutral.clone()
            };
            format!("{prefix}{neutral}{suffix}")
        }
        None => raw.to_string(),
    }
}
