use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::defaults::{
    default_anxiety_keywords, default_economic_terms, default_emotional_words,
    default_explanation, default_fact_patterns, default_negative_words, default_positive_words,
    default_support_message,
};
use crate::core::tables::{EconomicTerm, FactPattern};

pub const CONFIG_FILE_NAME: &str = ".truthpulserc.json";

/// Reference table overrides. Every field falls back to the built-in table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_fact_patterns")]
    pub fact_patterns: Vec<FactPattern>,
    #[serde(default = "default_explanation")]
    pub default_explanation: String,
    #[serde(default = "default_emotional_words")]
    pub emotional_words: BTreeMap<String, String>,
    #[serde(default = "default_positive_words")]
    pub positive_words: Vec<String>,
    #[serde(default = "default_negative_words")]
    pub negative_words: Vec<String>,
    #[serde(default = "default_economic_terms")]
    pub economic_terms: Vec<EconomicTerm>,
    #[serde(default = "default_anxiety_keywords")]
    pub anxiety_keywords: Vec<String>,
    #[serde(default = "default_support_message")]
    pub support_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fact_patterns: default_fact_patterns(),
            default_explanation: default_explanation(),
            emotional_words: default_emotional_words(),
            positive_words: default_positive_words(),
            negative_words: default_negative_words(),
            economic_terms: default_economic_terms(),
            anxiety_keywords: default_anxiety_keywords(),
            support_message: default_support_message(),
        }
    }
}

impl Config {
    /// Validate table contents.
    ///
    /// Returns an error for tables the passes cannot use: keyword-less fact
    /// patterns, empty keys, and words listed in both sentiment lexicons.
    /// Suspicious but usable entries are only logged.
    pub fn validate(&self) -> Result<()> {
        for (index, pattern) in self.fact_patterns.iter().enumerate() {
            if pattern.keywords.is_empty() {
                bail!("Fact pattern #{} in 'factPatterns' has no keywords", index + 1);
            }
            if pattern.keywords.iter().any(|kw| kw.trim().is_empty()) {
                bail!(
                    "Fact pattern #{} in 'factPatterns' has an empty keyword",
                    index + 1
                );
            }
        }

        if self.emotional_words.keys().any(|w| w.trim().is_empty()) {
            bail!("Empty word in 'emotionalWords'");
        }

        let positive: HashSet<String> =
            self.positive_words.iter().map(|w| w.to_lowercase()).collect();
        let mut overlap: Vec<String> = self
            .negative_words
            .iter()
            .map(|w| w.to_lowercase())
            .filter(|w| positive.contains(w))
            .collect();
        if !overlap.is_empty() {
            overlap.sort();
            overlap.dedup();
            bail!(
                "Words listed in both 'positiveWords' and 'negativeWords': {}",
                overlap.join(", ")
            );
        }

        if self.economic_terms.iter().any(|t| t.term.trim().is_empty()) {
            bail!("Empty term in 'economicTerms'");
        }

        if self.anxiety_keywords.iter().any(|kw| kw.trim().is_empty()) {
            bail!("Empty keyword in 'anxietyKeywords'");
        }

        self.lint();
        Ok(())
    }

    fn lint(&self) {
        let charged: HashSet<String> =
            self.emotional_words.keys().map(|w| w.to_lowercase()).collect();

        for (word, neutral) in &self.emotional_words {
            if word.split_whitespace().nth(1).is_some() {
                tracing::warn!(
                    word = %word,
                    "emotional word spans several tokens and will never match"
                );
            }
            if charged.contains(&neutral.to_lowercase()) {
                tracing::warn!(
                    word = %word,
                    replacement = %neutral,
                    "replacement is itself an emotional word; rewriting is not idempotent"
                );
            }
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => {
            tracing::debug!("no {} found, using built-in tables", CONFIG_FILE_NAME);
            Ok(ConfigLoadResult {
                config: Config::default(),
                from_file: false,
            })
        }
    }
}
