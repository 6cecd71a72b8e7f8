use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::core::AnalysisResult;

// ============================================================
// Analyze Types (analyze_text)
// ============================================================

/// Parameters for analyze_text
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTextParams {
    /// Headline, social media post or statement to analyze
    pub text: String,
    /// Directory to search for .truthpulserc.json. Built-in tables are used when omitted.
    #[serde(default)]
    pub project_root_path: Option<String>,
}

/// Result of analyze_text
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTextResult {
    #[serde(flatten)]
    pub result: AnalysisResult,
    /// Sections whose pass matched something (credibility, bias, glossary, support)
    pub flagged_sections: Vec<String>,
}

// ============================================================
// Tables Types (get_tables)
// ============================================================

/// Parameters for get_tables
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTablesParams {
    /// Directory to search for .truthpulserc.json
    pub project_root_path: String,
}

/// Effective reference tables
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TablesDto {
    /// True if tables were loaded from a file, false if using built-in tables
    pub from_file: bool,
    pub config: Config,
}
