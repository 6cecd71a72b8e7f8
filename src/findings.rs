//! Display sections built from an analysis result.
//!
//! An [`AnalysisResult`] is split into one finding per pass. Each finding knows
//! its heading and the lines to show, so every front end (terminal, Markdown,
//! MCP) renders the same content:
//! - Reporter: turns [`Line`]s into colored terminal output or Markdown
//! - Selection: the CLI filters findings by [`SectionKind`]

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;

use crate::core::{AnalysisResult, Credibility, EconomicTerm};
use crate::rules::Sentiment;
use crate::utils::capitalize_first;

// ============================================================
// Section Kind
// ============================================================

/// One section per analysis pass, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum SectionKind {
    Credibility,
    Bias,
    Glossary,
    Support,
}

impl SectionKind {
    pub fn all() -> Vec<SectionKind> {
        vec![
            SectionKind::Credibility,
            SectionKind::Bias,
            SectionKind::Glossary,
            SectionKind::Support,
        ]
    }

    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::Credibility => "Fact-Check Result",
            SectionKind::Bias => "Bias Detection & Neutral Rewrite",
            SectionKind::Glossary => "Economic Clarity Explanation",
            SectionKind::Support => "Mental Health Support",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::Credibility => write!(f, "credibility"),
            SectionKind::Bias => write!(f, "bias"),
            SectionKind::Glossary => write!(f, "glossary"),
            SectionKind::Support => write!(f, "support"),
        }
    }
}

// ============================================================
// Lines
// ============================================================

/// A renderer-neutral line of section content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `Label: value`
    Field { label: &'static str, value: String },
    /// A free-standing paragraph.
    Text(String),
    /// A labelled bulleted list.
    List {
        label: &'static str,
        items: Vec<String>,
    },
    /// A glossary definition.
    Term { term: String, definition: String },
    /// Shown when the pass found nothing.
    Nothing(&'static str),
}

// ============================================================
// Findings
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredibilityFinding {
    pub credibility: Credibility,
    pub explanation: String,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiasFinding {
    pub bias_words_found: Vec<String>,
    pub sentiment: Sentiment,
    pub neutral_rewrite: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryFinding {
    pub entries: Vec<EconomicTerm>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportFinding {
    pub message: Option<String>,
}

/// The output of one pass, ready for display.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    Credibility(CredibilityFinding),
    Bias(BiasFinding),
    Glossary(GlossaryFinding),
    Support(SupportFinding),
}

impl Finding {
    /// Split a result into its four sections, in display order.
    pub fn from_result(result: &AnalysisResult) -> Vec<Finding> {
        vec![
            Finding::Credibility(CredibilityFinding {
                credibility: result.credibility,
                explanation: result.explanation.clone(),
                sources: result.sources.clone(),
            }),
            Finding::Bias(BiasFinding {
                bias_words_found: result.bias_words_found.clone(),
                sentiment: result.sentiment,
                neutral_rewrite: result.neutral_rewrite.clone(),
            }),
            Finding::Glossary(GlossaryFinding {
                entries: result.economic_explanations.clone(),
            }),
            Finding::Support(SupportFinding {
                message: result.support_message.clone(),
            }),
        ]
    }

    /// Like [`Finding::from_result`], keeping only the requested sections.
    ///
    /// An empty selection keeps everything.
    pub fn select(result: &AnalysisResult, sections: &[SectionKind]) -> Vec<Finding> {
        Finding::from_result(result)
            .into_iter()
            .filter(|f| sections.is_empty() || sections.contains(&f.kind()))
            .collect()
    }
}

// ============================================================
// Report Trait
// ============================================================

/// Trait for findings that can be rendered.
///
/// Implemented by every finding type and dispatched on [`Finding`] through
/// `enum_dispatch`.
#[enum_dispatch]
pub trait Report {
    /// Which section this finding belongs to.
    fn kind(&self) -> SectionKind;

    /// Section heading.
    fn heading(&self) -> &'static str {
        self.kind().heading()
    }

    /// Content lines, in display order.
    fn lines(&self) -> Vec<Line>;

    /// True if the pass matched anything in the text.
    fn flagged(&self) -> bool;
}

impl Report for CredibilityFinding {
    fn kind(&self) -> SectionKind {
        SectionKind::Credibility
    }

    fn lines(&self) -> Vec<Line> {
        let mut lines = vec![
            Line::Field {
                label: "Credibility",
                value: self.credibility.to_string(),
            },
            Line::Text(self.explanation.clone()),
        ];
        if !self.sources.is_empty() {
            lines.push(Line::List {
                label: "Sources",
                items: self.sources.clone(),
            });
        }
        lines
    }

    fn flagged(&self) -> bool {
        self.credibility != Credibility::NotEnoughInformation
    }
}

impl Report for BiasFinding {
    fn kind(&self) -> SectionKind {
        SectionKind::Bias
    }

    fn lines(&self) -> Vec<Line> {
        let charged = if self.bias_words_found.is_empty() {
            Line::Nothing("No obvious emotionally charged language detected.")
        } else {
            Line::Text(format!(
                "The statement uses emotionally charged language: {}.",
                self.bias_words_found.join(", ")
            ))
        };

        vec![
            charged,
            Line::Field {
                label: "Overall Sentiment",
                value: self.sentiment.to_string(),
            },
            Line::Field {
                label: "Neutral Rewrite",
                value: self.neutral_rewrite.clone(),
            },
        ]
    }

    fn flagged(&self) -> bool {
        !self.bias_words_found.is_empty()
    }
}

impl Report for GlossaryFinding {
    fn kind(&self) -> SectionKind {
        SectionKind::Glossary
    }

    fn lines(&self) -> Vec<Line> {
        if self.entries.is_empty() {
            return vec![Line::Nothing("No specific economic terms detected.")];
        }
        self.entries
            .iter()
            .map(|entry| Line::Term {
                term: capitalize_first(&entry.term),
                definition: entry.definition.clone(),
            })
            .collect()
    }

    fn flagged(&self) -> bool {
        !self.entries.is_empty()
    }
}

impl Report for SupportFinding {
    fn kind(&self) -> SectionKind {
        SectionKind::Support
    }

    fn lines(&self) -> Vec<Line> {
        match &self.message {
            Some(message) => vec![Line::Text(message.clone())],
            None => vec![Line::Nothing(
                "No mental health concerns detected in your input.",
            )],
        }
    }

    fn flagged(&self) -> bool {
        self.message.is_some()
    }
}
