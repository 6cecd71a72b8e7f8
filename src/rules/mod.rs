//! Matching passes.
//!
//! Each pass is a pure function over the raw input and only the table slice it
//! needs. Passes never fail and never depend on each other's output.
//!
//! ## Module Structure
//!
//! - `credibility`: Fact pattern lookup (first match wins)
//! - `bias`: Charged words, sentiment score and neutral rewrite
//! - `glossary`: Economic term definitions
//! - `support`: Anxiety keywords and the box-breathing message

pub mod bias;
pub mod credibility;
pub mod glossary;
pub mod support;

pub use bias::{BiasReport, Sentiment, analyze_bias};
pub use credibility::{CredibilityVerdict, match_credibility};
pub use glossary::lookup_terms;
pub use support::check_support;
