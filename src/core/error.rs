/// Errors signalled by the analysis coordinator.
///
/// The passes themselves are total over every string; the only refusal is an
/// input with nothing in it to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Please enter some text to analyze.")]
    InvalidInput,
}
