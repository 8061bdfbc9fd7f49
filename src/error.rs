use crate::search::candidate::Candidate;

/// Errors that can end a deck search or evaluation.
#[derive(Debug, Clone)]
pub enum SearchError {
    /// parameters that make sampling undefined, or input that does not parse
    InvalidConfiguration(String),
    /// mutation left no unseen deck at or above the size floor
    SearchExhausted { generation: usize },
    /// the generation ceiling was hit before any deck met the threshold
    GenerationLimit { generations: usize, best: Candidate },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(s) => write!(f, "invalid configuration: {}", s),
            Self::SearchExhausted { generation } => write!(
                f,
                "search exhausted: no unseen candidates after generation {}",
                generation
            ),
            Self::GenerationLimit { generations, best } => write!(
                f,
                "generation limit of {} reached, best {}",
                generations, best
            ),
        }
    }
}

impl std::error::Error for SearchError {}
