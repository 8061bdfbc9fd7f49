use crate::Probability;
use crate::cards::deck::Deck;
use crate::evaluation::estimate::Estimate;

/// A Deck paired with the Estimate it earned in one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Candidate {
    deck: Deck,
    estimate: Estimate,
}

impl Candidate {
    pub fn new(deck: Deck, estimate: Estimate) -> Self {
        Self { deck, estimate }
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }
    pub fn score(&self) -> Probability {
        self.estimate.rate()
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}] {}", self.deck, self.estimate)
    }
}
