use super::estimate::Estimate;
use crate::SearchError;
use crate::cards::deck::Deck;
use crate::cards::straight::Straight;
use rand::Rng;

/// Scores a Deck by sampling `trials` hands of `hand` cards each
/// and counting how many contain the configured Straight.
///
/// results are noisy: two evaluations of the same Deck generally
/// disagree by a few standard errors, see [`Estimate::stderr`].
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    straight: Straight,
    hand: usize,
    trials: usize,
}

impl Evaluator {
    pub fn new(straight: Straight, hand: usize, trials: usize) -> Self {
        Self {
            straight,
            hand,
            trials,
        }
    }
    pub fn straight(&self) -> Straight {
        self.straight
    }
    pub fn hand_size(&self) -> usize {
        self.hand
    }
    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn evaluate<R: Rng + ?Sized>(&self, deck: &Deck, rng: &mut R) -> Result<Estimate, SearchError> {
        if self.trials == 0 {
            return Err(SearchError::InvalidConfiguration(
                "at least one test hand is required".to_string(),
            ));
        }
        if self.hand > deck.size() {
            return Err(SearchError::InvalidConfiguration(format!(
                "hand size {} exceeds deck size {} ({})",
                self.hand,
                deck.size(),
                deck
            )));
        }
        let ref mut cards = deck.cards();
        let hits = (0..self.trials)
            .map(|_| Deck::draw(cards, self.hand, rng))
            .filter(|hand| self.straight.within(*hand))
            .count();
        Ok(Estimate::new(hits, self.trials))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Straight::default(), crate::HAND_SIZE, crate::NUM_TEST_HANDS)
    }
}
