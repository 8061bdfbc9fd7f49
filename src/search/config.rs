use crate::Probability;
use crate::cards::deck::Deck;
use crate::cards::straight::Straight;
use crate::evaluation::evaluator::Evaluator;

/// Parameters of one deck search.
///
/// every field has a default (see the crate-level constants), so a JSON
/// file only needs the fields it changes. call [`Config::normalized`]
/// before use; [`crate::search::Search::new`] does this for you.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub starting_deck: Deck,
    /// floor on total cards for any candidate deck
    pub min_deck_size: usize,
    pub run_length: usize,
    pub allow_gap: bool,
    pub hand_size: usize,
    /// stop once a deck scores at least this. outside (0, 1), or absent,
    /// the starting deck's own score is used instead
    pub success_rate: Option<Probability>,
    pub num_test_hands: usize,
    pub num_retained_per_generation: usize,
    pub num_children_per_parent: usize,
    /// give up after this many generations. unbounded when absent
    pub max_generations: Option<usize>,
    /// fixes the random stream for reproducible runs
    pub seed: Option<u64>,
}

impl Config {
    /// clamp the size floor to the starting deck and
    /// discard a success rate that cannot be a probability
    pub fn normalized(mut self) -> Self {
        self.min_deck_size = self.min_deck_size.min(self.starting_deck.size());
        self.success_rate = self.success_rate.filter(|p| *p > 0. && *p < 1.);
        self
    }
    pub fn straight(&self) -> Straight {
        Straight::new(self.run_length, self.allow_gap)
    }
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.straight(), self.hand_size, self.num_test_hands)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_deck: Deck::standard(),
            min_deck_size: crate::MIN_DECK_SIZE,
            run_length: crate::RUN_LENGTH,
            allow_gap: false,
            hand_size: crate::HAND_SIZE,
            success_rate: None,
            num_test_hands: crate::NUM_TEST_HANDS,
            num_retained_per_generation: crate::NUM_RETAINED,
            num_children_per_parent: crate::NUM_CHILDREN,
            max_generations: None,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.starting_deck.size() == 52);
        assert!(config.min_deck_size == 30);
        assert!(config.run_length == 5);
        assert!(!config.allow_gap);
        assert!(config.hand_size == 8);
        assert!(config.success_rate.is_none());
        assert!(config.num_test_hands == 1000);
        assert!(config.num_retained_per_generation == 10);
        assert!(config.num_children_per_parent == 10);
    }

    #[test]
    fn floor_clamps_to_starting_deck() {
        let config = Config {
            starting_deck: Deck::try_from("A:5 K:5 Q:5").unwrap(),
            ..Config::default()
        }
        .normalized();
        assert!(config.min_deck_size == 15);
    }

    #[test]
    fn out_of_range_rate_is_dropped() {
        for rate in [0., 1., -0.5, 1.5] {
            let config = Config {
                success_rate: Some(rate),
                ..Config::default()
            }
            .normalized();
            assert!(config.success_rate.is_none());
        }
        let config = Config {
            success_rate: Some(0.2),
            ..Config::default()
        }
        .normalized();
        assert!(config.success_rate == Some(0.2));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{ "hand_size": 7, "allow_gap": true, "starting_deck": "A:4 K:4 Q:4 J:4 10:4 9:4 8:4 7:4" }"#;
        let config = serde_json::from_str::<Config>(json).unwrap();
        assert!(config.hand_size == 7);
        assert!(config.allow_gap);
        assert!(config.starting_deck.size() == 32);
        assert!(config.num_test_hands == 1000);
    }

    #[test]
    fn bad_deck_in_json_is_rejected() {
        let json = r#"{ "starting_deck": "X:4" }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }
}
