use super::candidate::Candidate;
use super::config::Config;
use super::mutation::suggest_children;
use crate::Probability;
use crate::SearchError;
use crate::cards::deck::Deck;
use crate::evaluation::evaluator::Evaluator;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeSet;
use std::collections::HashSet;

/// Generation-based hill climb over deck compositions.
///
/// each generation is scored, the top cut is kept, and the top cut's
/// mutants that have never been seen (and keep enough cards) become
/// the next generation. the climb stops as soon as the best deck of a
/// generation scores at or above the threshold.
///
/// Search owns its random stream and its cache of visited decks, so
/// one Search is one run.
pub struct Search {
    config: Config,
    evaluator: Evaluator,
    cache: HashSet<Deck>,
    rng: SmallRng,
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Outcome {
    pub winner: Candidate,
    pub threshold: Probability,
    pub generations: usize,
    pub explored: usize,
}

impl Search {
    pub fn new(config: Config) -> Result<Self, SearchError> {
        let config = config.normalized();
        if config.num_retained_per_generation == 0 {
            return Err(SearchError::InvalidConfiguration(
                "at least one deck must be retained per generation".to_string(),
            ));
        }
        if config.hand_size > config.starting_deck.size() {
            return Err(SearchError::InvalidConfiguration(format!(
                "hand size {} exceeds starting deck size {}",
                config.hand_size,
                config.starting_deck.size()
            )));
        }
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Ok(Self {
            evaluator: config.evaluator(),
            cache: HashSet::new(),
            config,
            rng,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(mut self) -> Result<Outcome, SearchError> {
        let threshold = self.threshold()?;
        let mut generation = BTreeSet::from([self.config.starting_deck]);
        let mut index = 0;
        loop {
            index += 1;
            log::info!(
                "{:<32}{:<8}{:>8} candidates",
                "evaluating generation",
                index,
                generation.len()
            );
            let ranked = self.evaluate(&generation)?;
            let retained = self.select(ranked);
            let best = retained[0];
            log::info!("{:<32}{:<8}{}", "best of generation", index, best);
            if best.score() >= threshold {
                self.cache.extend(generation.iter().copied());
                log::info!("{:<32}{:.4} >= {:.4}", "threshold met", best.score(), threshold);
                return Ok(Outcome {
                    winner: best,
                    threshold,
                    generations: index,
                    explored: self.cache.len(),
                });
            }
            if self.config.max_generations.is_some_and(|limit| index >= limit) {
                return Err(SearchError::GenerationLimit {
                    generations: index,
                    best,
                });
            }
            generation = self.mutate(generation, &retained);
            if generation.is_empty() {
                return Err(SearchError::SearchExhausted { generation: index });
            }
        }
    }

    /// the configured success rate, or failing that the
    /// starting deck's own score, so the bar is the baseline
    fn threshold(&mut self) -> Result<Probability, SearchError> {
        match self.config.success_rate {
            Some(rate) => {
                log::info!("{:<32}{:.4}", "using success rate", rate);
                Ok(rate)
            }
            None => {
                let ref start = self.config.starting_deck;
                let baseline = self.evaluator.evaluate(start, &mut self.rng)?;
                log::info!("{:<32}{}", "using baseline success rate", baseline);
                Ok(baseline.rate())
            }
        }
    }

    /// score every deck, best first
    fn evaluate(&mut self, generation: &BTreeSet<Deck>) -> Result<Vec<Candidate>, SearchError> {
        let mut ranked = generation
            .iter()
            .map(|deck| {
                self.evaluator
                    .evaluate(deck, &mut self.rng)
                    .map(|estimate| Candidate::new(*deck, estimate))
            })
            .inspect(|c| {
                if let Ok(c) = c {
                    log::debug!("{:<32}{}", "scored", c)
                }
            })
            .collect::<Result<Vec<Candidate>, SearchError>>()?;
        ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));
        Ok(ranked)
    }

    /// keep the top cut
    fn select(&self, mut ranked: Vec<Candidate>) -> Vec<Candidate> {
        ranked.truncate(self.config.num_retained_per_generation);
        ranked
    }

    /// retire the current generation into the cache and breed
    /// the next one from the retained decks
    fn mutate(&mut self, generation: BTreeSet<Deck>, retained: &[Candidate]) -> BTreeSet<Deck> {
        self.cache.extend(generation);
        let n = self.config.num_children_per_parent;
        let children = retained
            .iter()
            .flat_map(|parent| suggest_children(parent.deck(), n, &mut self.rng))
            .collect::<BTreeSet<Deck>>();
        let offspring = children.len();
        let next = children
            .into_iter()
            .filter(|deck| !self.cache.contains(deck))
            .filter(|deck| deck.size() >= self.config.min_deck_size)
            .collect::<BTreeSet<Deck>>();
        log::debug!(
            "{:<32}{} of {} children survive, {} decks cached",
            "mutated",
            next.len(),
            offspring,
            self.cache.len()
        );
        next
    }
}

/// run one search end to end
pub fn run_search(config: Config) -> Result<Outcome, SearchError> {
    Search::new(config)?.run()
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "deck        {}", self.winner.deck())?;
        writeln!(f, "size        {}", self.winner.deck().size())?;
        writeln!(f, "score       {}", self.winner.estimate())?;
        writeln!(f, "threshold   {:.4}", self.threshold)?;
        writeln!(f, "generations {}", self.generations)?;
        write!(f, "explored    {}", self.explored)
    }
}
