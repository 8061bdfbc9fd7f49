use crate::Probability;

/// Monte Carlo tally of straight hits over a batch of sampled hands.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Estimate {
    hits: usize,
    trials: usize,
}

impl Estimate {
    pub fn new(hits: usize, trials: usize) -> Self {
        assert!(hits <= trials);
        Self { hits, trials }
    }
    pub fn hits(&self) -> usize {
        self.hits
    }
    pub fn trials(&self) -> usize {
        self.trials
    }
    /// empirical success rate
    pub fn rate(&self) -> Probability {
        if self.trials == 0 {
            0.
        } else {
            self.hits as Probability / self.trials as Probability
        }
    }
    /// standard error of the rate, sqrt(p(1-p)/n)
    pub fn stderr(&self) -> Probability {
        if self.trials == 0 {
            0.
        } else {
            let p = self.rate();
            (p * (1. - p) / self.trials as Probability).sqrt()
        }
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}/{} ({:.4} ± {:.4})",
            self.hits,
            self.trials,
            self.rate(),
            self.stderr()
        )
    }
}
