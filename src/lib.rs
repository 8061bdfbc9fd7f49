//! Monte Carlo straight odds and deck-composition search.
//!
//! Estimates how often a random hand drawn from a deck of ranks holds a
//! straight, then hill-climbs over deck compositions, one generation of
//! mutated decks at a time, until some deck scores at or above a target rate.
//!
//! ## Core Types
//!
//! - [`cards::Rank`]: one of 13 rank labels; the ace plays as 1 and 14
//! - [`cards::Hand`]: the distinct values of a sampled hand, as a bitstring
//! - [`cards::Deck`]: a multiset of ranks as a 13-long quantity vector
//! - [`cards::Straight`]: run length plus whether single holes may be skipped
//!
//! ## Search
//!
//! - [`evaluation::Evaluator`]: samples hands and tallies an [`evaluation::Estimate`]
//! - [`search::Mutation`]: single-step edits to a deck
//! - [`search::Search`]: generation loop over [`search::Candidate`]s
pub mod cards;
pub mod error;
pub mod evaluation;
pub mod search;

pub use error::SearchError;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Straight rates, thresholds, and their standard errors.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SEARCH PARAMETERS
// Defaults for every field of `search::Config`.
// ============================================================================
/// Cards in a row needed for a straight.
pub const RUN_LENGTH: usize = 5;
/// Cards drawn per sampled hand.
pub const HAND_SIZE: usize = 8;
/// Floor on total cards for any candidate deck.
pub const MIN_DECK_SIZE: usize = 30;
/// Monte Carlo trials per deck evaluation.
pub const NUM_TEST_HANDS: usize = 1000;
/// Top cut kept from each generation.
pub const NUM_RETAINED: usize = 10;
/// Mutation attempts per retained deck.
pub const NUM_CHILDREN: usize = 10;
/// Trials for a one-off deck evaluation.
pub const NUM_EVALUATION_HANDS: usize = 100_000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
