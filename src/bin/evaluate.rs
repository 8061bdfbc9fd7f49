//! Deck Evaluation Binary
//!
//! Estimates the straight rate of a single deck, the standard deck by default.

use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use robodeck::cards::Deck;
use robodeck::cards::Straight;
use robodeck::evaluation::Evaluator;

#[derive(Parser)]
#[command(author, version, about = "Estimate how often a deck deals a straight", long_about = None)]
struct Args {
    /// rank:quantity listing, e.g. "A:4 K:4 Q:2"
    #[arg(long)]
    deck: Option<String>,
    #[arg(long, default_value_t = robodeck::RUN_LENGTH)]
    run_length: usize,
    #[arg(long)]
    allow_gap: bool,
    #[arg(long, default_value_t = robodeck::HAND_SIZE)]
    hand_size: usize,
    #[arg(long, default_value_t = robodeck::NUM_EVALUATION_HANDS)]
    trials: usize,
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    robodeck::log();
    let args = Args::parse();
    let deck = match args.deck {
        Some(ref listing) => Deck::try_from(listing.as_str())?,
        None => Deck::standard(),
    };
    let ref mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let straight = Straight::new(args.run_length, args.allow_gap);
    log::info!("{:<32}{}", "evaluating deck", deck);
    let estimate = Evaluator::new(straight, args.hand_size, args.trials).evaluate(&deck, rng)?;
    println!("{}", estimate.to_string().green());
    Ok(())
}
