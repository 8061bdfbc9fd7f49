//! Deck Search Binary
//!
//! Hill-climbs over deck compositions until one meets the straight-rate bar.
//!
//! Options may come from a JSON `--config` file; flags override it.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use robodeck::cards::Deck;
use robodeck::search::Config;
use robodeck::search::run_search;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Search for a deck that meets a straight rate", long_about = None)]
struct Args {
    /// JSON file holding any subset of the search options
    #[arg(long)]
    config: Option<PathBuf>,
    /// rank:quantity listing, e.g. "A:4 K:4 Q:2"
    #[arg(long)]
    starting_deck: Option<String>,
    #[arg(long)]
    min_deck_size: Option<usize>,
    #[arg(long)]
    run_length: Option<usize>,
    /// let a run skip single missing values
    #[arg(long)]
    allow_gap: bool,
    #[arg(long)]
    hand_size: Option<usize>,
    /// stop at this rate; defaults to the starting deck's own rate
    #[arg(long)]
    success_rate: Option<f32>,
    #[arg(long)]
    num_test_hands: Option<usize>,
    #[arg(long)]
    num_retained_per_generation: Option<usize>,
    #[arg(long)]
    num_children_per_parent: Option<usize>,
    #[arg(long)]
    max_generations: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    /// print the outcome as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn resolve(&self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))
                .and_then(|s| serde_json::from_str::<Config>(&s).context("parsing config"))?,
            None => Config::default(),
        };
        if let Some(ref deck) = self.starting_deck {
            config.starting_deck = Deck::try_from(deck.as_str())?;
        }
        if self.allow_gap {
            config.allow_gap = true;
        }
        config.min_deck_size = self.min_deck_size.unwrap_or(config.min_deck_size);
        config.run_length = self.run_length.unwrap_or(config.run_length);
        config.hand_size = self.hand_size.unwrap_or(config.hand_size);
        config.success_rate = self.success_rate.or(config.success_rate);
        config.num_test_hands = self.num_test_hands.unwrap_or(config.num_test_hands);
        config.num_retained_per_generation = self
            .num_retained_per_generation
            .unwrap_or(config.num_retained_per_generation);
        config.num_children_per_parent = self
            .num_children_per_parent
            .unwrap_or(config.num_children_per_parent);
        config.max_generations = self.max_generations.or(config.max_generations);
        config.seed = self.seed.or(config.seed);
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    robodeck::log();
    let args = Args::parse();
    let config = args.resolve()?;
    log::info!("{:<32}{}", "starting deck", config.starting_deck);
    let outcome = run_search(config).context("deck search failed")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", "winning deck".bold());
        println!("{}", outcome.to_string().green());
    }
    Ok(())
}
