use crate::cards::deck::Deck;
use crate::cards::rank::Rank;
use rand::Rng;
use std::collections::BTreeSet;

/// Single-step edits to a Deck's quantity vector.
///
/// `RemoveOne` and `Death` decline (return None) when they would take a
/// card from an empty rank. `Death` and `SwapAll` that happen to pick the
/// same rank twice, and `RemoveAll` on an empty rank, still yield the
/// unchanged Deck, which then competes as a child like any other.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Mutation {
    AddOne(Rank),
    RemoveOne(Rank),
    RemoveAll(Rank),
    Death(Rank, Rank),
    SwapAll(Rank, Rank),
}

impl Mutation {
    /// pick an operator uniformly, then its ranks uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let operator = rng.random_range(0..5);
        let mut rank = || Rank::from(rng.random_range(0..13usize));
        match operator {
            0 => Mutation::AddOne(rank()),
            1 => Mutation::RemoveOne(rank()),
            2 => Mutation::RemoveAll(rank()),
            3 => Mutation::Death(rank(), rank()),
            _ => Mutation::SwapAll(rank(), rank()),
        }
    }

    pub fn apply(&self, deck: &Deck) -> Option<Deck> {
        let mut child = *deck;
        match *self {
            Mutation::AddOne(rank) => child[rank] += 1,
            Mutation::RemoveOne(rank) => child[rank] = child[rank].checked_sub(1)?,
            Mutation::RemoveAll(rank) => child[rank] = 0,
            Mutation::Death(from, into) => {
                child[from] = child[from].checked_sub(1)?;
                child[into] += 1;
            }
            Mutation::SwapAll(a, b) => {
                let (x, y) = (child[a], child[b]);
                child[a] = y;
                child[b] = x;
            }
        }
        Some(child)
    }
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Mutation::AddOne(r) => write!(f, "add_one({})", r),
            Mutation::RemoveOne(r) => write!(f, "remove_one({})", r),
            Mutation::RemoveAll(r) => write!(f, "remove_all({})", r),
            Mutation::Death(a, b) => write!(f, "death({} -> {})", a, b),
            Mutation::SwapAll(a, b) => write!(f, "swap_all({} <-> {})", a, b),
        }
    }
}

/// make `n` mutation attempts on `deck` and collect the distinct results.
/// declined attempts are dropped rather than retried, so fewer than `n`
/// children (and never more) come back. ordered so that a seeded run
/// visits children in the same order every time.
pub fn suggest_children<R: Rng + ?Sized>(deck: &Deck, n: usize, rng: &mut R) -> BTreeSet<Deck> {
    (0..n)
        .map(|_| Mutation::random(rng))
        .inspect(|m| log::trace!("{:<32}{}", "mutating", m))
        .filter_map(|m| m.apply(deck))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    fn sparse() -> Deck {
        Deck::try_from("A:3 K:0 7:2 2:5").unwrap()
    }

    #[test]
    fn add_one_grows_by_one() {
        let child = Mutation::AddOne(Rank::King).apply(&sparse()).unwrap();
        assert!(child.size() == sparse().size() + 1);
        assert!(child[Rank::King] == 1);
    }

    #[test]
    fn remove_one_shrinks_by_one() {
        let child = Mutation::RemoveOne(Rank::Two).apply(&sparse()).unwrap();
        assert!(child.size() == sparse().size() - 1);
        assert!(child[Rank::Two] == 4);
    }

    #[test]
    fn remove_one_declines_on_empty_rank() {
        assert!(Mutation::RemoveOne(Rank::King).apply(&sparse()).is_none());
    }

    #[test]
    fn remove_all_clears_the_rank() {
        let child = Mutation::RemoveAll(Rank::Two).apply(&sparse()).unwrap();
        assert!(child.size() == sparse().size() - 5);
        assert!(child[Rank::Two] == 0);
    }

    #[test]
    fn remove_all_on_empty_rank_is_unchanged() {
        assert!(Mutation::RemoveAll(Rank::King).apply(&sparse()) == Some(sparse()));
    }

    #[test]
    fn death_moves_one_card() {
        let child = Mutation::Death(Rank::Ace, Rank::King).apply(&sparse()).unwrap();
        assert!(child.size() == sparse().size());
        assert!(child[Rank::Ace] == 2);
        assert!(child[Rank::King] == 1);
    }

    #[test]
    fn death_declines_on_empty_source() {
        assert!(Mutation::Death(Rank::King, Rank::Ace).apply(&sparse()).is_none());
    }

    #[test]
    fn death_onto_itself_is_unchanged() {
        assert!(Mutation::Death(Rank::Seven, Rank::Seven).apply(&sparse()) == Some(sparse()));
    }

    #[test]
    fn swap_all_exchanges_counts() {
        let child = Mutation::SwapAll(Rank::Ace, Rank::Two).apply(&sparse()).unwrap();
        assert!(child.size() == sparse().size());
        assert!(child[Rank::Ace] == 5);
        assert!(child[Rank::Two] == 3);
    }

    #[test]
    fn swap_all_with_itself_is_unchanged() {
        assert!(Mutation::SwapAll(Rank::Ace, Rank::Ace).apply(&sparse()) == Some(sparse()));
    }

    #[test]
    fn operators_keep_their_size_deltas() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..2048 {
            let deck = Deck::random();
            let mutation = Mutation::random(rng);
            if let Some(child) = mutation.apply(&deck) {
                let (before, after) = (deck.size() as isize, child.size() as isize);
                match mutation {
                    Mutation::AddOne(_) => assert!(after == before + 1),
                    Mutation::RemoveOne(_) => assert!(after == before - 1),
                    Mutation::RemoveAll(r) => assert!(after == before - deck[r] as isize),
                    Mutation::Death(..) => assert!(after == before),
                    Mutation::SwapAll(..) => assert!(after == before),
                }
            }
        }
    }

    #[test]
    fn every_operator_gets_drawn() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let kinds = (0..512)
            .map(|_| std::mem::discriminant(&Mutation::random(rng)))
            .collect::<HashSet<_>>();
        assert!(kinds.len() == 5);
    }

    #[test]
    fn children_are_distinct_and_bounded() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let children = suggest_children(&Deck::standard(), 40, rng);
        assert!(!children.is_empty());
        assert!(children.len() <= 40);
    }

    #[test]
    fn children_never_go_negative() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let empty = Deck::empty();
        let children = suggest_children(&empty, 200, rng);
        // from nothing, only add_one and the unchanged deck are reachable
        assert!(children.iter().all(|c| c.size() <= 1));
        assert!(children.contains(&empty));
    }

    #[test]
    fn zero_attempts_yield_nothing() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert!(suggest_children(&Deck::standard(), 0, rng).is_empty());
    }
}
