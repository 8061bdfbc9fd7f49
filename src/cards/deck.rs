use super::hand::Hand;
use super::rank::Rank;
use crate::SearchError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Deck is a multiset of Ranks, kept as a quantity vector
/// indexed by position in the rank vocabulary. two Decks are the
/// same composition iff their vectors are equal, which is what the
/// search cache keys on.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Deck([usize; 13]);

impl Deck {
    pub fn empty() -> Self {
        Self([0; 13])
    }
    /// four copies of every rank
    pub fn standard() -> Self {
        Self([4; 13])
    }
    pub fn size(&self) -> usize {
        self.0.iter().sum()
    }
    pub fn counts(&self) -> &[usize; 13] {
        &self.0
    }
    /// expand the quantity vector into one Rank per card
    pub fn cards(&self) -> Vec<Rank> {
        Rank::all()
            .iter()
            .flat_map(|rank| std::iter::repeat_n(*rank, self[*rank]))
            .collect()
    }

    /// sample `n` cards without replacement by partially shuffling
    /// `cards` in place and resolving the prefix into a Hand.
    /// `cards` is the caller's scratch copy of [`Deck::cards`], so
    /// repeated draws avoid reallocating.
    pub fn draw<R: Rng + ?Sized>(cards: &mut [Rank], n: usize, rng: &mut R) -> Hand {
        assert!(n <= cards.len());
        let (hand, _) = cards.partial_shuffle(rng, n);
        hand.iter().copied().collect()
    }

    /// checked single draw from a Deck
    pub fn deal<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Hand, SearchError> {
        if n > self.size() {
            return Err(SearchError::InvalidConfiguration(format!(
                "hand size {} exceeds deck size {}",
                n,
                self.size()
            )));
        }
        let ref mut cards = self.cards();
        Ok(Self::draw(cards, n, rng))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::ops::Index<Rank> for Deck {
    type Output = usize;
    fn index(&self, rank: Rank) -> &usize {
        &self.0[usize::from(rank)]
    }
}
impl std::ops::IndexMut<Rank> for Deck {
    fn index_mut(&mut self, rank: Rank) -> &mut usize {
        &mut self.0[usize::from(rank)]
    }
}

/// quantity vector isomorphism
impl From<[usize; 13]> for Deck {
    fn from(counts: [usize; 13]) -> Self {
        Self(counts)
    }
}
impl From<Deck> for [usize; 13] {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

impl FromIterator<Rank> for Deck {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut deck = Self::empty();
        iter.into_iter().for_each(|rank| deck[rank] += 1);
        deck
    }
}

/// rank:quantity listing, e.g. "A:4 K:3 10:1".
/// pairs may be separated by commas or whitespace, and
/// ranks left out of the listing hold zero cards.
impl TryFrom<&str> for Deck {
    type Error = SearchError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut deck = Self::empty();
        for pair in s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
        {
            let (rank, quantity) = pair.split_once(':').ok_or_else(|| {
                SearchError::InvalidConfiguration(format!("expected rank:quantity, got {:?}", pair))
            })?;
            let rank = Rank::try_from(rank)?;
            let quantity = quantity.parse::<usize>().map_err(|e| {
                SearchError::InvalidConfiguration(format!("bad quantity in {:?}: {}", pair, e))
            })?;
            deck[rank] += quantity;
        }
        Ok(deck)
    }
}
impl TryFrom<String> for Deck {
    type Error = SearchError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Deck> for String {
    fn from(deck: Deck) -> Self {
        deck.to_string()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let listing = Rank::all()
            .iter()
            .map(|rank| format!("{}:{}", rank, self[*rank]))
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", listing)
    }
}

impl crate::Arbitrary for Deck {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        Self(std::array::from_fn(|_| rng.random_range(0..=4)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn standard_has_52_cards() {
        let deck = Deck::standard();
        assert!(deck.size() == 52);
        assert!(deck.cards().len() == 52);
        assert!(Rank::all().iter().all(|r| deck[*r] == 4));
    }

    #[test]
    fn cards_round_trip_through_counts() {
        let deck = Deck::random();
        assert!(deck == deck.cards().into_iter().collect::<Deck>());
    }

    #[test]
    fn listing_round_trip() {
        let deck = Deck::random();
        assert!(deck == Deck::try_from(deck.to_string().as_str()).unwrap());
    }

    #[test]
    fn listing_defaults_missing_ranks() {
        let deck = Deck::try_from("A:2, 10:3 2:1").unwrap();
        assert!(deck[Rank::Ace] == 2);
        assert!(deck[Rank::Ten] == 3);
        assert!(deck[Rank::Two] == 1);
        assert!(deck[Rank::King] == 0);
        assert!(deck.size() == 6);
    }

    #[test]
    fn listing_rejects_garbage() {
        assert!(Deck::try_from("A4").is_err());
        assert!(Deck::try_from("Z:4").is_err());
        assert!(Deck::try_from("A:-1").is_err());
    }

    #[test]
    fn display_is_vocabulary_ordered() {
        let deck = Deck::standard();
        assert!(deck.to_string().starts_with("A:4 K:4 Q:4 J:4 10:4"));
        assert!(deck.to_string().ends_with("3:4 2:4"));
    }

    #[test]
    fn deal_is_bounded_by_deck() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let deck = Deck::try_from("9:2 8:1").unwrap();
        assert!(deck.deal(3, rng).is_ok());
        assert!(matches!(
            deck.deal(4, rng),
            Err(SearchError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn deal_whole_deck_sees_every_rank() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let deck = Deck::try_from("A:1 7:3 2:2").unwrap();
        let hand = deck.deal(6, rng).unwrap();
        assert!(hand.values().collect::<Vec<u8>>() == vec![14, 7, 2, 1]);
    }

    #[test]
    fn serde_uses_listing() {
        let deck = Deck::try_from("K:1 5:2").unwrap();
        let json = serde_json::to_string(&deck).unwrap();
        assert!(json == "\"A:0 K:1 Q:0 J:0 10:0 9:0 8:0 7:0 6:0 5:2 4:0 3:0 2:0\"");
        assert!(serde_json::from_str::<Deck>(&json).unwrap() == deck);
    }
}
