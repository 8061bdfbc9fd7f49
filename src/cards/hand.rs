use super::rank::Rank;

/// Hand is the set of numeric values resolved from a sample of Ranks.
/// stored as a u16 bitstring where bit v is set iff value v is present.
/// values live in 1..=14, so a single word holds every Hand and
/// multiplicity (two tens, say) collapses into one bit.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u16);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, value: u8) -> bool {
        value < 16 && self.0 & (1 << value) != 0
    }
    pub fn insert(&mut self, value: u8) {
        assert!(value < 16, "hand value out of range: {}", value);
        self.0 |= 1 << value;
    }
    /// distinct values, high to low
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        (0..16u8).rev().filter(|v| self.contains(*v))
    }
}

/// u16 isomorphism
impl From<u16> for Hand {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}
impl From<Hand> for u16 {
    fn from(hand: Hand) -> u16 {
        hand.0
    }
}

impl From<&[Rank]> for Hand {
    fn from(ranks: &[Rank]) -> Self {
        ranks.iter().copied().collect()
    }
}

impl FromIterator<Rank> for Hand {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut hand = Self::empty();
        iter.into_iter()
            .flat_map(|rank| rank.values().iter().copied())
            .for_each(|v| hand.insert(v));
        hand
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let values = self
            .values()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{{{}}}", values)
    }
}
