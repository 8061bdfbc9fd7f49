use super::hand::Hand;

/// What counts as a straight: `length` cards of descending value,
/// where each step may skip a single missing value when `gaps` is set.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Straight {
    length: usize,
    gaps: bool,
}

impl Straight {
    pub fn new(length: usize, gaps: bool) -> Self {
        Self { length, gaps }
    }
    pub fn length(&self) -> usize {
        self.length
    }
    pub fn gaps(&self) -> bool {
        self.gaps
    }

    /// true if any value in the Hand heads a run of the required length.
    /// every start is tried, since a skipped value can make a lower
    /// start reachable where a higher one dead-ends.
    pub fn within(&self, hand: Hand) -> bool {
        hand.values().any(|v| self.descend(hand, v, self.length))
    }

    /// walk down from `value` with `n` cards still owed, counting `value`.
    /// a present neighbor commits the walk; the skip is only
    /// considered when the neighbor is missing.
    fn descend(&self, hand: Hand, value: u8, n: usize) -> bool {
        if n <= 1 {
            return true;
        }
        match (value.checked_sub(1), value.checked_sub(2)) {
            (Some(next), _) if hand.contains(next) => self.descend(hand, next, n - 1),
            (_, Some(skip)) if self.gaps && hand.contains(skip) => self.descend(hand, skip, n - 1),
            _ => false,
        }
    }
}

impl Default for Straight {
    fn default() -> Self {
        Self::new(crate::RUN_LENGTH, false)
    }
}

/// free-standing form of [`Straight::within`]
pub fn has_straight(hand: Hand, length: usize, gaps: bool) -> bool {
    Straight::new(length, gaps).within(hand)
}
