use crate::SearchError;

/// Ranks in deck-vocabulary order, highest label first.
/// The discriminant is the rank's position in a Deck's quantity vector.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Ace = 0,
    King = 1,
    Queen = 2,
    Jack = 3,
    Ten = 4,
    Nine = 5,
    Eight = 6,
    Seven = 7,
    Six = 8,
    Five = 9,
    Four = 10,
    Three = 11,
    Two = 12,
}

impl Rank {
    pub const fn all() -> &'static [Self; 13] {
        &[
            Rank::Ace,
            Rank::King,
            Rank::Queen,
            Rank::Jack,
            Rank::Ten,
            Rank::Nine,
            Rank::Eight,
            Rank::Seven,
            Rank::Six,
            Rank::Five,
            Rank::Four,
            Rank::Three,
            Rank::Two,
        ]
    }

    /// numeric values this rank contributes to a Hand.
    /// the ace plays both low and high at once.
    pub const fn values(&self) -> &'static [u8] {
        match self {
            Rank::Ace => &[1, 14],
            Rank::King => &[13],
            Rank::Queen => &[12],
            Rank::Jack => &[11],
            Rank::Ten => &[10],
            Rank::Nine => &[9],
            Rank::Eight => &[8],
            Rank::Seven => &[7],
            Rank::Six => &[6],
            Rank::Five => &[5],
            Rank::Four => &[4],
            Rank::Three => &[3],
            Rank::Two => &[2],
        }
    }
}

/// usize isomorphism, position in the quantity vector
impl From<usize> for Rank {
    fn from(i: usize) -> Self {
        Self::all()[i % 13]
    }
}
impl From<Rank> for usize {
    fn from(r: Rank) -> usize {
        r as usize
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = SearchError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Rank::Ace),
            "K" => Ok(Rank::King),
            "Q" => Ok(Rank::Queen),
            "J" => Ok(Rank::Jack),
            "10" | "T" => Ok(Rank::Ten),
            "9" => Ok(Rank::Nine),
            "8" => Ok(Rank::Eight),
            "7" => Ok(Rank::Seven),
            "6" => Ok(Rank::Six),
            "5" => Ok(Rank::Five),
            "4" => Ok(Rank::Four),
            "3" => Ok(Rank::Three),
            "2" => Ok(Rank::Two),
            _ => Err(SearchError::InvalidConfiguration(format!(
                "unknown rank {:?}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Ace => "A",
                Rank::King => "K",
                Rank::Queen => "Q",
                Rank::Jack => "J",
                Rank::Ten => "10",
                Rank::Nine => "9",
                Rank::Eight => "8",
                Rank::Seven => "7",
                Rank::Six => "6",
                Rank::Five => "5",
                Rank::Four => "4",
                Rank::Three => "3",
                Rank::Two => "2",
            }
        )
    }
}

impl crate::Arbitrary for Rank {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..13usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_usize() {
        let rank = Rank::Jack;
        assert!(rank == Rank::from(usize::from(rank)));
    }

    #[test]
    fn bijective_str() {
        for rank in Rank::all() {
            let label = rank.to_string();
            assert!(*rank == Rank::try_from(label.as_str()).unwrap());
        }
    }

    #[test]
    fn ten_accepts_both_labels() {
        assert!(Rank::try_from("T").unwrap() == Rank::Ten);
        assert!(Rank::try_from("10").unwrap() == Rank::Ten);
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(Rank::try_from("1").is_err());
        assert!(Rank::try_from("joker").is_err());
    }

    #[test]
    fn ace_plays_high_and_low() {
        assert!(Rank::Ace.values() == &[1u8, 14][..]);
        assert!(Rank::King.values() == &[13u8][..]);
        assert!(Rank::Two.values() == &[2u8][..]);
    }

    #[test]
    fn vocabulary_is_descending() {
        let highs = Rank::all()
            .iter()
            .map(|r| *r.values().last().unwrap())
            .collect::<Vec<u8>>();
        assert!(highs.windows(2).all(|w| w[0] > w[1]));
    }
}
