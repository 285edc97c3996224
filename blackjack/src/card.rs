use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Number of cards in one catalog generation.
pub const CATALOG_SIZE: usize = 52;

/// Every playing card exactly once, generated by [`generate_catalog`].
pub type Catalog = [Card; CATALOG_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Suit {
    Hearts = 0,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Possible point contributions, the preferred (high) value first.
    pub fn score_values(&self) -> &'static [u16] {
        match self {
            Rank::Two => &[2],
            Rank::Three => &[3],
            Rank::Four => &[4],
            Rank::Five => &[5],
            Rank::Six => &[6],
            Rank::Seven => &[7],
            Rank::Eight => &[8],
            Rank::Nine => &[9],
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => &[10],
            Rank::Ace => &[11, 1],
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// Represents a card in the real world with a rank and a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    pub fn score_values(&self) -> &'static [u16] {
        self.rank.score_values()
    }

    /// True for cards that can count more than one way (aces).
    pub fn is_flexible(&self) -> bool {
        self.score_values().len() > 1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.abbreviation(), self.suit.symbol())
    }
}

/// Generates one card per (rank, suit) pair, suit by suit. Pure, so the result
/// can be generated once and reused for every round.
pub fn generate_catalog() -> Catalog {
    let mut catalog = [Card::new(Rank::Two, Suit::Hearts); CATALOG_SIZE];
    let pairs = Suit::iter().flat_map(|suit| Rank::iter().map(move |rank| Card::new(rank, suit)));
    for (slot, card) in catalog.iter_mut().zip(pairs) {
        *slot = card;
    }
    catalog
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_52_distinct_cards() {
        let catalog = generate_catalog();
        let distinct: HashSet<Card> = catalog.iter().copied().collect();
        assert_eq!(distinct.len(), CATALOG_SIZE);
    }

    #[test]
    fn catalog_is_ordered_suit_by_suit() {
        let catalog = generate_catalog();
        assert_eq!(catalog[0], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(catalog[1].to_string(), "3♥");
        assert_eq!(catalog[11], Card::new(Rank::King, Suit::Hearts));
        assert_eq!(catalog[12], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(catalog[13], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(catalog[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn catalog_generation_is_idempotent() {
        assert_eq!(generate_catalog(), generate_catalog());
    }

    #[test]
    fn score_values_follow_rank() {
        let catalog = generate_catalog();
        assert_eq!(catalog[11].score_values(), &[10]);
        assert_eq!(catalog[12].score_values(), &[11, 1]);
        assert_eq!(Card::new(Rank::Seven, Suit::Clubs).score_values(), &[7]);
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).score_values(), &[10]);
        for card in catalog {
            assert!(!card.score_values().is_empty());
            assert_eq!(card.is_flexible(), card.rank == Rank::Ace);
        }
    }

    #[test]
    fn display_uses_abbreviation_and_symbol() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
        assert_eq!(Card::new(Rank::Queen, Suit::Spades).to_string(), "Q♠");
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).to_string(), "A♣");
    }
}
