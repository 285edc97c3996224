use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::{Card, GameError};

/// Represents the shoe of a single round: the catalog cards in random order,
/// dealt without replacement.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Copies the catalog and shuffles the copy with the thread-local RNG.
    pub fn prepare(catalog: &[Card]) -> Deck {
        Self::prepare_with_rng(catalog, &mut thread_rng())
    }

    /// Copies the catalog and shuffles the copy with the given RNG. The catalog
    /// itself is left untouched.
    pub fn prepare_with_rng<R: Rng + ?Sized>(catalog: &[Card], rng: &mut R) -> Deck {
        let mut cards = catalog.to_vec();
        cards.shuffle(rng);
        Deck { cards }
    }

    /// Builds a deck that deals the given cards front to back. Useful to stack
    /// a deck for a known sequence of draws.
    pub fn from_cards(cards: Vec<Card>) -> Deck {
        let mut cards = cards;
        cards.reverse();
        Deck { cards }
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        let card = self.cards.pop().ok_or(GameError::EmptyDeck)?;
        log::debug!(
            "'{}' has been drawn and scratched from the deck, {} left",
            card,
            self.cards.len()
        );
        Ok(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::card::{generate_catalog, Rank, Suit, CATALOG_SIZE};

    #[test]
    fn drawing_everything_yields_each_card_once() {
        let catalog = generate_catalog();
        let mut deck = Deck::prepare(&catalog);
        assert_eq!(deck.remaining(), CATALOG_SIZE);

        let mut seen = HashSet::new();
        for drawn in 1..=CATALOG_SIZE {
            let card = deck.draw().unwrap();
            assert!(seen.insert(card), "{} was dealt twice", card);
            assert_eq!(deck.remaining(), CATALOG_SIZE - drawn);
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
    }

    #[test]
    fn preparing_does_not_touch_the_catalog() {
        let catalog = generate_catalog();
        let mut deck = Deck::prepare(&catalog);
        while deck.draw().is_ok() {}
        assert_eq!(catalog, generate_catalog());
    }

    #[test]
    fn same_seed_gives_same_order() {
        let catalog = generate_catalog();
        let mut first = Deck::prepare_with_rng(&catalog, &mut StdRng::seed_from_u64(7));
        let mut second = Deck::prepare_with_rng(&catalog, &mut StdRng::seed_from_u64(7));
        for _ in 0..CATALOG_SIZE {
            assert_eq!(first.draw(), second.draw());
        }
    }

    #[test]
    fn stacked_deck_deals_front_to_back() {
        let mut deck = Deck::from_cards(vec![
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Clubs),
        ]);
        assert_eq!(deck.draw().unwrap(), Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(deck.draw().unwrap(), Card::new(Rank::Nine, Suit::Clubs));
        assert!(deck.draw().is_err());
    }
}
