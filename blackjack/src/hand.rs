use std::fmt;

use crate::Card;

pub const BLACKJACK: u16 = 21;

/// Total of a hand together with whether a flexible card still counts high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandTotal {
    pub value: u16,
    pub soft: bool,
}

/// Evaluates cards under ace-flexible scoring.
///
/// Single-valued cards are summed first and flexible cards (aces) last, in the
/// order they were added. Every card starts at its high value; whenever the
/// running total goes over 21, flexible cards still counted high are demoted
/// one at a time until the total fits or none is left. The result may still
/// exceed 21, which is a bust rather than an error.
///
/// Demotion may reach back to an ace added earlier, not only the card being
/// added: a single greedy pass would score K-A-A as 22 because the first ace
/// was already committed to 11, while this returns the best total of 12.
pub fn evaluate(cards: &[Card]) -> HandTotal {
    let mut ordered: Vec<&Card> = cards.iter().collect();
    // stable: flexible cards keep their relative order
    ordered.sort_by_key(|card| card.score_values().len());

    let mut value = 0;
    let mut demotions: Vec<u16> = Vec::new();
    for card in ordered {
        let values = card.score_values();
        value += values[0];
        if let [high, .., low] = values {
            demotions.push(high - low);
        }
        while value > BLACKJACK {
            match demotions.pop() {
                Some(saving) => value -= saving,
                None => break,
            }
        }
    }

    HandTotal {
        value,
        soft: !demotions.is_empty(),
    }
}

pub fn hand_value(cards: &[Card]) -> u16 {
    evaluate(cards).value
}

/// Ordered cards held by one participant. Grows only by [`Hand::receive_card`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Hand {
        Hand {
            cards: Vec::with_capacity(4),
        }
    }

    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u16 {
        hand_value(&self.cards)
    }

    pub fn total(&self) -> HandTotal {
        evaluate(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    pub fn is_busted(&self) -> bool {
        self.value() > BLACKJACK
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbreviations: Vec<String> = self.cards.iter().map(|card| card.to_string()).collect();
        write!(f, "[{}]", abbreviations.join(", "))
    }
}
