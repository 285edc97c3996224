use std::fmt;

use crate::hand::BLACKJACK;
use crate::{Card, GameError, Hand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Player,
    Dealer,
}

/// Per-round result of a participant, fixed once its turn is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandResult {
    Pending,
    /// Final total of a standing hand, 0 to 21 (a 21 that is not a blackjack).
    Total(u16),
    Busted,
    Blackjack,
    Surrendered,
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandResult::Pending => write!(f, "pending"),
            HandResult::Total(total) => write!(f, "{}", total),
            HandResult::Busted => write!(f, "busted"),
            HandResult::Blackjack => write!(f, "blackjack"),
            HandResult::Surrendered => write!(f, "surrendered"),
        }
    }
}

/// A seat at the table. Chips survive across rounds, everything else is reset
/// by [`Participant::new_round`].
#[derive(Debug, Clone)]
pub struct Participant {
    pub name: String,
    pub role: Role,
    pub chips: i64,
    pub bet: u32,
    pub result: HandResult,
    hand: Hand,
}

impl Participant {
    pub fn new(name: impl Into<String>, role: Role, chips: i64) -> Self {
        Participant {
            name: name.into(),
            role,
            chips,
            bet: 0,
            result: HandResult::Pending,
            hand: Hand::new(),
        }
    }

    pub fn player(name: impl Into<String>, chips: i64) -> Self {
        Self::new(name, Role::Player, chips)
    }

    pub fn dealer(name: impl Into<String>, chips: i64) -> Self {
        Self::new(name, Role::Dealer, chips)
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hand.receive_card(card);
    }

    /// Moves `amount` chips from the balance into the bet.
    pub fn escrow(&mut self, amount: u32) -> Result<(), GameError> {
        if i64::from(amount) > self.chips {
            return Err(GameError::InsufficientChips {
                bet: amount,
                available: self.chips,
            });
        }
        self.chips -= i64::from(amount);
        self.bet += amount;
        Ok(())
    }

    /// Fixes the result from the final hand. A surrender stays as it is.
    pub fn resolve_result(&mut self) {
        if self.result == HandResult::Surrendered {
            return;
        }
        let score = self.hand.value();
        self.result = if score == BLACKJACK && self.hand.len() == 2 {
            HandResult::Blackjack
        } else if score > BLACKJACK {
            HandResult::Busted
        } else {
            HandResult::Total(score)
        };
    }

    pub fn hand_status(&self) -> String {
        match self.role {
            Role::Player => format!(
                "You have {} in your hand which makes a {}-point hand.",
                self.hand,
                self.hand.value()
            ),
            Role::Dealer => format!(
                "The dealer has {} in their hand which makes a {}-point hand.",
                self.hand,
                self.hand.value()
            ),
        }
    }

    pub(crate) fn new_round(&mut self) {
        self.hand = Hand::new();
        self.bet = 0;
        self.result = HandResult::Pending;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn with_cards(ranks: &[Rank]) -> Participant {
        let mut player = Participant::player("John Doe", 1000);
        for &rank in ranks {
            player.receive_card(Card::new(rank, Suit::Diamonds));
        }
        player
    }

    #[test]
    fn two_card_21_resolves_to_blackjack() {
        let mut player = with_cards(&[Rank::Ten, Rank::Ace]);
        player.resolve_result();
        assert_eq!(player.result, HandResult::Blackjack);
    }

    #[test]
    fn three_card_21_is_a_plain_total() {
        let mut player = with_cards(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        player.resolve_result();
        assert_eq!(player.result, HandResult::Total(21));
    }

    #[test]
    fn over_21_resolves_to_busted() {
        let mut player = with_cards(&[Rank::Ten, Rank::Nine, Rank::Five]);
        player.resolve_result();
        assert_eq!(player.result, HandResult::Busted);
    }

    #[test]
    fn standing_hand_resolves_to_its_score() {
        let mut player = with_cards(&[Rank::Ten, Rank::Nine]);
        player.resolve_result();
        assert_eq!(player.result, HandResult::Total(19));
    }

    #[test]
    fn surrender_survives_resolution() {
        let mut player = with_cards(&[Rank::Ten, Rank::Ace]);
        player.result = HandResult::Surrendered;
        player.resolve_result();
        assert_eq!(player.result, HandResult::Surrendered);
    }

    #[test]
    fn escrow_moves_chips_into_the_bet() {
        let mut player = Participant::player("John Doe", 150);
        player.escrow(100).unwrap();
        assert_eq!((player.chips, player.bet), (50, 100));
        assert_eq!(
            player.escrow(100),
            Err(GameError::InsufficientChips {
                bet: 100,
                available: 50
            })
        );
        assert_eq!((player.chips, player.bet), (50, 100));
    }

    #[test]
    fn status_line_depends_on_role() {
        let player = with_cards(&[Rank::Ten, Rank::Eight]);
        assert_eq!(
            player.hand_status(),
            "You have [10♦, 8♦] in your hand which makes a 18-point hand."
        );
        let mut dealer = Participant::dealer("Anonymous Dealer", 1000);
        dealer.receive_card(Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(
            dealer.hand_status(),
            "The dealer has [A♠] in their hand which makes a 11-point hand."
        );
    }

    #[test]
    fn new_round_keeps_only_chips() {
        let mut player = with_cards(&[Rank::Ten, Rank::Eight]);
        player.escrow(10).unwrap();
        player.resolve_result();
        player.new_round();
        assert!(player.hand().is_empty());
        assert_eq!(player.bet, 0);
        assert_eq!(player.result, HandResult::Pending);
        assert_eq!(player.chips, 990);
    }
}
