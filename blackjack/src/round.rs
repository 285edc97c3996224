pub mod outcome;
pub mod turn;

use blackjack_macros::allowed_stage;

use self::outcome::{resolve_round, settle, RoundOutcome};
use self::turn::{play_turn, DecisionProvider, TableDisplay};
use crate::{Deck, GameError, Participant, Role, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PlaceBet,
    DealInitialCards,
    PlayerTurn,
    DealerTurn,
    Resolution,
    Settled,
}

/// One game of blackjack between a player and the dealer. The round owns its
/// deck and borrows the participants, whose hands are reset when the round is
/// created. Every stage method is only allowed in its own stage.
pub struct Round<'a> {
    rule: Rule,
    deck: Deck,
    player: &'a mut Participant,
    dealer: &'a mut Participant,
    stage: Stage,
}

impl<'a> Round<'a> {
    /// Panics if the participants' roles are not a player and a dealer.
    pub fn new(
        rule: Rule,
        deck: Deck,
        player: &'a mut Participant,
        dealer: &'a mut Participant,
    ) -> Self {
        if player.role != Role::Player || dealer.role != Role::Dealer {
            panic!("A round needs exactly one player and one dealer");
        }
        player.new_round();
        dealer.new_round();
        Round {
            rule,
            deck,
            player,
            dealer,
            stage: Stage::PlaceBet,
        }
    }

    /// Runs every stage in order and returns the settled outcome.
    pub fn play<T: DecisionProvider + TableDisplay>(
        mut self,
        bet: u32,
        io: &mut T,
    ) -> Result<RoundOutcome, GameError> {
        self.place_bet(bet)?;
        self.deal_initial_cards()?;
        self.play_player_turn(io)?;
        self.play_dealer_turn(io)?;
        self.resolve()
    }

    /// Can be called at PlaceBet stage.
    /// Place 0 to play the round without tracking a bet.
    #[allowed_stage(PlaceBet)]
    pub fn place_bet(&mut self, bet: u32) -> Result<(), GameError> {
        if bet > 0 {
            self.player.escrow(bet)?;
        }
        log::info!("{} bets {} chips", self.player.name, bet);
        self.stage = Stage::DealInitialCards;
        Ok(())
    }

    /// Can be called at DealInitialCards stage.
    /// Deals two cards each, alternating player and dealer.
    #[allowed_stage(DealInitialCards)]
    pub fn deal_initial_cards(&mut self) -> Result<(), GameError> {
        for _ in 0..2 {
            self.player.receive_card(self.deck.draw()?);
            self.dealer.receive_card(self.deck.draw()?);
        }
        self.stage = Stage::PlayerTurn;
        Ok(())
    }

    /// Can be called at PlayerTurn stage.
    #[allowed_stage(PlayerTurn)]
    pub fn play_player_turn<T: DecisionProvider + TableDisplay>(
        &mut self,
        io: &mut T,
    ) -> Result<(), GameError> {
        play_turn(self.player, &mut self.deck, &self.rule, io)?;
        self.stage = Stage::DealerTurn;
        Ok(())
    }

    /// Can be called at DealerTurn stage.
    /// The dealer plays even when the player already busted or surrendered.
    #[allowed_stage(DealerTurn)]
    pub fn play_dealer_turn<T: DecisionProvider + TableDisplay>(
        &mut self,
        io: &mut T,
    ) -> Result<(), GameError> {
        play_turn(self.dealer, &mut self.deck, &self.rule, io)?;
        self.stage = Stage::Resolution;
        Ok(())
    }

    /// Can be called at Resolution stage.
    /// Classifies the round and settles the bet.
    #[allowed_stage(Resolution)]
    pub fn resolve(&mut self) -> Result<RoundOutcome, GameError> {
        let (code, message) = resolve_round(self.player, self.dealer)?;
        let player_net = settle(self.player, self.dealer, code, &self.rule);
        log::info!("Round resolved as {:?}: {}", code, message);
        self.stage = Stage::Settled;
        Ok(RoundOutcome {
            code,
            message,
            player_net,
        })
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn player(&self) -> &Participant {
        &*self.player
    }

    pub fn dealer(&self) -> &Participant {
        &*self.dealer
    }

    pub fn remaining_cards(&self) -> usize {
        self.deck.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_catalog;

    #[test]
    fn stages_are_enforced() {
        let catalog = generate_catalog();
        let mut player = Participant::player("John Doe", 1000);
        let mut dealer = Participant::dealer("Anonymous Dealer", 1000);
        let mut round = Round::new(Rule::default(), Deck::prepare(&catalog), &mut player, &mut dealer);
        assert_eq!(round.stage(), Stage::PlaceBet);

        assert_eq!(
            round.deal_initial_cards(),
            Err(GameError::WrongStage {
                operation: "deal_initial_cards",
                expected: Stage::DealInitialCards,
                actual: Stage::PlaceBet,
            })
        );
        assert!(round.place_bet(10).is_ok());
        assert_eq!(round.stage(), Stage::DealInitialCards);
        assert!(round.place_bet(10).is_err());
        assert_eq!(round.player().bet, 10);

        assert!(round.deal_initial_cards().is_ok());
        assert_eq!(round.player().hand().len(), 2);
        assert_eq!(round.dealer().hand().len(), 2);
        assert_eq!(round.remaining_cards(), 48);
        assert!(round.resolve().is_err());
    }

    #[test]
    fn oversized_bet_keeps_the_round_open() {
        let catalog = generate_catalog();
        let mut player = Participant::player("John Doe", 50);
        let mut dealer = Participant::dealer("Anonymous Dealer", 1000);
        let mut round = Round::new(Rule::default(), Deck::prepare(&catalog), &mut player, &mut dealer);
        assert_eq!(
            round.place_bet(100),
            Err(GameError::InsufficientChips {
                bet: 100,
                available: 50
            })
        );
        assert_eq!(round.stage(), Stage::PlaceBet);
        assert!(round.place_bet(50).is_ok());
    }

    #[test]
    #[should_panic]
    fn two_players_cannot_form_a_round() {
        let mut first = Participant::player("A", 10);
        let mut second = Participant::player("B", 10);
        Round::new(Rule::default(), Deck::from_cards(vec![]), &mut first, &mut second);
    }
}
