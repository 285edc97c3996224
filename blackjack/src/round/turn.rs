use crate::hand::BLACKJACK;
use crate::{DealerPolicy, Deck, Decision, GameError, Hand, HandResult, Participant, Role, Rule};

/// The dealer stands on this total (or above).
pub const DEALER_STAND_VALUE: u16 = 17;

/// Source of player decisions, usually a human at a console.
pub trait DecisionProvider {
    /// Returns one of `options`. Retrying on invalid input is up to the
    /// implementation; the turn engine never sees anything outside `options`.
    fn choose_decision(&mut self, player: &Participant, options: &[Decision]) -> Decision;
}

/// Sink for plain status lines.
pub trait TableDisplay {
    fn show(&mut self, message: &str);
}

/// Decisions offered to the player on every prompt of a turn.
pub fn available_decisions(rule: &Rule) -> Vec<Decision> {
    let mut options = vec![Decision::Hit, Decision::Stand];
    if rule.allow_double {
        options.push(Decision::Double);
    }
    if rule.allow_surrender {
        options.push(Decision::Surrender);
    }
    options
}

pub fn dealer_should_draw(hand: &Hand, policy: DealerPolicy) -> bool {
    let total = hand.total();
    if total.value < DEALER_STAND_VALUE {
        true
    } else if total.value == DEALER_STAND_VALUE && total.soft {
        policy == DealerPolicy::HitOnSoft17
    } else {
        false
    }
}

/// Plays one participant's turn with the policy selected by its role, then
/// fixes its result.
pub fn play_turn<T: DecisionProvider + TableDisplay>(
    participant: &mut Participant,
    deck: &mut Deck,
    rule: &Rule,
    io: &mut T,
) -> Result<(), GameError> {
    match participant.role {
        Role::Player => play_player(participant, deck, rule, io)?,
        Role::Dealer => play_dealer(participant, deck, rule.dealer_policy, io)?,
    }
    participant.resolve_result();
    log::debug!("{} finished the turn: {}", participant.name, participant.result);
    Ok(())
}

fn play_player<T: DecisionProvider + TableDisplay>(
    player: &mut Participant,
    deck: &mut Deck,
    rule: &Rule,
    io: &mut T,
) -> Result<(), GameError> {
    log::debug!("This is the turn of {}", player.name);
    io.show(&player.hand_status());

    let options = available_decisions(rule);
    while player.hand().value() < BLACKJACK {
        let decision = io.choose_decision(player, &options);
        log::debug!("{} decided to {:?}", player.name, decision);
        match decision {
            Decision::Hit => {
                player.receive_card(deck.draw()?);
                io.show(&player.hand_status());
            }
            Decision::Stand => break,
            Decision::Double => {
                if player.bet > 0 {
                    if let Err(err) = player.escrow(player.bet) {
                        log::warn!("{}, doubling down without raising the bet", err);
                    }
                }
                player.receive_card(deck.draw()?);
                io.show(&player.hand_status());
                break;
            }
            Decision::Surrender => {
                player.result = HandResult::Surrendered;
                break;
            }
        }
    }
    Ok(())
}

fn play_dealer<D: TableDisplay>(
    dealer: &mut Participant,
    deck: &mut Deck,
    policy: DealerPolicy,
    display: &mut D,
) -> Result<(), GameError> {
    log::debug!("This is the turn of {}", dealer.name);
    let mut drawn = 0;
    while dealer_should_draw(dealer.hand(), policy) {
        log::debug!("{} The dealer must draw a card.", dealer.hand_status());
        dealer.receive_card(deck.draw()?);
        drawn += 1;
    }
    log::debug!("{} The dealer must stand.", dealer.hand_status());
    display.show(&format!("The dealer stands after drawing {} card(s).", drawn));
    Ok(())
}
