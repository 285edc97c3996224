use crate::{GameError, HandResult, Participant, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    PlayerWin,
    DealerWin,
    Standoff,
}

/// Result of a settled round as seen from the player.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub code: ResultCode,
    pub message: &'static str,
    /// Chips won (positive) or lost (negative) compared to before the bet.
    pub player_net: i64,
}

/// Classifies a finished round. The first matching rule wins:
/// surrender, player bust, dealer bust, a lone blackjack on either side, then
/// the higher total. A surrendered or busted player loses whatever the dealer
/// holds; past those two rules, a pending result on either side or a
/// surrendered dealer yields [`GameError::InvalidResultState`].
pub fn resolve_round(
    player: &Participant,
    dealer: &Participant,
) -> Result<(ResultCode, &'static str), GameError> {
    use HandResult::*;
    use ResultCode::*;

    let resolved = match (player.result, dealer.result) {
        (Surrendered, _) => (DealerWin, "Sorry, you surrendered."),
        (Busted, _) => (DealerWin, "Sorry, you are busted."),
        (Pending, _) | (_, Pending) | (_, Surrendered) => {
            return Err(GameError::InvalidResultState {
                player: player.result,
                dealer: dealer.result,
            })
        }
        (_, Busted) => (PlayerWin, "You win - the dealer is busted."),
        (Blackjack, Blackjack) => (Standoff, "Stand off - both hands are blackjacks."),
        (Blackjack, _) => (PlayerWin, "Blackjack, you win!"),
        (_, Blackjack) => (DealerWin, "The dealer has got a blackjack, you lose this game!"),
        (Total(player_total), Total(dealer_total)) if player_total > dealer_total => {
            (PlayerWin, "Congratulations, you win.")
        }
        (Total(player_total), Total(dealer_total)) if dealer_total > player_total => {
            (DealerWin, "Bad luck, you lose this time.")
        }
        (Total(_), Total(_)) => (Standoff, "Stand off - neither the dealer nor the player wins."),
    };
    Ok(resolved)
}

/// Settles an escrowed bet between player and dealer and returns the
/// player's net result. A blackjack win pays `payout_blackjack` times the bet,
/// truncated; a surrender forfeits half the bet, rounded down.
pub fn settle(
    player: &mut Participant,
    dealer: &mut Participant,
    code: ResultCode,
    rule: &Rule,
) -> i64 {
    let bet = i64::from(player.bet);
    let player_net = match code {
        ResultCode::Standoff => 0,
        ResultCode::PlayerWin if player.result == HandResult::Blackjack => {
            (f64::from(player.bet) * rule.payout_blackjack) as i64
        }
        ResultCode::PlayerWin => bet,
        ResultCode::DealerWin if player.result == HandResult::Surrendered => -(bet / 2),
        ResultCode::DealerWin => -bet,
    };

    player.chips += bet + player_net;
    dealer.chips -= player_net;
    log::info!(
        "{} settled a bet of {} with {:+} chips ({} left), {} has {} chips",
        player.name,
        bet,
        player_net,
        player.chips,
        dealer.name,
        dealer.chips
    );
    player_net
}
