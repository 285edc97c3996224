pub mod card;
pub mod deck;
mod error;
pub mod hand;
pub mod participant;
pub mod round;

use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

pub use card::{generate_catalog, Card, Catalog, Rank, Suit};
pub use deck::Deck;
pub use error::GameError;
pub use hand::{evaluate, hand_value, Hand, HandTotal};
pub use participant::{HandResult, Participant, Role};
pub use round::outcome::{resolve_round, settle, ResultCode, RoundOutcome};
pub use round::turn::{available_decisions, dealer_should_draw, DecisionProvider, TableDisplay};
pub use round::{Round, Stage};

/// Table rules shared by the turn engine and the outcome resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rule {
    pub dealer_policy: DealerPolicy,
    pub allow_double: bool,
    pub allow_surrender: bool,

    pub payout_blackjack: f64,
}

impl Default for Rule {
    fn default() -> Self {
        Rule {
            dealer_policy: DealerPolicy::StandOnSoft17,
            allow_double: true,
            allow_surrender: true,
            payout_blackjack: 1.5,
        }
    }
}

/// How the dealer treats a 17 that still counts an ace as 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum DealerPolicy {
    StandOnSoft17,
    HitOnSoft17,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
    Double,
    Surrender,
}
