use thiserror::Error;

use crate::{HandResult, Stage};

/// Contract violations raised by the core. None of them is recoverable inside a
/// round; callers abort the round when one surfaces.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("cannot draw from an exhausted deck")]
    EmptyDeck,
    #[error("no outcome matches player result {player} against dealer result {dealer}")]
    InvalidResultState {
        player: HandResult,
        dealer: HandResult,
    },
    #[error("{operation} is only allowed in {expected:?} stage, current stage is {actual:?}")]
    WrongStage {
        operation: &'static str,
        expected: Stage,
        actual: Stage,
    },
    #[error("bet of {bet} exceeds the {available} chips available")]
    InsufficientChips { bet: u32, available: i64 },
}
