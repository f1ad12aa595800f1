//! Error types for engine operations.

use thiserror::Error;

/// A bet was rejected.
///
/// Rejected bets never mutate the bankroll, shoe, or hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidBetError {
    /// Bet is below the table minimum.
    #[error("bet {amount} is below the table minimum of {minimum}")]
    BelowMinimum {
        /// The rejected amount.
        amount: usize,
        /// The table minimum in effect.
        minimum: usize,
    },
    /// Bet exceeds the player's bankroll.
    #[error("bet {amount} exceeds the bankroll of {bankroll}")]
    ExceedsBankroll {
        /// The rejected amount.
        amount: usize,
        /// The bankroll at the time of the bet.
        bankroll: usize,
    },
    /// A round is already in progress.
    #[error("bets are only accepted between rounds")]
    RoundInProgress,
}

/// A player action was rejected.
///
/// Rejected actions are ignored intents; the prior state stays intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalActionError {
    /// No player turn is in progress.
    #[error("no player turn is in progress")]
    OutsideTurn,
    /// The addressed hand does not exist.
    #[error("hand not found")]
    HandNotFound,
    /// The hand has already stood, busted, or been resolved.
    #[error("hand is not active")]
    HandNotActive,
    /// Double down requires an untouched two-card hand that has not
    /// doubled before.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// The bankroll cannot cover the doubled bet.
    #[error("insufficient bankroll for this action")]
    InsufficientBankroll,
}

/// The shoe was exhausted while a card was required.
///
/// The round engine reshuffles before every deal, so this error mid-round is
/// an internal consistency failure: the round should be aborted, not retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the shoe is empty")]
pub struct EmptyShoeError;

/// Any error an engine transition can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The bet was rejected.
    #[error(transparent)]
    InvalidBet(#[from] InvalidBetError),
    /// The action was rejected.
    #[error(transparent)]
    IllegalAction(#[from] IllegalActionError),
    /// The shoe ran out of cards mid-round.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoeError),
}
