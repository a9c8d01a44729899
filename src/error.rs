//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Insufficient funds.
    #[error("not enough chips for that bet")]
    InsufficientFunds,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No chips have been bet.
    #[error("no bet has been placed")]
    NoBet,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// Cards from an earlier hit are still being revealed.
    #[error("cards are still being dealt")]
    CardsPending,
    /// Splitting pairs is not supported at this table.
    #[error("splitting is not supported")]
    SplitUnsupported,
}

/// Errors that can occur during insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Invalid game state for insurance.
    #[error("invalid game state for insurance")]
    InvalidState,
}

/// Errors that can occur while answering the count check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountCheckError {
    /// The count check is not open.
    #[error("the count check is not open")]
    InvalidState,
    /// The count check has not been unlocked yet.
    #[error("the count check is not ready")]
    NotReady,
}

/// Errors that can occur when moving between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The current round has not finished.
    #[error("the round is still in progress")]
    InProgress,
}

/// Errors raised by a balance store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[cfg(feature = "std")]
    #[error("balance file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The stored record could not be parsed or written.
    #[cfg(feature = "std")]
    #[error("balance record is malformed: {0}")]
    Format(#[from] serde_json::Error),
    /// The store cannot be reached.
    #[error("balance store is unavailable")]
    Unavailable,
}

/// Any error returned while applying an [`Intent`](crate::Intent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntentError {
    /// A betting intent failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The insurance decision failed.
    #[error(transparent)]
    Insurance(#[from] InsuranceError),
    /// A count check intent failed.
    #[error(transparent)]
    CountCheck(#[from] CountCheckError),
    /// A round transition failed.
    #[error(transparent)]
    Round(#[from] RoundError),
    /// The game is paused and only accepts resume or quit.
    #[error("the game is paused")]
    Paused,
}
