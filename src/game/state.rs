//! Round phase and seat types.

use serde::Serialize;

use crate::card::Card;

/// The phase of the current round. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoundPhase {
    /// Accepting chips for the next round.
    Betting,
    /// Dealer shows an Ace; waiting for the insurance decision.
    Insurance,
    /// Waiting for player actions.
    Playing,
    /// Revealing the single card of a double down.
    PlayerDoubling,
    /// Revealing the dealer's draws.
    DealerDrawing,
    /// Waiting for the running count guess.
    CountCheck,
    /// Round has ended.
    RoundOver,
    /// Round has ended and the player lost the count check or the round
    /// could not be settled.
    GameOver,
}

impl RoundPhase {
    /// Returns whether the dealer's hole card is face up in this phase.
    #[must_use]
    pub const fn shows_dealer_hand(self) -> bool {
        matches!(
            self,
            Self::DealerDrawing | Self::CountCheck | Self::RoundOver | Self::GameOver
        )
    }

    /// Returns whether the round has finished.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::RoundOver | Self::GameOver)
    }
}

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Seat {
    /// The human player.
    Player,
    /// The dealer.
    Dealer,
    /// A scripted AI seat, numbered from zero.
    Ai(u8),
}

/// One card of the initial deal, in dealing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DealtCard {
    /// Who received the card.
    pub seat: Seat,
    /// The card.
    pub card: Card,
}
