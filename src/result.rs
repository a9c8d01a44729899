//! Round outcomes and payouts.

use serde::Serialize;

use crate::hand::BLACKJACK;

/// How the player's hand finished against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HandOutcome {
    /// Natural 21 on the deal, paid 3:2.
    Blackjack,
    /// Player went over 21.
    Bust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has the higher total.
    Win,
    /// Equal totals.
    Push,
    /// Dealer has the higher total.
    Lose,
}

impl HandOutcome {
    /// Compares final totals.
    ///
    /// A player bust loses even if the dealer busts too.
    #[must_use]
    pub const fn resolve(player_value: u8, dealer_value: u8) -> Self {
        if player_value > BLACKJACK {
            Self::Bust
        } else if dealer_value > BLACKJACK {
            Self::DealerBust
        } else if player_value > dealer_value {
            Self::Win
        } else if player_value == dealer_value {
            Self::Push
        } else {
            Self::Lose
        }
    }

    /// Amount returned to the player for an escrowed `bet`.
    ///
    /// The bet was taken when placed, so a loss returns nothing and a push
    /// returns the bet. A blackjack returns 2.5 times the bet, truncated.
    #[must_use]
    pub const fn payout(self, bet: usize) -> usize {
        match self {
            Self::Blackjack => bet * 5 / 2,
            Self::DealerBust | Self::Win => bet * 2,
            Self::Push => bet,
            Self::Bust | Self::Lose => 0,
        }
    }

    /// Message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Blackjack => "Blackjack! You win.",
            Self::Bust => "Bust! You lose.",
            Self::DealerBust => "Dealer busts! You win!",
            Self::Win => "You win!",
            Self::Push => "Push.",
            Self::Lose => "You lose.",
        }
    }
}

/// A settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settlement {
    /// The outcome.
    pub outcome: HandOutcome,
    /// The escrowed bet.
    pub bet: usize,
    /// Chips returned to the balance.
    pub payout: usize,
    /// The player's final total.
    pub player_value: u8,
    /// The dealer's final total.
    pub dealer_value: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_follow_totals() {
        assert_eq!(HandOutcome::resolve(20, 19), HandOutcome::Win);
        assert_eq!(HandOutcome::resolve(18, 18), HandOutcome::Push);
        assert_eq!(HandOutcome::resolve(22, 23), HandOutcome::Bust);
        assert_eq!(HandOutcome::resolve(22, 17), HandOutcome::Bust);
        assert_eq!(HandOutcome::resolve(12, 24), HandOutcome::DealerBust);
        assert_eq!(HandOutcome::resolve(17, 20), HandOutcome::Lose);
    }

    #[test]
    fn blackjack_payout_truncates() {
        assert_eq!(HandOutcome::Blackjack.payout(100), 250);
        assert_eq!(HandOutcome::Blackjack.payout(25), 62);
        assert_eq!(HandOutcome::Blackjack.payout(75), 187);
    }

    #[test]
    fn escrowed_payouts() {
        assert_eq!(HandOutcome::Win.payout(50), 100);
        assert_eq!(HandOutcome::DealerBust.payout(50), 100);
        assert_eq!(HandOutcome::Push.payout(50), 50);
        assert_eq!(HandOutcome::Lose.payout(50), 0);
        assert_eq!(HandOutcome::Bust.payout(50), 0);
    }
}
