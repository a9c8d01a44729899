use crate::error::InsuranceError;
use crate::hand::BLACKJACK;

use super::{Game, RoundPhase};

const DEALER_BLACKJACK: &str = "Dealer blackjack! Insurance pays 2:1.";
const NO_DEALER_BLACKJACK: &str = "No dealer blackjack.";

impl Game {
    /// Returns whether insurance is currently being offered.
    #[must_use]
    pub fn is_insurance_offered(&self) -> bool {
        self.phase == RoundPhase::Insurance
    }

    /// Answers the insurance offer and checks the dealer for blackjack.
    ///
    /// Taking insurance escrows half the bet, or the whole balance if that is
    /// less. Either way the dealer's hand is then checked: a dealer 21 pays
    /// the insurance bet 2:1, takes the main bet, and ends the round;
    /// otherwise play begins and the insurance bet is lost. The insurance
    /// escrow stays visible until the round settles.
    ///
    /// Returns `true` if the dealer had blackjack.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not being offered.
    pub fn insurance(&mut self, take: bool) -> Result<bool, InsuranceError> {
        if self.phase != RoundPhase::Insurance {
            return Err(InsuranceError::InvalidState);
        }

        if take {
            let insurance_bet = (self.bet / 2).min(self.ledger.balance());
            self.ledger.debit_clamped(insurance_bet);
            self.insurance_bet = insurance_bet;
        }

        let dealer_blackjack = self.dealer.value() == BLACKJACK;
        self.result.clear();

        if dealer_blackjack {
            let payout = self.insurance_bet * 2;
            log::info!(
                "dealer blackjack, insurance {} pays {payout}, bet {} lost",
                self.insurance_bet,
                self.bet
            );
            self.ledger.credit(payout);
            self.insurance_bet = 0;
            self.bet = 0;
            self.dealer.reveal_hole();
            self.result.push_str(DEALER_BLACKJACK);
            self.set_phase(RoundPhase::RoundOver);
        } else {
            self.result.push_str(NO_DEALER_BLACKJACK);
            self.set_phase(RoundPhase::Playing);
        }

        Ok(dealer_blackjack)
    }
}
