use alloc::vec::Vec;

use crate::error::{BetError, DealError, RoundError};
use crate::hand::BLACKJACK;
use crate::intent::Chip;
use crate::result::{HandOutcome, Settlement};

use super::{DealtCard, Game, RoundPhase, Seat};

const NOT_ENOUGH_CHIPS: &str = "Not enough chips for that bet!";

impl Game {
    /// Deals one card to `seat`. Nothing is drawn for a seat with no hand.
    fn deal_one(&mut self, seat: Seat) -> Option<DealtCard> {
        let card = match seat {
            Seat::Player => {
                let card = self.shoe.draw();
                self.player.add_card(card);
                card
            }
            Seat::Dealer => {
                let card = self.shoe.draw();
                self.dealer.add_card(card);
                card
            }
            Seat::Ai(index) => {
                let hand = self.ai_hands.get_mut(usize::from(index))?;
                let card = self.shoe.draw();
                hand.add_card(card);
                card
            }
        };
        Some(DealtCard { seat, card })
    }

    /// Adds a chip to the bet, taking it from the balance immediately.
    ///
    /// Returns the new bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting phase or the
    /// balance does not cover the chip. A shortfall also raises a popup.
    pub fn place_bet(&mut self, chip: Chip, now: u64) -> Result<usize, BetError> {
        if self.phase != RoundPhase::Betting {
            return Err(BetError::InvalidState);
        }

        if !self.ledger.try_debit(chip.value()) {
            self.show_popup(NOT_ENOUGH_CHIPS, now, self.options.bet_popup_ms);
            return Err(BetError::InsufficientFunds);
        }

        self.bet += chip.value();
        Ok(self.bet)
    }

    /// Returns the whole bet to the balance.
    ///
    /// Returns the amount refunded.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting phase.
    pub fn clear_bet(&mut self) -> Result<usize, BetError> {
        if self.phase != RoundPhase::Betting {
            return Err(BetError::InvalidState);
        }

        let refund = self.bet;
        self.bet = 0;
        self.ledger.credit(refund);
        Ok(refund)
    }

    /// Deals the round.
    ///
    /// Two passes go around the table (player, dealer, then each AI seat).
    /// The cards are returned in dealing order so the caller can animate
    /// them. Afterwards:
    ///
    /// - a player 21 pays 3:2 at once unless the dealer's up card is an Ace;
    /// - an Ace up card opens the insurance offer;
    /// - otherwise play begins.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting phase or no bet
    /// has been placed.
    pub fn deal(&mut self) -> Result<Vec<DealtCard>, DealError> {
        if self.phase != RoundPhase::Betting {
            return Err(DealError::InvalidState);
        }
        if self.bet == 0 {
            return Err(DealError::NoBet);
        }

        self.player.clear();
        self.dealer.clear();
        for hand in &mut self.ai_hands {
            hand.clear();
        }
        self.player_reveal.clear();
        self.dealer_reveal.clear();
        self.insurance_bet = 0;
        self.settlement = None;
        self.result.clear();
        self.count_visible_until.disarm();
        self.ledger.persist();

        let mut order = Vec::with_capacity(2 + self.ai_hands.len());
        order.push(Seat::Player);
        order.push(Seat::Dealer);
        order.extend(
            (0..self.ai_hands.len())
                .filter_map(|index| u8::try_from(index).ok())
                .map(Seat::Ai),
        );

        let mut dealt = Vec::with_capacity(order.len() * 2);
        for _ in 0..2 {
            for &seat in &order {
                dealt.extend(self.deal_one(seat));
            }
        }
        self.last_deal.clone_from(&dealt);

        if self.player.value() == BLACKJACK && !self.dealer.shows_ace() {
            let payout = HandOutcome::Blackjack.payout(self.bet);
            log::info!("player blackjack, bet {} pays {payout}", self.bet);
            self.ledger.credit(payout);
            self.settlement = Some(Settlement {
                outcome: HandOutcome::Blackjack,
                bet: self.bet,
                payout,
                player_value: BLACKJACK,
                dealer_value: self.dealer.value(),
            });
            self.bet = 0;
            self.dealer.reveal_hole();
            self.result.push_str(HandOutcome::Blackjack.message());
            self.set_phase(RoundPhase::RoundOver);
        } else if self.dealer.shows_ace() {
            self.set_phase(RoundPhase::Insurance);
        } else {
            self.set_phase(RoundPhase::Playing);
        }

        Ok(dealt)
    }

    /// Leaves a finished round and opens betting.
    ///
    /// A player who ended the game with no chips gets the starting stake
    /// back.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not finished.
    pub fn new_round(&mut self) -> Result<(), RoundError> {
        if !self.phase.is_finished() {
            return Err(RoundError::InProgress);
        }

        if self.phase == RoundPhase::GameOver && self.ledger.balance() == 0 {
            log::info!("balance exhausted, restoring {}", self.options.starting_chips);
            self.ledger.reset(self.options.starting_chips);
        }

        self.bet = 0;
        self.count_check_ready = false;
        self.count_check_at.disarm();
        self.count_input.clear();
        self.result.clear();
        self.set_phase(RoundPhase::Betting);
        Ok(())
    }
}
