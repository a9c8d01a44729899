use crate::card::Card;
use crate::error::ActionError;

use super::{Game, RoundPhase};

const NOT_ENOUGH_TO_DOUBLE: &str = "Not enough chips to double!";

impl Game {
    fn ensure_playing(&self) -> Result<(), ActionError> {
        if self.phase == RoundPhase::Playing {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit.
    ///
    /// The card leaves the shoe now and joins the hand on a later
    /// [`tick`](Game::tick), one reveal interval from `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing phase.
    pub fn hit(&mut self, now: u64) -> Result<Card, ActionError> {
        self.ensure_playing()?;

        let card = self.shoe.draw();
        self.player_reveal.push(card);
        self.player_reveal.restart(now);
        Ok(card)
    }

    /// Player action: Stand.
    ///
    /// Cards still waiting from earlier hits join the hand immediately, then
    /// the dealer plays.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing phase.
    pub fn stand(&mut self, now: u64) -> Result<(), ActionError> {
        self.ensure_playing()?;

        for card in self.player_reveal.drain_all() {
            self.player.add_card(card);
        }
        self.finish_round(now);
        Ok(())
    }

    /// Player action: Double down.
    ///
    /// Takes the bet again from the balance, doubles it, and queues exactly
    /// one card. The round settles as soon as that card is revealed.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing phase, an earlier
    /// hit is still being revealed, or the balance does not cover the bet.
    /// A shortfall also raises a popup.
    pub fn double(&mut self, now: u64) -> Result<Card, ActionError> {
        self.ensure_playing()?;

        if !self.player_reveal.is_empty() {
            return Err(ActionError::CardsPending);
        }

        if !self.ledger.try_debit(self.bet) {
            self.show_popup(NOT_ENOUGH_TO_DOUBLE, now, self.options.bet_popup_ms);
            return Err(ActionError::InsufficientFunds);
        }
        self.bet *= 2;

        let card = self.shoe.draw();
        self.player_reveal.push(card);
        self.player_reveal.restart(now);
        self.set_phase(RoundPhase::PlayerDoubling);
        Ok(card)
    }

    /// Player action: Split.
    ///
    /// Splitting is not supported; the action is accepted only to report
    /// that.
    ///
    /// # Errors
    ///
    /// Always returns an error: [`ActionError::SplitUnsupported`] while
    /// playing, [`ActionError::InvalidState`] otherwise.
    pub fn split(&mut self) -> Result<(), ActionError> {
        self.ensure_playing()?;
        Err(ActionError::SplitUnsupported)
    }

    /// Shows the count for a moment without changing the phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing phase.
    pub fn check_count(&mut self, now: u64) -> Result<(), ActionError> {
        self.ensure_playing()?;

        self.count_visible_until.arm(now, self.options.count_display_ms);
        Ok(())
    }

    /// Reveals at most one queued player card.
    ///
    /// When the last card lands, a bust or a finished double settles the
    /// round.
    pub(super) fn reveal_player_cards(&mut self, now: u64) {
        if self.player_reveal.is_empty() {
            return;
        }

        if let Some(card) = self.player_reveal.advance(now) {
            self.player.add_card(card);
        }

        if self.player_reveal.is_empty()
            && (self.player.is_bust() || self.phase == RoundPhase::PlayerDoubling)
        {
            self.finish_round(now);
        }
    }
}
