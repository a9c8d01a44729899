use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::hand_value;
use crate::result::{HandOutcome, Settlement};

use super::{Game, RoundPhase};

const MISSING_CARDS: &str = "Error: Missing cards in hand.";
const MISSING_HANDS: &str = "Error: One or both hands are missing.";

impl Game {
    fn hands_dealt(&self) -> bool {
        !self.player.is_empty() && !self.dealer.is_empty()
    }

    /// Ends a round that cannot be settled.
    ///
    /// The bet is forfeited rather than paid against hands that do not
    /// exist.
    fn abort_round(&mut self, message: &str) {
        log::warn!("{message} (bet {} forfeited)", self.bet);
        self.result.clear();
        self.result.push_str(message);
        self.bet = 0;
        self.insurance_bet = 0;
        self.player_reveal.clear();
        self.dealer_reveal.clear();
        self.ledger.persist();
        self.set_phase(RoundPhase::GameOver);
    }

    /// Ends the player's turn.
    ///
    /// AI seats draw to the stand total at once. The dealer's draws are
    /// decided now and queued for reveal, one per interval, starting from
    /// `now`.
    pub(super) fn finish_round(&mut self, now: u64) {
        if !self.hands_dealt() {
            self.abort_round(MISSING_CARDS);
            return;
        }

        let stands_on = self.options.dealer_stands_on;
        self.dealer_reveal.clear();

        for hand in &mut self.ai_hands {
            while hand.value() < stands_on {
                hand.add_card(self.shoe.draw());
            }
        }

        let mut predicted: Vec<Card> = self.dealer.cards().to_vec();
        while hand_value(&predicted) < stands_on {
            let card = self.shoe.draw();
            self.dealer_reveal.push(card);
            predicted.push(card);
        }

        log::debug!(
            "dealer shows {} and will draw {}",
            self.dealer.value(),
            self.dealer_reveal.len()
        );

        self.dealer.reveal_hole();
        self.dealer_reveal.restart(now);
        self.set_phase(RoundPhase::DealerDrawing);
    }

    /// Reveals at most one dealer card, or settles once none are left.
    pub(super) fn reveal_dealer_cards(&mut self, now: u64) {
        if self.dealer_reveal.is_empty() {
            self.settle(now);
        } else if let Some(card) = self.dealer_reveal.advance(now) {
            self.dealer.add_card(card);
        }
    }

    /// Pays out the round and arms the count check delay.
    fn settle(&mut self, now: u64) {
        if !self.hands_dealt() {
            self.abort_round(MISSING_HANDS);
            return;
        }

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let outcome = HandOutcome::resolve(player_value, dealer_value);
        let payout = outcome.payout(self.bet);

        log::info!(
            "round settled: {outcome:?}, player {player_value} dealer {dealer_value}, bet {} pays {payout}",
            self.bet
        );

        if payout > 0 {
            self.ledger.credit(payout);
        } else {
            self.ledger.persist();
        }

        self.settlement = Some(Settlement {
            outcome,
            bet: self.bet,
            payout,
            player_value,
            dealer_value,
        });
        self.result.clear();
        self.result.push_str(outcome.message());
        self.bet = 0;
        self.insurance_bet = 0;
        self.count_check_at.arm(now, self.options.count_check_delay_ms);
        self.set_phase(RoundPhase::RoundOver);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::card::{Card, Suit};
    use crate::intent::Chip;
    use crate::ledger::MemoryStore;
    use crate::options::GameOptions;

    use super::super::{Game, RoundPhase};
    use super::{MISSING_CARDS, MISSING_HANDS};

    /// A heads-up table in play on a shoe of sevens: player 14, dealer 14.
    fn playing(balance: i64) -> (Game, MemoryStore) {
        let store = MemoryStore::with_balance(balance);
        let mut game = Game::new(GameOptions::default().with_ai_players(0), 5, store.clone());
        game.place_bet(Chip::Blue, 0).unwrap();
        game.shoe.set_cards(vec![Card::new(Suit::Clubs, 7); 60]);
        game.deal().unwrap();
        assert_eq!(game.phase(), RoundPhase::Playing);
        (game, store)
    }

    #[test]
    fn missing_player_cards_end_the_game() {
        let (mut game, store) = playing(500);
        game.player.clear();
        let saves = store.saves();

        game.finish_round(10);

        assert_eq!(game.phase(), RoundPhase::GameOver);
        assert_eq!(game.result(), MISSING_CARDS);
        assert_eq!(game.result(), "Error: Missing cards in hand.");
        assert_eq!(game.bet(), 0);
        assert!(game.dealer_reveal.is_empty());
        assert!(store.saves() > saves);
        assert_eq!(store.stored(), Some(400));
    }

    #[test]
    fn missing_dealer_cards_end_the_game() {
        let (mut game, store) = playing(500);
        game.dealer.clear();

        game.finish_round(10);

        assert_eq!(game.phase(), RoundPhase::GameOver);
        assert_eq!(game.result(), MISSING_CARDS);
        assert_eq!(store.stored(), Some(400));
    }

    #[test]
    fn hand_lost_while_dealer_draws_is_not_settled() {
        let (mut game, store) = playing(500);
        game.stand(0).unwrap();
        assert_eq!(game.phase(), RoundPhase::DealerDrawing);

        game.dealer_reveal.clear();
        game.player.clear();
        let saves = store.saves();
        game.tick(1);

        assert_eq!(game.phase(), RoundPhase::GameOver);
        assert_eq!(game.result(), MISSING_HANDS);
        assert_eq!(game.result(), "Error: One or both hands are missing.");
        assert_eq!(game.bet(), 0);
        assert!(game.settlement().is_none());
        assert!(store.saves() > saves);
        assert_eq!(store.stored(), Some(400));

        game.tick(10_000);
        assert!(!game.is_count_check_ready());
    }
}
