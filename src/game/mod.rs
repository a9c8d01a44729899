//! Round state machine.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::count::CountReading;
use crate::error::IntentError;
use crate::hand::{DealerHand, Hand};
use crate::intent::Intent;
use crate::ledger::{BalanceStore, ChipLedger};
use crate::options::GameOptions;
use crate::result::Settlement;
use crate::shoe::Shoe;
use crate::timer::{Deadline, TimedReveal};

mod actions;
mod bet;
mod count_check;
mod dealer;
mod insurance;
pub mod snapshot;
pub mod state;

pub use snapshot::{DealerView, HandView, Snapshot};
pub use state::{DealtCard, RoundPhase, Seat};

const RESHUFFLE_MESSAGE: &str = "Deck reshuffled & count reset!";

/// A single blackjack table: one human player, scripted AI seats, and the
/// dealer.
///
/// The table owns the shoe, the chip ledger, every hand, and the round
/// phase. It is driven by two calls from the presentation layer: intents
/// through [`Game::apply`] (or the matching methods) and a per-frame
/// [`Game::tick`] that advances card reveals and timers. Both take the
/// current time in milliseconds from a monotonic clock.
#[derive(Debug)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Cards in the shoe.
    pub shoe: Shoe,
    ledger: ChipLedger,
    phase: RoundPhase,
    player: Hand,
    dealer: DealerHand,
    ai_hands: Vec<Hand>,
    /// Escrowed main bet.
    bet: usize,
    /// Escrowed insurance bet.
    insurance_bet: usize,
    player_reveal: TimedReveal,
    dealer_reveal: TimedReveal,
    last_deal: Vec<DealtCard>,
    settlement: Option<Settlement>,
    result: String,
    count_input: String,
    /// Set once the post-round delay has passed; the player may now open
    /// the count check.
    count_check_ready: bool,
    count_check_at: Deadline,
    count_visible_until: Deadline,
    popup: Option<&'static str>,
    popup_until: Deadline,
    paused: bool,
    quit_requested: bool,
}

impl Game {
    /// Creates a table with a shoe shuffled from `seed` and the balance
    /// loaded from `store`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{Game, GameOptions, MemoryStore, RoundPhase};
    ///
    /// let game = Game::new(GameOptions::default(), 42, MemoryStore::new());
    /// assert_eq!(game.phase(), RoundPhase::Betting);
    /// assert_eq!(game.balance(), 100);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64, store: impl BalanceStore + 'static) -> Self {
        let shoe = Shoe::new(options.decks, options.reshuffle_threshold, seed);
        let ledger = ChipLedger::load(Box::new(store), options.starting_chips);
        let ai_hands = (0..options.ai_players).map(|_| Hand::new()).collect();

        log::debug!(
            "table opened: {} decks, {} AI seats, balance {}",
            shoe.decks(),
            options.ai_players,
            ledger.balance()
        );

        Self {
            player_reveal: TimedReveal::new(options.draw_interval_ms),
            dealer_reveal: TimedReveal::new(options.draw_interval_ms),
            options,
            shoe,
            ledger,
            phase: RoundPhase::Betting,
            player: Hand::new(),
            dealer: DealerHand::new(),
            ai_hands,
            bet: 0,
            insurance_bet: 0,
            last_deal: Vec::new(),
            settlement: None,
            result: String::new(),
            count_input: String::new(),
            count_check_ready: false,
            count_check_at: Deadline::DISARMED,
            count_visible_until: Deadline::DISARMED,
            popup: None,
            popup_until: Deadline::DISARMED,
            paused: false,
            quit_requested: false,
        }
    }

    fn set_phase(&mut self, phase: RoundPhase) {
        if self.phase != phase {
            log::debug!("phase {:?} -> {:?}", self.phase, phase);
        }
        self.phase = phase;
    }

    fn show_popup(&mut self, message: &'static str, now: u64, duration_ms: u64) {
        self.popup = Some(message);
        self.popup_until.arm(now, duration_ms);
    }

    /// Applies a user intent.
    ///
    /// While paused, every intent other than [`Intent::Resume`] and
    /// [`Intent::Quit`] is rejected.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying operation; the table is left
    /// unchanged when an intent is rejected.
    pub fn apply(&mut self, intent: Intent, now: u64) -> Result<(), IntentError> {
        if self.paused && !matches!(intent, Intent::Resume | Intent::Quit) {
            return Err(IntentError::Paused);
        }

        match intent {
            Intent::PlaceBet(chip) => {
                self.place_bet(chip, now)?;
            }
            Intent::ClearBet => {
                self.clear_bet()?;
            }
            Intent::Deal => {
                self.deal()?;
            }
            Intent::Insurance(take) => {
                self.insurance(take)?;
            }
            Intent::Hit => {
                self.hit(now)?;
            }
            Intent::Stand => self.stand(now)?,
            Intent::Double => {
                self.double(now)?;
            }
            Intent::Split => self.split()?,
            Intent::CheckCount => self.check_count(now)?,
            Intent::CountKey(ch) => {
                self.count_key(ch)?;
            }
            Intent::CountBackspace => self.count_backspace()?,
            Intent::CountSubmit => {
                self.submit_count()?;
            }
            Intent::Continue => self.continue_to_count_check()?,
            Intent::NewRound => self.new_round()?,
            Intent::Reshuffle => self.reshuffle(now),
            Intent::Pause => self.pause(),
            Intent::Resume => self.resume(),
            Intent::Quit => self.quit(),
        }

        Ok(())
    }

    /// Advances card reveals and timers. Call once per frame.
    ///
    /// Does nothing while paused.
    pub fn tick(&mut self, now: u64) {
        if self.popup_until.fire(now) {
            self.popup = None;
        }

        if self.paused {
            return;
        }

        match self.phase {
            RoundPhase::Playing | RoundPhase::PlayerDoubling => self.reveal_player_cards(now),
            RoundPhase::DealerDrawing => self.reveal_dealer_cards(now),
            RoundPhase::RoundOver => {
                if self.count_check_at.fire(now) {
                    self.count_input.clear();
                    self.count_check_ready = true;
                    log::debug!("count check unlocked");
                }
            }
            _ => {}
        }
    }

    /// Rebuilds the shoe and resets the count.
    ///
    /// Allowed in any phase. Hands and bets are not touched.
    pub fn reshuffle(&mut self, now: u64) {
        self.shoe.reshuffle();
        log::info!("manual reshuffle during {:?}", self.phase);
        self.show_popup(RESHUFFLE_MESSAGE, now, self.options.reshuffle_popup_ms);
    }

    /// Halts the table until [`Game::resume`].
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes after [`Game::pause`].
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Saves the balance and flags that the player wants to leave.
    pub fn quit(&mut self) {
        self.ledger.persist();
        self.quit_requested = true;
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.ledger.balance()
    }

    /// Returns the escrowed main bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the escrowed insurance bet.
    #[must_use]
    pub const fn insurance_bet(&self) -> usize {
        self.insurance_bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the AI hands, in seat order.
    #[must_use]
    pub fn ai_hands(&self) -> &[Hand] {
        &self.ai_hands
    }

    /// Returns the cards of the last deal in dealing order.
    #[must_use]
    pub fn last_deal(&self) -> &[DealtCard] {
        &self.last_deal
    }

    /// Returns the last settled round, if the current round was settled.
    #[must_use]
    pub const fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }

    /// Returns the round result message.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Returns the count check input typed so far.
    #[must_use]
    pub fn count_input(&self) -> &str {
        &self.count_input
    }

    /// Returns whether the count check can be opened.
    #[must_use]
    pub const fn is_count_check_ready(&self) -> bool {
        self.count_check_ready
    }

    /// Returns the count over every card dealt since the last reshuffle.
    #[must_use]
    pub fn count(&self) -> CountReading {
        CountReading::from_discards(self.shoe.discards(), self.shoe.remaining())
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns whether cards are still waiting to be revealed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.player_reveal.is_empty() || self.phase == RoundPhase::DealerDrawing
    }

    /// Returns whether the table is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns whether the player asked to leave.
    #[must_use]
    pub const fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
