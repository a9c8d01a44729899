//! Render snapshots handed to the presentation layer.

use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;

use crate::card::Card;
use crate::count::CountReading;
use crate::hand::{DealerHand, Hand};

use super::{Game, RoundPhase};

/// A hand and its total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandView {
    /// Cards in dealing order.
    pub cards: Vec<Card>,
    /// Best total.
    pub value: u8,
}

impl From<&Hand> for HandView {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
            value: hand.value(),
        }
    }
}

/// The dealer's hand as the player may see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealerView {
    /// Cards in dealing order; `None` is a face-down card.
    pub cards: Vec<Option<Card>>,
    /// Whether the hole card is face down.
    pub hole_hidden: bool,
    /// Total of the face-up cards.
    pub value: u8,
}

impl DealerView {
    fn new(dealer: &DealerHand, show_hole: bool) -> Self {
        let hole_hidden = !show_hole && !dealer.is_empty();
        let cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if hole_hidden && index == DealerHand::HOLE_INDEX {
                    None
                } else {
                    Some(*card)
                }
            })
            .collect();
        let value = if show_hole {
            dealer.value()
        } else {
            dealer.up_card().map_or(0, crate::hand::single_card_value)
        };

        Self {
            cards,
            hole_hidden,
            value,
        }
    }
}

/// Everything the presentation layer draws for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Current phase.
    pub phase: RoundPhase,
    /// Whether the pause screen is up.
    pub paused: bool,
    /// The dealer's hand.
    pub dealer: DealerView,
    /// The player's hand.
    pub player: HandView,
    /// AI hands in seat order.
    pub ai: Vec<HandView>,
    /// Cards left in the shoe.
    pub shoe_remaining: usize,
    /// Chip balance.
    pub balance: usize,
    /// Escrowed main bet.
    pub bet: usize,
    /// Escrowed insurance bet.
    pub insurance_bet: usize,
    /// Round result message; empty while nothing has been decided.
    pub result: String,
    /// The count, while it is on display.
    pub count: Option<CountReading>,
    /// The guess typed so far, during the count check.
    pub count_input: Option<String>,
    /// Whether "press space to continue" should be shown.
    pub count_check_ready: bool,
    /// A transient message.
    pub popup: Option<&'static str>,
}

impl Game {
    /// Returns whether the count is on display at `now`.
    ///
    /// It is always shown while betting and after a round, and during play
    /// for a moment after Check Count.
    #[must_use]
    pub const fn is_count_visible(&self, now: u64) -> bool {
        matches!(self.phase, RoundPhase::Betting | RoundPhase::RoundOver)
            || self.count_visible_until.is_pending(now)
    }

    /// Builds the render snapshot for `now`.
    #[must_use]
    pub fn snapshot(&self, now: u64) -> Snapshot {
        let count = self.is_count_visible(now).then(|| self.count());
        let count_input =
            (self.phase == RoundPhase::CountCheck).then(|| self.count_input.clone());
        let popup = self
            .popup
            .filter(|_| self.popup_until.is_pending(now));

        Snapshot {
            phase: self.phase,
            paused: self.paused,
            dealer: DealerView::new(&self.dealer, self.phase.shows_dealer_hand()),
            player: HandView::from(&self.player),
            ai: self.ai_hands.iter().map(HandView::from).collect(),
            shoe_remaining: self.shoe.remaining(),
            balance: self.ledger.balance(),
            bet: self.bet,
            insurance_bet: self.insurance_bet,
            result: self.result.clone(),
            count,
            count_input,
            count_check_ready: self.count_check_ready,
            popup,
        }
    }
}
