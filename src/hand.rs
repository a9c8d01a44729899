//! Hand evaluation and participant hands.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total a hand can have without busting.
pub const BLACKJACK: u8 = 21;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Returns the best blackjack total for the given cards.
///
/// Aces start at 11 and are reduced to 1, one at a time, while the total is
/// over 21. A busted result is the hard total with every Ace counted as 1.
///
/// ```
/// use bjcount::{Card, Suit, hand_value};
///
/// let cards = [
///     Card::new(Suit::Spades, 1),
///     Card::new(Suit::Hearts, 1),
///     Card::new(Suit::Clubs, 9),
/// ];
/// assert_eq!(hand_value(&cards), 21);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether an Ace in the cards still counts as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Value of a single card as shown next to a hidden hole card.
#[must_use]
pub const fn single_card_value(card: &Card) -> u8 {
    card_value(card.rank)
}

/// A hand held by the player or one of the AI seats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The first card dealt to the dealer is the hole card and stays face down
/// until the dealer plays; the second card is the up card used for the
/// blackjack and insurance checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Index of the face-down card.
    pub const HOLE_INDEX: usize = 0;
    /// Index of the face-up card.
    pub const UP_INDEX: usize = 1;

    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.get(Self::UP_INDEX)
    }

    /// Returns the face-down card.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.get(Self::HOLE_INDEX)
    }

    /// Returns whether the up card is an Ace.
    #[must_use]
    pub fn shows_ace(&self) -> bool {
        self.up_card().is_some_and(Card::is_ace)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only the up card if the hole is hidden).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.up_card().map_or(0, single_card_value)
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(Suit::Clubs, rank)).collect()
    }

    #[test]
    fn face_cards_count_ten() {
        assert_eq!(hand_value(&cards(&[11, 12])), 20);
        assert_eq!(hand_value(&cards(&[13, 5])), 15);
    }

    #[test]
    fn aces_reduce_one_at_a_time() {
        assert_eq!(hand_value(&cards(&[1, 1, 9])), 21);
        assert!(is_soft(&cards(&[1, 1, 9])));
        assert_eq!(hand_value(&cards(&[1, 1, 1, 1])), 14);
        assert_eq!(hand_value(&cards(&[1, 6, 10])), 17);
        assert!(!is_soft(&cards(&[1, 6, 10])));
    }

    #[test]
    fn bust_is_hard_total() {
        assert_eq!(hand_value(&cards(&[1, 10, 10, 5])), 26);
        assert_eq!(hand_value(&cards(&[10, 10, 2])), 22);
    }

    #[test]
    fn empty_hand_is_zero() {
        assert_eq!(hand_value(&[]), 0);
        assert!(!is_soft(&[]));
    }

    #[test]
    fn dealer_up_card_is_second_card() {
        let mut dealer = DealerHand::new();
        dealer.add_card(Card::new(Suit::Hearts, 10));
        dealer.add_card(Card::new(Suit::Spades, 1));

        assert!(dealer.shows_ace());
        assert_eq!(dealer.hole_card().map(|c| c.rank), Some(10));
        assert_eq!(dealer.visible_value(), 11);

        dealer.reveal_hole();
        assert_eq!(dealer.visible_value(), 21);

        dealer.clear();
        assert!(!dealer.is_hole_revealed());
        assert!(dealer.is_empty());
    }
}
