//! Multi-deck shoe with discard history.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// The pool of cards left to deal, plus every card dealt since the last
/// reshuffle.
///
/// Cards are popped from the end of the shoe. Each drawn card is appended to
/// the discard history, which is the only input to the running count.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    discards: Vec<Card>,
    decks: u8,
    reshuffle_threshold: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly shuffled shoe of `decks` decks.
    ///
    /// `reshuffle_threshold` is the minimum number of cards that must remain
    /// before a draw; below it the shoe is rebuilt first. A shoe always holds
    /// at least one deck.
    #[must_use]
    pub fn new(decks: u8, reshuffle_threshold: usize, seed: u64) -> Self {
        let decks = decks.max(1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create(decks, &mut rng);

        Self {
            cards,
            discards: Vec::new(),
            decks,
            reshuffle_threshold,
            rng,
        }
    }

    /// Creates and shuffles `num_decks` standard decks.
    fn create(num_decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Refills the shoe with every deck, shuffles it, and clears the discard
    /// history.
    pub fn reshuffle(&mut self) {
        self.cards = Self::create(self.decks, &mut self.rng);
        self.discards.clear();
        log::debug!("shoe reshuffled: {} cards", self.cards.len());
    }

    /// Draws a card, reshuffling first when the shoe has run low.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a rebuilt shoe always holds at least one deck"
    )]
    pub fn draw(&mut self) -> Card {
        if self.cards.len() < self.reshuffle_threshold || self.cards.is_empty() {
            log::debug!(
                "{} cards left, below threshold {}",
                self.cards.len(),
                self.reshuffle_threshold
            );
            self.reshuffle();
        }

        let card = self
            .cards
            .pop()
            .expect("shoe was refilled above when it ran low");
        self.discards.push(card);
        card
    }

    /// Replaces the undealt cards. The last element is dealt first.
    ///
    /// The discard history is left untouched.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns every card dealt since the last reshuffle, oldest first.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the size of a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_shoe_holds_every_card_once_per_deck() {
        let shoe = Shoe::new(6, DECK_SIZE, 3);
        assert_eq!(shoe.remaining(), 6 * DECK_SIZE);
        assert!(shoe.discards().is_empty());

        let aces_of_spades = shoe
            .cards
            .iter()
            .filter(|card| **card == Card::new(Suit::Spades, 1))
            .count();
        assert_eq!(aces_of_spades, 6);
    }

    #[test]
    fn draws_move_cards_to_discards() {
        let mut shoe = Shoe::new(2, DECK_SIZE, 9);
        for _ in 0..30 {
            shoe.draw();
            assert_eq!(shoe.remaining() + shoe.discards().len(), shoe.capacity());
        }
        assert_eq!(shoe.discards().len(), 30);
    }

    #[test]
    fn draw_below_threshold_rebuilds_shoe() {
        let mut shoe = Shoe::new(1, DECK_SIZE, 5);
        let first = shoe.draw();
        assert_eq!(shoe.remaining(), DECK_SIZE - 1);
        assert_eq!(shoe.discards(), &[first]);

        let second = shoe.draw();
        assert_eq!(shoe.discards(), &[second]);
        assert_eq!(shoe.remaining(), DECK_SIZE - 1);
    }

    #[test]
    fn manual_reshuffle_resets_discards() {
        let mut shoe = Shoe::new(4, DECK_SIZE, 1);
        for _ in 0..10 {
            shoe.draw();
        }
        shoe.reshuffle();
        assert_eq!(shoe.remaining(), shoe.capacity());
        assert!(shoe.discards().is_empty());
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = Shoe::new(6, DECK_SIZE, 42);
        let mut b = Shoe::new(6, DECK_SIZE, 42);
        for _ in 0..20 {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
