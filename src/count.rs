//! Hi-Lo card counting.

use serde::Serialize;

use crate::card::{Card, DECK_SIZE};

/// Hi-Lo weight of a card: +1 for 2-6, 0 for 7-9, -1 for tens and Aces.
///
/// Ranks outside 1..=13 weigh nothing, as they are worth nothing in a hand.
#[must_use]
pub const fn hi_lo_weight(card: &Card) -> i32 {
    match card.rank {
        2..=6 => 1,
        1 | 10..=13 => -1,
        _ => 0,
    }
}

/// Running count over the given discard history.
///
/// ```
/// use bjcount::{Card, Suit, running_count};
///
/// let seen = [Card::new(Suit::Hearts, 2), Card::new(Suit::Clubs, 13)];
/// assert_eq!(running_count(&seen), 0);
/// ```
#[must_use]
pub fn running_count(discards: &[Card]) -> i32 {
    discards.iter().map(hi_lo_weight).sum()
}

/// Running count divided by the decks left in the shoe.
///
/// The divisor never drops below one deck.
#[must_use]
pub fn true_count(running: i32, remaining_cards: usize) -> f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let decks_remaining = (remaining_cards as f64 / DECK_SIZE as f64).max(1.0);
    f64::from(running) / decks_remaining
}

/// A count snapshot for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountReading {
    /// Sum of Hi-Lo weights over the discards.
    pub running: i32,
    /// Running count per remaining deck.
    pub true_count: f64,
}

impl CountReading {
    /// Reads the count from a discard history and the cards left in the shoe.
    #[must_use]
    pub fn from_discards(discards: &[Card], remaining_cards: usize) -> Self {
        let running = running_count(discards);
        Self {
            running,
            true_count: true_count(running, remaining_cards),
        }
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_cmp, reason = "exact quotients")]

    use super::*;
    use crate::card::Suit;

    fn card(rank: u8) -> Card {
        Card::new(Suit::Diamonds, rank)
    }

    #[test]
    fn weights_by_band() {
        for rank in 2..=6 {
            assert_eq!(hi_lo_weight(&card(rank)), 1);
        }
        for rank in 7..=9 {
            assert_eq!(hi_lo_weight(&card(rank)), 0);
        }
        for rank in [1, 10, 11, 12, 13] {
            assert_eq!(hi_lo_weight(&card(rank)), -1);
        }
    }

    #[test]
    fn unknown_ranks_weigh_nothing() {
        for rank in [0, 14, 255] {
            assert_eq!(hi_lo_weight(&card(rank)), 0);
        }
    }

    #[test]
    fn running_count_sums_history() {
        let seen = [card(1), card(13), card(10), card(8), card(4)];
        assert_eq!(running_count(&seen), -2);
        assert_eq!(running_count(&[]), 0);
    }

    #[test]
    fn true_count_uses_decks_remaining() {
        assert_eq!(true_count(6, 3 * DECK_SIZE), 2.0);
        assert_eq!(true_count(-4, 2 * DECK_SIZE), -2.0);
    }

    #[test]
    fn true_count_floor_is_one_deck() {
        assert_eq!(true_count(5, 10), 5.0);
        assert_eq!(true_count(-3, 0), -3.0);
    }

    #[test]
    fn reading_combines_both() {
        let seen = [card(2), card(3), card(5)];
        let reading = CountReading::from_discards(&seen, 3 * DECK_SIZE / 2);
        assert_eq!(reading.running, 3);
        assert_eq!(reading.true_count, 2.0);
    }
}
