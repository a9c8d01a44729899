//! Clock-driven reveal queues and deadlines.
//!
//! All times are milliseconds on a monotonic clock owned by the caller. The
//! game never reads a clock itself; every tick passes the current time in.

use alloc::collections::VecDeque;

use crate::card::Card;

/// Cards waiting to be revealed one at a time, at a fixed interval.
#[derive(Debug, Clone)]
pub struct TimedReveal {
    pending: VecDeque<Card>,
    interval_ms: u64,
    last_fired_at: u64,
}

impl TimedReveal {
    /// Creates an empty queue revealing one card per `interval_ms`.
    #[must_use]
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            pending: VecDeque::new(),
            interval_ms,
            last_fired_at: 0,
        }
    }

    /// Queues a card behind any already pending.
    pub fn push(&mut self, card: Card) {
        self.pending.push_back(card);
    }

    /// Restarts the interval from `now`.
    pub const fn restart(&mut self, now: u64) {
        self.last_fired_at = now;
    }

    /// Releases the next card once more than one interval has elapsed since
    /// the last release.
    pub fn advance(&mut self, now: u64) -> Option<Card> {
        if self.pending.is_empty() || now.saturating_sub(self.last_fired_at) <= self.interval_ms {
            return None;
        }
        self.last_fired_at = now;
        self.pending.pop_front()
    }

    /// Removes every pending card, in order, without waiting.
    pub fn drain_all(&mut self) -> impl Iterator<Item = Card> + '_ {
        self.pending.drain(..)
    }

    /// Returns the cards still waiting.
    pub fn pending(&self) -> impl Iterator<Item = &Card> {
        self.pending.iter()
    }

    /// Returns the number of cards still waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops every pending card.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// A one-shot point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline(Option<u64>);

impl Deadline {
    /// A deadline that is not armed.
    pub const DISARMED: Self = Self(None);

    /// Arms the deadline `duration_ms` after `now`.
    pub const fn arm(&mut self, now: u64, duration_ms: u64) {
        self.0 = Some(now.saturating_add(duration_ms));
    }

    /// Disarms the deadline.
    pub const fn disarm(&mut self) {
        self.0 = None;
    }

    /// Returns whether the deadline is armed and still in the future.
    #[must_use]
    pub const fn is_pending(&self, now: u64) -> bool {
        match self.0 {
            Some(at) => now < at,
            None => false,
        }
    }

    /// Returns `true` exactly once, on the first call at or after the
    /// deadline, and disarms it.
    pub const fn fire(&mut self, now: u64) -> bool {
        match self.0 {
            Some(at) if now >= at => {
                self.0 = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn reveal_waits_for_a_full_interval() {
        let mut reveal = TimedReveal::new(300);
        reveal.push(Card::new(Suit::Hearts, 4));
        reveal.push(Card::new(Suit::Hearts, 5));
        reveal.restart(1_000);

        assert_eq!(reveal.advance(1_200), None);
        assert_eq!(reveal.advance(1_300), None);
        assert_eq!(reveal.advance(1_301).map(|c| c.rank), Some(4));
        assert_eq!(reveal.advance(1_400), None);
        assert_eq!(reveal.advance(1_602).map(|c| c.rank), Some(5));
        assert!(reveal.is_empty());
        assert_eq!(reveal.advance(5_000), None);
    }

    #[test]
    fn one_card_per_advance_even_after_long_gap() {
        let mut reveal = TimedReveal::new(300);
        for rank in 2..5 {
            reveal.push(Card::new(Suit::Clubs, rank));
        }
        assert!(reveal.advance(10_000).is_some());
        assert_eq!(reveal.len(), 2);
    }

    #[test]
    fn deadline_fires_once() {
        let mut deadline = Deadline::DISARMED;
        assert!(!deadline.fire(100));

        deadline.arm(100, 3_000);
        assert!(deadline.is_pending(3_099));
        assert!(!deadline.fire(3_099));
        assert!(deadline.fire(3_100));
        assert!(!deadline.fire(3_200));
        assert!(!deadline.is_pending(3_200));
    }
}
