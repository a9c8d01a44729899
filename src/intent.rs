//! User intents forwarded by the presentation layer.

use serde::Serialize;

/// A betting chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Chip {
    /// 25 chips.
    White,
    /// 50 chips.
    Red,
    /// 100 chips.
    Blue,
    /// 500 chips.
    Green,
    /// 1000 chips.
    Black,
}

impl Chip {
    /// Every chip, highest value first.
    pub const ALL: [Self; 5] = [Self::Black, Self::Green, Self::Blue, Self::Red, Self::White];

    /// Returns the chip's value.
    #[must_use]
    pub const fn value(self) -> usize {
        match self {
            Self::White => 25,
            Self::Red => 50,
            Self::Blue => 100,
            Self::Green => 500,
            Self::Black => 1_000,
        }
    }

    /// Returns the chip with exactly this value, if any.
    #[must_use]
    pub fn from_value(value: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|chip| chip.value() == value)
    }
}

/// Something the player asked the table to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Add a chip to the bet.
    PlaceBet(Chip),
    /// Take the whole bet back.
    ClearBet,
    /// Deal the round.
    Deal,
    /// Answer the insurance offer.
    Insurance(bool),
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet and take exactly one card.
    Double,
    /// Split a pair. Not supported.
    Split,
    /// Show the count for a moment.
    CheckCount,
    /// Type a character of the count guess.
    CountKey(char),
    /// Delete the last character of the count guess.
    CountBackspace,
    /// Submit the count guess.
    CountSubmit,
    /// Move on from the result to the count check.
    Continue,
    /// Start the next round.
    NewRound,
    /// Rebuild the shoe and reset the count.
    Reshuffle,
    /// Halt the table.
    Pause,
    /// Resume after a pause.
    Resume,
    /// Leave the table.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_round_trip_through_value() {
        for chip in Chip::ALL {
            assert_eq!(Chip::from_value(chip.value()), Some(chip));
        }
        assert_eq!(Chip::from_value(75), None);
    }
}
