//! A blackjack table for card counting practice, with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that runs one human player, scripted
//! AI seats, and a dealer off a multi-deck shoe. It tracks the Hi-Lo count
//! over every card dealt since the last reshuffle and quizzes the player on
//! it after each round. The chip balance is kept in a [`ChipLedger`] that
//! saves through a [`BalanceStore`].
//!
//! # Example
//!
//! ```
//! use bjcount::{Chip, Game, GameOptions, Intent, MemoryStore, RoundPhase};
//!
//! let mut game = Game::new(GameOptions::default(), 42, MemoryStore::with_balance(500));
//! game.apply(Intent::PlaceBet(Chip::Red), 0).unwrap();
//! game.apply(Intent::Deal, 0).unwrap();
//! assert_ne!(game.phase(), RoundPhase::Betting);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod count;
pub mod error;
pub mod game;
pub mod hand;
pub mod intent;
pub mod ledger;
pub mod options;
pub mod result;
pub mod shoe;
pub mod timer;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use count::{CountReading, hi_lo_weight, running_count, true_count};
pub use error::{
    ActionError, BetError, CountCheckError, DealError, InsuranceError, IntentError, RoundError,
    StoreError,
};
pub use game::{DealerView, DealtCard, Game, HandView, RoundPhase, Seat, Snapshot};
pub use hand::{BLACKJACK, DealerHand, Hand, hand_value, is_soft};
pub use intent::{Chip, Intent};
#[cfg(feature = "std")]
pub use ledger::{DEFAULT_BALANCE_PATH, FileStore};
pub use ledger::{BalanceRecord, BalanceStore, ChipLedger, MemoryStore};
pub use options::GameOptions;
pub use result::{HandOutcome, Settlement};
pub use shoe::Shoe;
pub use timer::{Deadline, TimedReveal};
