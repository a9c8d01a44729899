//! Chip balance with a persisted snapshot.
//!
//! The ledger writes a full `{ "balance": n }` record after every change.
//! Storage problems never reach the game: a failed load starts the player on
//! the starting stake and a failed save is logged and ignored.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// The persisted balance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    /// Chip balance. Older save files call this field `chips`.
    #[serde(alias = "chips")]
    pub balance: i64,
}

/// Stable storage for the chip balance.
pub trait BalanceStore: fmt::Debug {
    /// Reads the stored record, or `None` if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage exists but cannot be read or parsed.
    fn load(&mut self) -> Result<Option<BalanceRecord>, StoreError>;

    /// Overwrites the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&mut self, record: &BalanceRecord) -> Result<(), StoreError>;
}

/// An in-memory store.
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the game saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<Cell<Option<i64>>>,
    saves: Rc<Cell<usize>>,
    unavailable: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `balance`.
    #[must_use]
    pub fn with_balance(balance: i64) -> Self {
        let store = Self::default();
        store.slot.set(Some(balance));
        store
    }

    /// Creates a store whose every load and save fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Returns the last saved balance.
    #[must_use]
    pub fn stored(&self) -> Option<i64> {
        self.slot.get()
    }

    /// Returns how many times a record has been saved.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl BalanceStore for MemoryStore {
    fn load(&mut self) -> Result<Option<BalanceRecord>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        Ok(self.slot.get().map(|balance| BalanceRecord { balance }))
    }

    fn save(&mut self, record: &BalanceRecord) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        self.slot.set(Some(record.balance));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use file::{DEFAULT_BALANCE_PATH, FileStore};

#[cfg(feature = "std")]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{BalanceRecord, BalanceStore};
    use crate::error::StoreError;

    /// Default file name for the balance record.
    pub const DEFAULT_BALANCE_PATH: &str = "chips.json";

    /// A JSON file holding the balance record.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        /// Creates a store backed by the file at `path`.
        #[must_use]
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// Returns the backing file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Default for FileStore {
        fn default() -> Self {
            Self::new(DEFAULT_BALANCE_PATH)
        }
    }

    impl BalanceStore for FileStore {
        fn load(&mut self) -> Result<Option<BalanceRecord>, StoreError> {
            let text = match fs::read_to_string(&self.path) {
                Ok(text) => text,
                Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
                Err(err) => return Err(err.into()),
            };
            Ok(Some(serde_json::from_str(&text)?))
        }

        fn save(&mut self, record: &BalanceRecord) -> Result<(), StoreError> {
            let text = serde_json::to_string(record)?;
            fs::write(&self.path, text)?;
            Ok(())
        }
    }
}

/// The player's chip balance.
///
/// The balance is an unsigned chip count and never goes below zero.
#[derive(Debug)]
pub struct ChipLedger {
    balance: usize,
    store: Box<dyn BalanceStore>,
}

impl ChipLedger {
    /// Loads the balance from `store`.
    ///
    /// A missing, unreadable, or non-positive record yields `starting`.
    #[must_use]
    pub fn load(mut store: Box<dyn BalanceStore>, starting: usize) -> Self {
        let balance = match store.load() {
            Ok(Some(record)) if record.balance > 0 => {
                usize::try_from(record.balance).unwrap_or(usize::MAX)
            }
            Ok(Some(record)) => {
                log::debug!(
                    "stored balance {} is not positive, using {starting}",
                    record.balance
                );
                starting
            }
            Ok(None) => starting,
            Err(err) => {
                log::warn!("failed to load balance, using {starting}: {err}");
                starting
            }
        };

        Self { balance, store }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Removes `amount` if the balance covers it. Returns whether it did.
    pub fn try_debit(&mut self, amount: usize) -> bool {
        if self.balance < amount {
            return false;
        }
        self.balance -= amount;
        self.persist();
        true
    }

    /// Removes `amount`, stopping at zero.
    pub fn debit_clamped(&mut self, amount: usize) {
        self.balance = self.balance.saturating_sub(amount);
        self.persist();
    }

    /// Adds `amount`.
    pub fn credit(&mut self, amount: usize) {
        self.balance = self.balance.saturating_add(amount);
        self.persist();
    }

    /// Replaces the balance.
    pub fn reset(&mut self, balance: usize) {
        self.balance = balance;
        self.persist();
    }

    /// Writes the current balance to the store.
    pub fn persist(&mut self) {
        let record = BalanceRecord {
            balance: i64::try_from(self.balance).unwrap_or(i64::MAX),
        };
        if let Err(err) = self.store.save(&record) {
            log::warn!("failed to save balance {}: {err}", self.balance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_starts_with_stake() {
        let ledger = ChipLedger::load(Box::new(MemoryStore::new()), 100);
        assert_eq!(ledger.balance(), 100);
    }

    #[test]
    fn non_positive_record_starts_with_stake() {
        let ledger = ChipLedger::load(Box::new(MemoryStore::with_balance(0)), 100);
        assert_eq!(ledger.balance(), 100);

        let ledger = ChipLedger::load(Box::new(MemoryStore::with_balance(-40)), 100);
        assert_eq!(ledger.balance(), 100);
    }

    #[test]
    fn stored_balance_is_restored() {
        let ledger = ChipLedger::load(Box::new(MemoryStore::with_balance(725)), 100);
        assert_eq!(ledger.balance(), 725);
    }

    #[test]
    fn failing_store_never_surfaces() {
        let mut ledger = ChipLedger::load(Box::new(MemoryStore::unavailable()), 100);
        assert_eq!(ledger.balance(), 100);
        ledger.credit(5);
        assert_eq!(ledger.balance(), 105);
    }

    #[test]
    fn every_change_is_saved() {
        let store = MemoryStore::new();
        let mut ledger = ChipLedger::load(Box::new(store.clone()), 100);

        assert!(ledger.try_debit(25));
        assert_eq!(store.stored(), Some(75));
        assert!(!ledger.try_debit(500));
        assert_eq!(store.saves(), 1);

        ledger.credit(50);
        assert_eq!(store.stored(), Some(125));
        ledger.debit_clamped(1_000);
        assert_eq!(store.stored(), Some(0));
        ledger.reset(100);
        assert_eq!(store.stored(), Some(100));
        assert_eq!(store.saves(), 4);
    }

    #[cfg(feature = "std")]
    #[test]
    fn legacy_chips_field_is_accepted() {
        let record: BalanceRecord = serde_json::from_str(r#"{"chips": 350}"#).unwrap();
        assert_eq!(record.balance, 350);

        let text = serde_json::to_string(&BalanceRecord { balance: 90 }).unwrap();
        assert_eq!(text, r#"{"balance":90}"#);
    }

    #[cfg(feature = "std")]
    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chips.json");

        let mut store = FileStore::new(&path);
        assert_eq!(store.load().unwrap(), None);

        let mut ledger = ChipLedger::load(Box::new(store.clone()), 100);
        ledger.credit(60);

        assert_eq!(
            store.load().unwrap(),
            Some(BalanceRecord { balance: 160 })
        );
        assert_eq!(ChipLedger::load(Box::new(store), 100).balance(), 160);
    }

    #[cfg(feature = "std")]
    #[test]
    fn corrupt_file_falls_back_to_stake() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chips.json");
        std::fs::write(&path, "not json").unwrap();

        let ledger = ChipLedger::load(Box::new(FileStore::new(&path)), 100);
        assert_eq!(ledger.balance(), 100);
    }
}
