//! Storage trait seams consumed by the ledger service
//!
//! The service is generic over these traits so the backing stores can be
//! swapped without touching the orchestration logic: the in-memory
//! implementations in [`crate::store`] for tests and local wiring, or a
//! persistent key-value store behind the same contract.
//!
//! Implementations only need to be individually thread-safe; ordering and
//! atomicity of read-modify-write sequences come from the service's
//! per-account locks, never from the store.

use crate::types::{Account, AccountId, LedgerError, Transaction, TransactionKind};

/// Persistent view of per-account balances
pub trait BalanceStore: Send + Sync {
    /// Read the stored snapshot for `id`
    ///
    /// Returns a zero-balance [`Account`] if `id` has never been written.
    fn read(&self, id: AccountId) -> Result<Account, LedgerError>;

    /// Overwrite the stored balance for `id`
    ///
    /// The write is absolute, not a delta. Returns the persisted snapshot
    /// including a fresh update timestamp.
    fn write(&self, id: AccountId, new_balance: i64) -> Result<Account, LedgerError>;
}

/// Append-only per-account transaction history
pub trait HistoryStore: Send + Sync {
    /// Append one entry to the history of `id`
    ///
    /// `millis` is the timestamp captured from the corresponding balance
    /// write, not the append time.
    fn append(
        &self,
        id: AccountId,
        amount: i64,
        kind: TransactionKind,
        millis: i64,
    ) -> Result<(), LedgerError>;

    /// Read all entries for `id` in append order
    ///
    /// Returns an empty vector if nothing has been recorded for `id`.
    fn read_all(&self, id: AccountId) -> Result<Vec<Transaction>, LedgerError>;
}
