//! In-memory storage collaborators
//!
//! Default implementations of the storage traits backed by concurrent
//! maps. Used by the test suite and by local wiring of the API layer.
//!
//! Both stores are individually thread-safe, but they make no ordering
//! promises across a read-modify-write sequence. Atomicity per account
//! comes from the ledger service's lock registries; the maps only have to
//! keep individual operations consistent.
//!
//! Data is not persisted; everything is lost when the process exits.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use dashmap::DashMap;

use crate::core::traits::{BalanceStore, HistoryStore};
use crate::types::{Account, AccountId, LedgerError, Transaction, TransactionKind};

/// Balance store backed by a concurrent map
#[derive(Debug, Default)]
pub struct InMemoryBalanceStore {
    accounts: DashMap<AccountId, Account>,
}

impl InMemoryBalanceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl BalanceStore for InMemoryBalanceStore {
    fn read(&self, id: AccountId) -> Result<Account, LedgerError> {
        Ok(self
            .accounts
            .get(&id)
            .map(|entry| *entry.value())
            .unwrap_or_else(|| Account::empty(id)))
    }

    fn write(&self, id: AccountId, new_balance: i64) -> Result<Account, LedgerError> {
        let account = Account {
            id,
            balance: new_balance,
            updated_millis: Utc::now().timestamp_millis(),
        };
        self.accounts.insert(id, account);
        Ok(account)
    }
}

/// History store backed by a concurrent map of append-only vectors
///
/// Transaction IDs are handed out from a single atomic cursor, so they are
/// unique across all accounts.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    entries: DashMap<AccountId, Vec<Transaction>>,
    cursor: AtomicI64,
}

impl InMemoryHistoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn append(
        &self,
        id: AccountId,
        amount: i64,
        kind: TransactionKind,
        millis: i64,
    ) -> Result<(), LedgerError> {
        let transaction = Transaction {
            id: self.cursor.fetch_add(1, Ordering::SeqCst) + 1,
            account: id,
            kind,
            amount,
            millis,
        };
        self.entries.entry(id).or_default().push(transaction);
        Ok(())
    }

    fn read_all(&self, id: AccountId) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self
            .entries
            .get(&id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_of_unseen_account_returns_zero_balance() {
        let store = InMemoryBalanceStore::new();

        let account = store.read(7).unwrap();

        assert_eq!(account, Account::empty(7));
    }

    #[test]
    fn test_write_is_absolute_and_timestamps() {
        let store = InMemoryBalanceStore::new();

        store.write(7, 500).unwrap();
        let account = store.write(7, 200).unwrap();

        assert_eq!(account.balance, 200);
        assert!(account.updated_millis > 0);
        assert_eq!(store.read(7).unwrap(), account);
    }

    #[test]
    fn test_read_all_of_unseen_account_is_empty() {
        let store = InMemoryHistoryStore::new();

        assert!(store.read_all(7).unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_order_and_assigns_unique_ids() {
        let store = InMemoryHistoryStore::new();

        store.append(7, 100, TransactionKind::Charge, 1).unwrap();
        store.append(7, 40, TransactionKind::Use, 2).unwrap();
        store.append(8, 10, TransactionKind::Charge, 3).unwrap();

        let history = store.read_all(7).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].amount, 100);
        assert_eq!(history[0].kind, TransactionKind::Charge);
        assert_eq!(history[1].amount, 40);
        assert_eq!(history[1].kind, TransactionKind::Use);

        let other = store.read_all(8).unwrap();
        assert_eq!(other.len(), 1);
        assert_ne!(history[0].id, history[1].id);
        assert_ne!(history[1].id, other[0].id);
    }

    #[test]
    fn test_append_keeps_the_supplied_timestamp() {
        let store = InMemoryHistoryStore::new();

        store.append(7, 100, TransactionKind::Charge, 12345).unwrap();

        assert_eq!(store.read_all(7).unwrap()[0].millis, 12345);
    }
}
