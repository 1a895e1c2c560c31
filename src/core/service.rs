//! Ledger orchestration service
//!
//! This module provides the `LedgerService` that sequences lock
//! acquisition, store reads/writes, and validation to implement the four
//! public operations: get balance, get history, charge, use.
//!
//! # Locking protocol
//!
//! Balance mutations and history appends run under two independent lock
//! domains. A write operation is two-phase: mutate the balance under the
//! balance write lock, release it, then append the history entry under the
//! history write lock. No operation ever holds more than one lock at a
//! time, so deadlock is impossible, and a long-running history read for an
//! account never delays a balance write for the same account.
//!
//! The cost is a visible window between the two phases: a concurrent
//! reader can observe the new balance before the matching history entry
//! appears. This is documented behavior, not a bug. Per-account write
//! order is still total: the balance lock serializes the mutations, and
//! because every operation enters the history phase only after finishing
//! its balance phase, both FIFO lock queues see the writes in the same
//! order.

use tracing::debug;

use crate::core::lock_registry::{BalanceLocks, HistoryLocks};
use crate::core::traits::{BalanceStore, HistoryStore};
use crate::core::validator::{validate_chargeable, validate_useable};
use crate::types::{Account, AccountId, LedgerError, Transaction, TransactionKind};

/// Orchestrates per-account balance updates and history appends
///
/// Generic over the storage collaborators; see [`crate::core::traits`].
/// All methods take `&self` and the service is `Send + Sync`, so one
/// instance is shared across every caller thread.
pub struct LedgerService<B, H> {
    balances: B,
    history: H,
    balance_locks: BalanceLocks,
    history_locks: HistoryLocks,
}

impl<B: BalanceStore, H: HistoryStore> LedgerService<B, H> {
    /// Create a service over the given stores with empty lock registries
    pub fn new(balances: B, history: H) -> Self {
        LedgerService {
            balances,
            history,
            balance_locks: BalanceLocks::new(),
            history_locks: HistoryLocks::new(),
        }
    }

    /// Get the current balance snapshot for an account
    ///
    /// Runs under the balance-domain read lock, so concurrent reads of the
    /// same account proceed in parallel while a concurrent charge or use
    /// briefly excludes them.
    ///
    /// # Arguments
    ///
    /// * `id` - The account to read
    ///
    /// # Returns
    ///
    /// The stored [`Account`] snapshot; balance 0 if `id` has never been
    /// written.
    pub fn get_balance(&self, id: AccountId) -> Result<Account, LedgerError> {
        debug!(id, "get_balance");

        self.balance_locks.with_read(id, || self.balances.read(id))
    }

    /// Get the transaction history for an account in append order
    ///
    /// Runs under the history-domain read lock. May briefly miss the entry
    /// of a write operation that has already published its new balance but
    /// not yet finished its history phase.
    ///
    /// # Arguments
    ///
    /// * `id` - The account to read
    ///
    /// # Returns
    ///
    /// All recorded [`Transaction`] entries for `id`; empty if none.
    pub fn get_history(&self, id: AccountId) -> Result<Vec<Transaction>, LedgerError> {
        debug!(id, "get_history");

        self.history_locks.with_read(id, || self.history.read_all(id))
    }

    /// Charge points onto an account
    ///
    /// Validates against [`crate::core::validator::CHARGE_LIMIT`] before
    /// mutating; a validation failure leaves both stores untouched.
    ///
    /// # Arguments
    ///
    /// * `id` - The account to charge
    /// * `amount` - The amount to add, must be positive
    ///
    /// # Returns
    ///
    /// The account snapshot as persisted by the balance phase.
    ///
    /// # Errors
    ///
    /// * `InvalidAmount` - if `amount` is zero or negative
    /// * `LimitExceeded` - if the charge would exceed the limit or overflow
    /// * `Store` - propagated from either storage collaborator
    pub fn charge(&self, id: AccountId, amount: i64) -> Result<Account, LedgerError> {
        debug!(id, amount, "charge");

        let account = self.balance_locks.with_write(id, || {
            let current = self.balances.read(id)?;
            validate_chargeable(current.balance, amount)?;
            self.balances.write(id, current.balance + amount)
        })?;

        self.history_locks.with_write(id, || {
            self.history
                .append(id, amount, TransactionKind::Charge, account.updated_millis)
        })?;

        Ok(account)
    }

    /// Use points from an account
    ///
    /// Validates the balance covers `amount` before mutating; a validation
    /// failure leaves both stores untouched and the balance can never go
    /// negative.
    ///
    /// # Arguments
    ///
    /// * `id` - The account to debit
    /// * `amount` - The amount to subtract, must be positive
    ///
    /// # Returns
    ///
    /// The account snapshot as persisted by the balance phase.
    ///
    /// # Errors
    ///
    /// * `InvalidAmount` - if `amount` is zero or negative
    /// * `InsufficientBalance` - if the balance is smaller than `amount`
    /// * `Store` - propagated from either storage collaborator
    pub fn use_points(&self, id: AccountId, amount: i64) -> Result<Account, LedgerError> {
        debug!(id, amount, "use_points");

        let account = self.balance_locks.with_write(id, || {
            let current = self.balances.read(id)?;
            validate_useable(current.balance, amount)?;
            self.balances.write(id, current.balance - amount)
        })?;

        self.history_locks.with_write(id, || {
            self.history
                .append(id, amount, TransactionKind::Use, account.updated_millis)
        })?;

        Ok(account)
    }
}
