//! Keyed lock registry for per-account mutual exclusion
//!
//! This module provides the `LockRegistry` struct, a lazily-populated map
//! from account ID to a fair readers-writer lock. The ledger service holds
//! two independent registries, one per lock domain (balance, history), so a
//! long-running history read never blocks a balance write for the same
//! account.
//!
//! # Design
//!
//! The registry stores one `Arc<parking_lot::RwLock<()>>` per account ID in
//! a `DashMap`. The `entry().or_insert_with()` path gives atomic
//! insert-if-absent semantics, so concurrent first access to the same ID
//! yields exactly one lock object. A duplicate lock object would defeat
//! mutual exclusion entirely, which is why an unguarded map is not an
//! option here. Entries are never evicted; a lock lives for the process
//! lifetime.
//!
//! # Fairness
//!
//! `parking_lot::RwLock` uses a task-fair queued locking policy, so
//! acquisition order matches request order and neither readers nor writers
//! starve under sustained contention from the other side.
//!
//! # Release discipline
//!
//! Acquisition is guard-based: the lock is released when the guard drops,
//! on every exit path of the protected closure, including early returns
//! and panics.

use std::marker::PhantomData;
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;

use crate::types::AccountId;

/// Marker for the balance lock domain
#[derive(Debug)]
pub enum BalanceDomain {}

/// Marker for the history lock domain
#[derive(Debug)]
pub enum HistoryDomain {}

/// Registry of per-account locks guarding balance mutations
pub type BalanceLocks = LockRegistry<BalanceDomain>;

/// Registry of per-account locks guarding history mutations
pub type HistoryLocks = LockRegistry<HistoryDomain>;

/// Keyed registry of fair readers-writer locks
///
/// The type parameter is a zero-sized domain marker. A balance lock and a
/// history lock for the same account ID are distinct objects of distinct
/// types, which keeps the service's two-phase commit (and its documented
/// inconsistency window) visible in the type system rather than an
/// accident of wiring.
#[derive(Debug)]
pub struct LockRegistry<D> {
    /// Map of account ID to its lock, created on first reference
    locks: DashMap<AccountId, Arc<RwLock<()>>>,
    _domain: PhantomData<fn() -> D>,
}

impl<D> LockRegistry<D> {
    /// Create a new registry with no locks
    pub fn new() -> Self {
        LockRegistry {
            locks: DashMap::new(),
            _domain: PhantomData,
        }
    }

    /// Run `f` while holding the shared (read) lock for `id`
    ///
    /// Multiple concurrent readers of the same ID proceed in parallel.
    /// Blocks while a writer holds or is queued for the same ID; callers
    /// on different IDs never contend.
    ///
    /// # Arguments
    ///
    /// * `id` - The account ID scoping the lock
    /// * `f` - The closure to run under the lock
    ///
    /// # Returns
    ///
    /// Whatever `f` returns. The lock is released when `f` finishes,
    /// whether it returns a value, an error, or panics.
    pub fn with_read<T>(&self, id: AccountId, f: impl FnOnce() -> T) -> T {
        let lock = self.lock_for(id);
        let _guard = lock.read();
        f()
    }

    /// Run `f` while holding the exclusive (write) lock for `id`
    ///
    /// Excludes all other readers and writers of the same ID until `f`
    /// completes. Contending callers are granted the lock in request
    /// order.
    ///
    /// # Arguments
    ///
    /// * `id` - The account ID scoping the lock
    /// * `f` - The closure to run under the lock
    ///
    /// # Returns
    ///
    /// Whatever `f` returns. The lock is released when `f` finishes,
    /// whether it returns a value, an error, or panics.
    pub fn with_write<T>(&self, id: AccountId, f: impl FnOnce() -> T) -> T {
        let lock = self.lock_for(id);
        let _guard = lock.write();
        f()
    }

    /// Get the lock for `id`, creating it on first reference
    ///
    /// The entry API makes the insert atomic: under concurrent first
    /// access, exactly one lock object is ever created for a key.
    fn lock_for(&self, id: AccountId) -> Arc<RwLock<()>> {
        self.locks
            .entry(id)
            .or_insert_with(|| Arc::new(RwLock::new(())))
            .clone()
    }

    /// Number of keys with a registered lock
    #[cfg(test)]
    pub(crate) fn registered(&self) -> usize {
        self.locks.len()
    }
}

impl<D> Default for LockRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}
