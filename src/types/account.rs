//! Account-related types for the points ledger
//!
//! This module defines the Account structure representing a single
//! point balance snapshot as persisted by the balance store.

use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Supports account IDs over the full signed 64-bit range used by the
/// upstream API layer.
pub type AccountId = i64;

/// Point balance snapshot for one account
///
/// Represents the persisted state of an account's balance at the moment
/// it was last written. Accounts are created implicitly with a zero
/// balance on first access and are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The account ID this balance belongs to
    pub id: AccountId,

    /// Current point balance
    ///
    /// Always non-negative. Bounded above by the charge limit immediately
    /// after a successful charge.
    pub balance: i64,

    /// Unix-epoch milliseconds of the last persisted write
    ///
    /// Zero for an account that has never been written.
    pub updated_millis: i64,
}

impl Account {
    /// Create the default snapshot for an account that has never been written
    ///
    /// # Arguments
    ///
    /// * `id` - The account ID
    ///
    /// # Returns
    ///
    /// An Account with balance 0 and no update timestamp
    pub fn empty(id: AccountId) -> Self {
        Account {
            id,
            balance: 0,
            updated_millis: 0,
        }
    }
}
