//! Transaction-related types for the points ledger
//!
//! This module defines the transaction kind and the immutable history
//! entry recorded after every successful balance mutation.

use serde::{Deserialize, Serialize};

use super::account::AccountId;

/// Transaction identifier
///
/// Assigned by the history store from a monotonically increasing counter.
pub type TransactionId = i64;

/// The two kinds of balance mutation recorded in the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    /// Points credited to an account
    ///
    /// Bounded so that the resulting balance never exceeds the charge limit.
    Charge,

    /// Points debited from an account
    ///
    /// Requires a sufficient balance to succeed.
    Use,
}

/// Immutable history entry for one charge or use event
///
/// Created by the ledger service immediately after a successful balance
/// mutation. Entries are never updated, deleted, or reordered; per-account
/// read-back order is append order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique entry identifier
    pub id: TransactionId,

    /// The account this entry belongs to
    pub account: AccountId,

    /// Whether the entry records a charge or a use
    pub kind: TransactionKind,

    /// The mutated amount, always positive
    pub amount: i64,

    /// Unix-epoch milliseconds captured from the balance write
    pub millis: i64,
}
