//! Error types for the points ledger
//!
//! This module defines all errors surfaced by the ledger core. Every
//! business-rule violation is detected before any mutation, so a returned
//! error always means both stores are untouched by the failed operation.
//!
//! # Error Categories
//!
//! - **Business-rule errors**: invalid amount, charge limit exceeded,
//!   insufficient balance. Rejected synchronously, never retried.
//! - **Store errors**: failures propagated from a storage collaborator.

use thiserror::Error;

/// Main error type for the points ledger
///
/// Each variant carries the context needed to diagnose the rejection.
/// The core makes no distinction between fatal and recoverable errors;
/// retry policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The requested amount is zero or negative
    ///
    /// Applies to both charge and use operations.
    #[error("Invalid amount {amount}: must be positive")]
    InvalidAmount {
        /// The rejected amount
        amount: i64,
    },

    /// The charge would push the balance above the charge limit
    ///
    /// Also covers the signed-overflow path: a charge whose sum does not
    /// fit in an i64 is rejected with this variant, never wrapped.
    #[error("Charge limit exceeded: balance {balance}, charge amount {amount}")]
    LimitExceeded {
        /// Balance at validation time
        balance: i64,
        /// The rejected charge amount
        amount: i64,
    },

    /// The use amount exceeds the current balance
    #[error("Insufficient balance: balance {balance}, requested {requested}")]
    InsufficientBalance {
        /// Balance at validation time
        balance: i64,
        /// The rejected use amount
        requested: i64,
    },

    /// A storage collaborator failed
    ///
    /// Propagated to the caller as-is; the core never retries store
    /// operations. The per-account lock is still released.
    #[error("Store error: {message}")]
    Store {
        /// Description of the store failure
        message: String,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: i64) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create a LimitExceeded error
    pub fn limit_exceeded(balance: i64, amount: i64) -> Self {
        LedgerError::LimitExceeded { balance, amount }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(balance: i64, requested: i64) -> Self {
        LedgerError::InsufficientBalance { balance, requested }
    }

    /// Create a Store error
    pub fn store(message: impl Into<String>) -> Self {
        LedgerError::Store {
            message: message.into(),
        }
    }
}
