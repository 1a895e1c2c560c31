//! Types module
//!
//! Contains core data structures used throughout the crate.
//! This module organizes types into logical submodules:
//! - `account`: Account identifier and balance snapshot
//! - `transaction`: Transaction kinds and history entries
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountId};
pub use error::LedgerError;
pub use transaction::{Transaction, TransactionId, TransactionKind};
